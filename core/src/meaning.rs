//! English glosses for inflected forms.
//!
//! Templates are keyed by lowercase label: single reason labels as used in
//! deinflection chains, and the composite form labels of the conjugation
//! tables. `{}` is replaced by the core of the base gloss.
use crate::inflection::Reason;
use phf::phf_map;

static TEMPLATES: phf::Map<&'static str, &'static str> = phf_map! {
    "copula" => "is {}",
    "negative" => "not {}",
    "past" => "{} (past)",
    "past negative" => "did not {}",
    "te" => "{} and ...",
    "te-form" => "{} and ...",
    "negative te-form" => "without {}; not {} and ...",
    "polite" => "{} (polite)",
    "polite negative" => "not {} (polite)",
    "polite past" => "{} (polite past)",
    "polite past negative" => "did not {} (polite)",
    "volitional" => "let's {}",
    "polite volitional" => "let's {} (polite)",
    "literary presumptive" => "probably {} (literary)",
    "provisional" => "if one {}",
    "negative provisional" => "if one does not {}",
    "conditional" => "if/when one {}",
    "negative conditional" => "if one did not {}",
    "tari" => "doing things like {}",
    "representative" => "doing things like {}",
    "potential" => "can {}",
    "potential negative" => "cannot {}",
    "potential polite" => "can {} (polite)",
    "potential past" => "could {}",
    "passive" => "is {} (passive)",
    "passive negative" => "is not {} (passive)",
    "passive polite" => "is {} (passive, polite)",
    "passive past" => "was {} (passive)",
    "causative" => "make/let someone {}",
    "causative negative" => "not make/let someone {}",
    "causative polite" => "make/let someone {} (polite)",
    "causative past" => "made/let someone {}",
    "causative passive" => "be made to {}",
    "causative-passive" => "be made to {}",
    "causative-passive negative" => "not be made to {}",
    "causative-passive polite" => "be made to {} (polite)",
    "causative-passive past" => "was made to {}",
    "imperative" => "{}!",
    "negative imperative" => "don't {}!",
    "polite command" => "please {}",
    "request" => "please {}",
    "desire" => "want to {}",
    "desire negative" => "don't want to {}",
    "desire past" => "wanted to {}",
    "desire polite" => "want to {} (polite)",
    "continuous" => "{} (ongoing); be in the state of {}",
    "continuous polite" => "{} (ongoing, polite)",
    "continuous past" => "{} (was ongoing)",
    "continuous negative" => "not {} (ongoing)",
    "excessive" => "too much {}",
    "appearance" => "looks like {}",
    "simultaneous" => "while {}",
    "completion" => "{} completely; end up {}",
    "completion past" => "ended up {}",
    "preparation" => "{} in advance",
    "attempt" => "try to {}",
    "without doing" => "without {}",
    "classical negative" => "not {} (literary)",
    "become" => "become {}",
    "hearsay" => "I hear that {}",
    "seemingly" => "seems {}",
    "presumptive" => "probably {}",
    "polite presumptive" => "probably {} (polite)",
    "resemblance" => "like {}",
};

/// Core of a gloss: first sense, leading "to " dropped.
fn gloss_core(gloss: &str) -> &str {
    let first = gloss.split(';').next().unwrap_or(gloss).trim();
    first.strip_prefix("to ").unwrap_or(first)
}

/// Gloss of the form labelled `label`. Unknown labels give `gloss` back.
pub fn describe(label: &str, gloss: &str) -> String {
    let key = label.trim().to_lowercase();
    match TEMPLATES.get(key.as_str()) {
        Some(template) if !gloss.trim().is_empty() => template.replace("{}", gloss_core(gloss)),
        _ => gloss.to_string(),
    }
}

/// Gloss of a deinflection chain, applying each reason from the base out.
pub fn describe_chain(reasons: &[Reason], gloss: &str) -> String {
    reasons
        .iter()
        .fold(gloss.to_string(), |acc, r| describe(r.label(), &acc))
}

/// True when `label` has a template.
pub fn is_known(label: &str) -> bool {
    TEMPLATES.contains_key(label.trim().to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_template() {
        assert_eq!(describe("negative", "to eat"), "not eat");
        assert_eq!(describe("Potential Negative", "to eat"), "cannot eat");
        assert_eq!(describe("desire", "to write; to compose"), "want to write");
    }

    #[test]
    fn unknown_label_returns_gloss() {
        assert_eq!(describe("emphatic aorist", "to eat"), "to eat");
        assert_eq!(describe("past", ""), "");
    }

    #[test]
    fn chain_folds_outward() {
        let s = describe_chain(&[Reason::Desire, Reason::Negative], "to eat");
        assert_eq!(s, "not want to eat");
        assert_eq!(describe_chain(&[], "to eat"), "to eat");
    }

    #[test]
    fn templates_never_suffix_the_verb() {
        for (label, template) in TEMPLATES.entries() {
            let glued = template
                .match_indices("{}")
                .any(|(i, _)| template[i + 2..].starts_with(|c: char| c.is_ascii_alphabetic()));
            assert!(!glued, "{}: {}", label, template);
        }
        assert_eq!(describe("continuous", "to write"), "write (ongoing); be in the state of write");
        assert_eq!(describe("continuous past", "to write"), "write (was ongoing)");
    }

    #[test]
    fn every_reason_has_a_template() {
        for r in Reason::ALL {
            assert!(is_known(r.label()), "{}", r.label());
        }
    }
}
