//! The deinflection rule table.
//!
//! Rules are derived, never hand-listed: every template of every reason is
//! expanded against the per-class endings, the exception lexemes and the
//! literal overrides. The resulting table is immutable and shared.
use crate::category::Category;
use crate::class::{ClassShape, WordClass, AUX_VERBS};
use crate::inflection::{templates, Reason, OVERRIDES};
use crate::stem::{self, class_ending, LexemeMatch, StemKind, EXCEPTIONS};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use phf::phf_set;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace};

/// Closed-class particles. A rule whose whole surface is one of these would
/// fire on every noun followed by the particle, so such rules only apply
/// when a lookup knows the stripped word.
pub static BARE_PARTICLES: phf::Set<&'static str> = phf_set! {
    "は", "が", "を", "に", "で", "と", "も", "の", "へ", "や",
    "か", "ね", "よ", "な", "ぞ", "ぜ", "さ", "わ",
};

/// A particle, or the bare て that only the ichidan te-form may own.
fn is_particle_surface(surface: &str) -> bool {
    surface == "て" || BARE_PARTICLES.contains(surface)
}

/// One reversible suffix replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Suffix of the inflected form.
    pub surface: String,
    /// Suffix of the stripped form.
    pub base: String,
    /// Category the inflected form behaves as.
    pub source: Category,
    /// Classes the stripped form may belong to.
    pub target: Category,
    pub reason: Reason,
    /// Only matches when the surface is the entire word.
    pub whole_word: bool,
    /// Comes from the exception map or an override.
    pub irregular: bool,
    /// Surface is a bare particle; the stripped word must be a known lexeme.
    pub lookup_only: bool,
}

impl Rule {
    /// Strip this rule from `word` in state `current`.
    pub fn deinflect(&self, word: &str, current: Category) -> Option<String> {
        if !self.source.intersects(current) {
            return None;
        }
        let root = word.strip_suffix(self.surface.as_str())?;
        if self.whole_word && !root.is_empty() {
            return None;
        }
        if root.is_empty() && !self.stands_alone() {
            return None;
        }
        Some(format!("{}{}", root, self.base))
    }

    /// Re-apply this rule to a stripped word.
    pub fn inflect(&self, word: &str) -> Option<String> {
        let root = word.strip_suffix(self.base.as_str())?;
        if self.whole_word && !root.is_empty() {
            return None;
        }
        Some(format!("{}{}", root, self.surface))
    }

    /// The base suffix is a complete word by itself (する, 来る, lexical
    /// rules), so an empty root is allowed.
    fn stands_alone(&self) -> bool {
        self.base.chars().count() >= 2
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleTableError {
    #[error("rule table is empty")]
    Empty,
    #[error("rule {index} ({reason}) has an empty surface suffix")]
    EmptySurface { index: usize, reason: Reason },
    #[error("rule {index} ({surface} -> {base}) has an empty source category")]
    EmptySource {
        index: usize,
        surface: String,
        base: String,
    },
    #[error("rule {index} ({surface} -> {base}) targets {target:?}, which is not a set of dictionary classes")]
    InvalidTarget {
        index: usize,
        surface: String,
        base: String,
        target: Category,
    },
    #[error("rule {index} ({surface} -> {base}) does not round-trip")]
    NotReversible {
        index: usize,
        surface: String,
        base: String,
    },
}

type MergeKey = (String, String, Category, Reason, bool, bool);

#[derive(Default)]
struct Builder {
    rules: Vec<Rule>,
    merge: AHashMap<MergeKey, usize>,
    gated: usize,
}

impl Builder {
    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        surface: String,
        base: &str,
        source: Category,
        target: Category,
        reason: Reason,
        whole_word: bool,
        irregular: bool,
    ) {
        let lookup_only = !whole_word
            && is_particle_surface(&surface)
            && !(surface == "て" && reason == Reason::Te);
        if lookup_only {
            trace!("gating bare particle rule {} -> {} ({})", surface, base, reason);
            self.gated += 1;
        }
        let key = (
            surface.clone(),
            base.to_string(),
            source,
            reason,
            whole_word,
            irregular,
        );
        if let Some(&i) = self.merge.get(&key) {
            self.rules[i].target |= target;
            return;
        }
        self.merge.insert(key, self.rules.len());
        self.rules.push(Rule {
            surface,
            base: base.to_string(),
            source,
            target,
            reason,
            whole_word,
            irregular,
            lookup_only,
        });
    }

    fn regular(&mut self, reason: Reason) {
        for class in WordClass::ALL {
            // aux verbs only differ from v5r in their i-stem, see aux()
            if class == WordClass::AuxVerb {
                continue;
            }
            let shape = ClassShape::regular(class);
            let base = class_ending(class, StemKind::Dictionary);
            for tpl in templates(reason, shape) {
                let surface = format!("{}{}", class_ending(class, tpl.kind), tpl.suffix);
                self.push(surface, base, reason.yields(), shape.category(), reason, false, false);
            }
        }
    }

    fn aux(&mut self, reason: Reason) {
        for &lexeme in AUX_VERBS {
            let root = stem::root(lexeme, WordClass::AuxVerb);
            for tpl in templates(reason, ClassShape::Aux) {
                if !matches!(tpl.kind, StemKind::Continuative | StemKind::Imperative) {
                    continue;
                }
                let surface = format!(
                    "{}{}{}",
                    root,
                    class_ending(WordClass::AuxVerb, tpl.kind),
                    tpl.suffix
                );
                self.push(surface, lexeme, reason.yields(), Category::GODAN, reason, false, false);
            }
        }
    }

    fn exceptions(&mut self, reason: Reason) {
        for exc in EXCEPTIONS {
            let shape = ClassShape::of(exc.lexeme, exc.class);
            let whole_word = exc.matching == LexemeMatch::Whole;
            for tpl in templates(reason, shape) {
                let surface = format!("{}{}", exc.stem(tpl.kind), tpl.suffix);
                self.push(
                    surface,
                    exc.lexeme,
                    reason.yields(),
                    shape.category(),
                    reason,
                    whole_word,
                    true,
                );
            }
        }
    }

    fn overrides(&mut self) {
        for ov in OVERRIDES {
            self.push(
                ov.surface.to_string(),
                ov.lexeme,
                ov.reason.yields(),
                ClassShape::of(ov.lexeme, ov.class).category(),
                ov.reason,
                ov.matching == LexemeMatch::Whole,
                true,
            );
        }
    }
}

/// Immutable, validated rule list with a final-character index.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
    by_final: AHashMap<char, Vec<usize>>,
}

static SHARED: Lazy<Arc<RuleTable>> = Lazy::new(|| match RuleTable::build() {
    Ok(table) => Arc::new(table),
    Err(e) => panic!("standard rule table is malformed: {}", e),
});

impl RuleTable {
    /// Derive the standard table.
    pub fn build() -> Result<Self, RuleTableError> {
        let mut builder = Builder::default();
        for reason in Reason::ALL {
            builder.regular(reason);
            builder.aux(reason);
            builder.exceptions(reason);
        }
        builder.overrides();
        debug!(
            "built {} deinflection rules ({} gated on a lookup)",
            builder.rules.len(),
            builder.gated
        );
        Self::from_rules(builder.rules)
    }

    /// Validate and index an arbitrary rule list.
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self, RuleTableError> {
        let mut by_final: AHashMap<char, Vec<usize>> = AHashMap::new();
        for (i, rule) in rules.iter().enumerate() {
            if let Some(c) = rule.surface.chars().last() {
                by_final.entry(c).or_default().push(i);
            }
        }
        let table = Self { rules, by_final };
        table.validate()?;
        Ok(table)
    }

    /// The standard table, built once per process.
    pub fn shared() -> Arc<RuleTable> {
        Arc::clone(&SHARED)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules carrying the reason with this label. Unknown labels give an
    /// empty list.
    pub fn rules_for_reason(&self, label: &str) -> Vec<&Rule> {
        match Reason::from_label(label) {
            Some(reason) => self.rules.iter().filter(|r| r.reason == reason).collect(),
            None => Vec::new(),
        }
    }

    /// Rules whose surface is a suffix of `word`.
    pub fn rules_for_word<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        let indices = word
            .chars()
            .last()
            .and_then(|c| self.by_final.get(&c))
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        indices
            .iter()
            .map(move |&i| &self.rules[i])
            .filter(move |r| word.ends_with(r.surface.as_str()))
    }

    pub fn validate(&self) -> Result<(), RuleTableError> {
        if self.rules.is_empty() {
            return Err(RuleTableError::Empty);
        }
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.surface.is_empty() {
                return Err(RuleTableError::EmptySurface {
                    index,
                    reason: rule.reason,
                });
            }
            if rule.source.is_empty() {
                return Err(RuleTableError::EmptySource {
                    index,
                    surface: rule.surface.clone(),
                    base: rule.base.clone(),
                });
            }
            if !rule.target.is_dictionary() {
                return Err(RuleTableError::InvalidTarget {
                    index,
                    surface: rule.surface.clone(),
                    base: rule.base.clone(),
                    target: rule.target,
                });
            }
            let probe = if rule.whole_word {
                rule.surface.clone()
            } else {
                format!("試{}", rule.surface)
            };
            let round_trip = rule
                .deinflect(&probe, rule.source)
                .and_then(|stripped| rule.inflect(&stripped));
            if rule.surface == rule.base || round_trip.as_deref() != Some(probe.as_str()) {
                return Err(RuleTableError::NotReversible {
                    index,
                    surface: rule.surface.clone(),
                    base: rule.base.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(table: &'a RuleTable, surface: &str, base: &str, reason: Reason) -> Option<&'a Rule> {
        table
            .rules()
            .iter()
            .find(|r| r.surface == surface && r.base == base && r.reason == reason)
    }

    #[test]
    fn standard_table_validates() {
        let table = RuleTable::build().unwrap();
        assert!(table.len() > 500);
        table.validate().unwrap();
    }

    #[test]
    fn identical_rules_merge_targets() {
        let table = RuleTable::shared();
        let rule = find(&table, "た", "る", Reason::Past).unwrap();
        assert_eq!(rule.target, Category::ICHIDAN);
        // 食べられる and 取られる strip the same way
        let rule = find(&table, "られる", "る", Reason::Passive).unwrap();
        assert_eq!(rule.target, Category::ICHIDAN | Category::GODAN);
        let rule = find(&table, "すぎる", "い", Reason::Excessive).unwrap();
        assert_eq!(rule.target, Category::ADJ_I);
        let rule = find(&table, "って", "る", Reason::Te).unwrap();
        assert!(rule.target.contains(Category::GODAN));
    }

    #[test]
    fn bare_particle_rules_need_a_lookup() {
        let table = RuleTable::shared();
        for r in table.rules() {
            let bare = !r.whole_word && is_particle_surface(&r.surface);
            let te_form = r.surface == "て" && r.reason == Reason::Te;
            assert_eq!(r.lookup_only, bare && !te_form, "{:?}", r);
        }
        assert!(find(&table, "ね", "ぬ", Reason::Imperative).unwrap().lookup_only);
        assert!(find(&table, "て", "つ", Reason::Imperative).unwrap().lookup_only);
        assert!(!find(&table, "死ね", "死ぬ", Reason::Imperative).unwrap().lookup_only);
        assert!(!find(&table, "て", "る", Reason::Te).unwrap().lookup_only);
    }

    #[test]
    fn kana_exceptions_are_whole_word() {
        let table = RuleTable::shared();
        let rule = find(&table, "こない", "くる", Reason::Negative).unwrap();
        assert!(rule.whole_word && rule.irregular);
        let rule = find(&table, "来ない", "来る", Reason::Negative).unwrap();
        assert!(!rule.whole_word && rule.irregular);
    }

    #[test]
    fn reason_lookup() {
        let table = RuleTable::shared();
        let past = table.rules_for_reason("past");
        assert!(!past.is_empty());
        assert!(past.iter().all(|r| r.reason == Reason::Past));
        assert!(table.rules_for_reason("no such reason").is_empty());
    }

    #[test]
    fn word_lookup_uses_suffix() {
        let table = RuleTable::shared();
        let rules: Vec<_> = table.rules_for_word("食べた").collect();
        assert!(rules.iter().any(|r| r.surface == "た" && r.base == "る"));
        assert!(rules.iter().all(|r| "食べた".ends_with(r.surface.as_str())));
    }

    #[test]
    fn rule_strip_respects_category_and_root() {
        let table = RuleTable::shared();
        let rule = find(&table, "た", "る", Reason::Past).unwrap();
        assert_eq!(rule.deinflect("食べた", Category::ALL).as_deref(), Some("食べる"));
        assert_eq!(rule.deinflect("食べた", Category::ICHIDAN), None);
        assert_eq!(rule.deinflect("た", Category::ALL), None);

        let suru = find(&table, "した", "する", Reason::Past).unwrap();
        assert_eq!(suru.deinflect("した", Category::ALL).as_deref(), Some("する"));
    }

    #[test]
    fn invalid_rules_are_rejected() {
        let bad = Rule {
            surface: "た".into(),
            base: "る".into(),
            source: Category::INITIAL,
            target: Category::INITIAL,
            reason: Reason::Past,
            whole_word: false,
            irregular: false,
            lookup_only: false,
        };
        assert!(matches!(
            RuleTable::from_rules(vec![bad]),
            Err(RuleTableError::InvalidTarget { index: 0, .. })
        ));
        assert_eq!(RuleTable::from_rules(vec![]).unwrap_err(), RuleTableError::Empty);
    }
}
