//! Primitive inflections.
//!
//! Every transformation is described once, as a list of [`Template`]s per
//! ([`Reason`], [`ClassShape`]). The rule table strips them and the
//! generator appends them, so both directions agree by construction.
use crate::class::{ClassShape, WordClass};
use crate::category::Category;
use crate::stem::{self, LexemeMatch, StemKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single grammatical transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Reason {
    Copula,
    Negative,
    Past,
    Te,
    Polite,
    PoliteNegative,
    PolitePast,
    PolitePastNegative,
    Volitional,
    PoliteVolitional,
    Provisional,
    Conditional,
    Tari,
    Potential,
    Passive,
    Causative,
    CausativePassive,
    Imperative,
    NegativeImperative,
    PoliteCommand,
    Request,
    Desire,
    Continuous,
    Excessive,
    Appearance,
    Simultaneous,
    Completion,
    Preparation,
    Attempt,
    WithoutDoing,
    ClassicalNegative,
    Become,
    Hearsay,
    Seemingly,
    Presumptive,
    PresumptivePolite,
    Resemblance,
}

impl Reason {
    pub const ALL: [Reason; 37] = [
        Reason::Copula,
        Reason::Negative,
        Reason::Past,
        Reason::Te,
        Reason::Polite,
        Reason::PoliteNegative,
        Reason::PolitePast,
        Reason::PolitePastNegative,
        Reason::Volitional,
        Reason::PoliteVolitional,
        Reason::Provisional,
        Reason::Conditional,
        Reason::Tari,
        Reason::Potential,
        Reason::Passive,
        Reason::Causative,
        Reason::CausativePassive,
        Reason::Imperative,
        Reason::NegativeImperative,
        Reason::PoliteCommand,
        Reason::Request,
        Reason::Desire,
        Reason::Continuous,
        Reason::Excessive,
        Reason::Appearance,
        Reason::Simultaneous,
        Reason::Completion,
        Reason::Preparation,
        Reason::Attempt,
        Reason::WithoutDoing,
        Reason::ClassicalNegative,
        Reason::Become,
        Reason::Hearsay,
        Reason::Seemingly,
        Reason::Presumptive,
        Reason::PresumptivePolite,
        Reason::Resemblance,
    ];

    /// Stable lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Reason::Copula => "copula",
            Reason::Negative => "negative",
            Reason::Past => "past",
            Reason::Te => "te",
            Reason::Polite => "polite",
            Reason::PoliteNegative => "polite negative",
            Reason::PolitePast => "polite past",
            Reason::PolitePastNegative => "polite past negative",
            Reason::Volitional => "volitional",
            Reason::PoliteVolitional => "polite volitional",
            Reason::Provisional => "provisional",
            Reason::Conditional => "conditional",
            Reason::Tari => "tari",
            Reason::Potential => "potential",
            Reason::Passive => "passive",
            Reason::Causative => "causative",
            Reason::CausativePassive => "causative passive",
            Reason::Imperative => "imperative",
            Reason::NegativeImperative => "negative imperative",
            Reason::PoliteCommand => "polite command",
            Reason::Request => "request",
            Reason::Desire => "desire",
            Reason::Continuous => "continuous",
            Reason::Excessive => "excessive",
            Reason::Appearance => "appearance",
            Reason::Simultaneous => "simultaneous",
            Reason::Completion => "completion",
            Reason::Preparation => "preparation",
            Reason::Attempt => "attempt",
            Reason::WithoutDoing => "without doing",
            Reason::ClassicalNegative => "classical negative",
            Reason::Become => "become",
            Reason::Hearsay => "hearsay",
            Reason::Seemingly => "seemingly",
            Reason::Presumptive => "presumptive",
            Reason::PresumptivePolite => "polite presumptive",
            Reason::Resemblance => "resemblance",
        }
    }

    pub fn from_label(label: &str) -> Option<Reason> {
        let label = label.trim().to_lowercase();
        Reason::ALL.into_iter().find(|r| r.label() == label)
    }

    /// Class of the word this transformation produces, when that word can
    /// inflect further (食べる + negative = 食べない, an i-adjective).
    pub fn result_class(self) -> Option<WordClass> {
        match self {
            Reason::Negative | Reason::Desire => Some(WordClass::AdjectiveI),
            Reason::Potential
            | Reason::Passive
            | Reason::Causative
            | Reason::CausativePassive
            | Reason::Continuous
            | Reason::Excessive
            | Reason::Attempt => Some(WordClass::Ichidan),
            Reason::Completion => Some(WordClass::GodanU),
            Reason::Preparation => Some(WordClass::GodanKu),
            Reason::Become => Some(WordClass::GodanRu),
            _ => None,
        }
    }

    /// Category an inflected word behaves as; the source of its rules.
    pub fn yields(self) -> Category {
        match self.result_class() {
            Some(class) => ClassShape::regular(class).category(),
            None => Category::INITIAL,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Reason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reason::from_label(s).ok_or_else(|| format!("unknown reason: {}", s))
    }
}

impl From<Reason> for &'static str {
    fn from(r: Reason) -> Self {
        r.label()
    }
}

impl TryFrom<String> for Reason {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Stem kind plus the suffix appended to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub kind: StemKind,
    pub suffix: &'static str,
}

macro_rules! t {
    ($kind:ident, $suffix:expr) => {
        Template {
            kind: StemKind::$kind,
            suffix: $suffix,
        }
    };
}

/// Templates for `reason` on `shape`. The first is the standard form; any
/// further ones are accepted variants. Empty when the reason does not
/// apply to the shape.
pub fn templates(reason: Reason, shape: ClassShape) -> &'static [Template] {
    use ClassShape as S;
    use Reason as R;

    let verb = shape.is_verb();
    let adj_i = shape == S::AdjectiveI;
    let adj_na = shape == S::AdjectiveNa;

    match reason {
        R::Copula if adj_na => &[t!(Root, "だ")],
        R::Negative if adj_na => &[t!(Irrealis, "ない"), t!(Root, "じゃない")],
        R::Negative => &[t!(Irrealis, "ない")],
        R::Past => &[t!(Ta, "")],
        R::Te if verb || adj_i => &[t!(Te, "")],
        R::Polite if verb => &[t!(Continuative, "ます")],
        R::Polite if adj_i => &[t!(Dictionary, "です")],
        R::Polite if adj_na => &[t!(Root, "です")],
        R::PoliteNegative if verb => &[t!(Continuative, "ません")],
        R::PoliteNegative if adj_i => &[t!(Irrealis, "ありません"), t!(Irrealis, "ないです")],
        R::PoliteNegative if adj_na => &[t!(Irrealis, "ありません"), t!(Root, "じゃありません")],
        R::PolitePast if verb => &[t!(Continuative, "ました")],
        R::PolitePast if adj_i => &[t!(Ta, "です")],
        R::PolitePast if adj_na => &[t!(Root, "でした")],
        R::PolitePastNegative if verb => &[t!(Continuative, "ませんでした")],
        R::PolitePastNegative if adj_i => &[t!(Irrealis, "ありませんでした")],
        R::PolitePastNegative if adj_na => {
            &[t!(Irrealis, "ありませんでした"), t!(Root, "じゃありませんでした")]
        }
        R::Volitional if verb || adj_i => &[t!(Volitional, "う")],
        R::PoliteVolitional if verb => &[t!(Continuative, "ましょう")],
        R::Provisional if adj_na => &[t!(Hypothetical, ""), t!(Root, "であれば")],
        R::Provisional => &[t!(Hypothetical, "ば")],
        R::Conditional => &[t!(Ta, "ら")],
        R::Tari if verb || adj_i => &[t!(Ta, "り")],

        R::Potential => match shape {
            S::Ichidan | S::Kuru => &[t!(Irrealis, "られる")],
            S::Godan | S::GodanSu => &[t!(Hypothetical, "る")],
            S::Suru => &[t!(Root, "できる")],
            _ => &[],
        },
        R::Passive => match shape {
            S::Ichidan | S::Kuru => &[t!(Irrealis, "られる")],
            S::Godan | S::GodanSu => &[t!(Irrealis, "れる")],
            S::Suru => &[t!(Root, "される")],
            _ => &[],
        },
        R::Causative => match shape {
            S::Ichidan | S::Kuru => &[t!(Irrealis, "させる")],
            S::Godan | S::GodanSu => &[t!(Irrealis, "せる")],
            S::Suru => &[t!(Root, "させる")],
            _ => &[],
        },
        R::CausativePassive => match shape {
            S::Ichidan | S::Kuru => &[t!(Irrealis, "させられる")],
            S::Godan => &[t!(Irrealis, "される"), t!(Irrealis, "せられる")],
            S::GodanSu => &[t!(Irrealis, "せられる")],
            S::Suru => &[t!(Root, "させられる")],
            _ => &[],
        },

        R::Imperative if shape == S::Suru => &[t!(Imperative, ""), t!(Root, "せよ")],
        R::Imperative if verb => &[t!(Imperative, "")],
        R::NegativeImperative if verb => &[t!(Dictionary, "な")],
        R::PoliteCommand if verb => &[t!(Continuative, "なさい")],
        R::Request if verb => &[t!(Te, "ください")],
        R::Desire if verb => &[t!(Continuative, "たい")],
        R::Continuous if verb => &[t!(Te, "いる")],
        R::Excessive if verb => &[t!(Continuative, "すぎる")],
        R::Excessive => &[t!(Root, "すぎる")],
        R::Appearance if verb => &[t!(Continuative, "そう")],
        R::Appearance => &[t!(Root, "そう")],
        R::Simultaneous if verb => &[t!(Continuative, "ながら")],
        R::Completion if verb => &[t!(Te, "しまう")],
        R::Preparation if verb => &[t!(Te, "おく")],
        R::Attempt if verb => &[t!(Te, "みる")],
        R::WithoutDoing if shape == S::Suru => &[t!(Root, "せずに")],
        R::WithoutDoing if verb => &[t!(Irrealis, "ずに")],
        R::ClassicalNegative if shape == S::Suru => &[t!(Root, "せず")],
        R::ClassicalNegative if verb => &[t!(Irrealis, "ず")],
        R::Become if adj_i || adj_na => &[t!(Continuative, "なる")],

        R::Hearsay if adj_na => &[t!(Root, "だそうだ")],
        R::Hearsay => &[t!(Dictionary, "そうだ")],
        R::Seemingly if adj_na => &[t!(Root, "らしい")],
        R::Seemingly => &[t!(Dictionary, "らしい")],
        R::Presumptive if adj_na => &[t!(Volitional, "う")],
        R::Presumptive => &[t!(Dictionary, "だろう")],
        R::PresumptivePolite if adj_na => &[t!(Root, "でしょう")],
        R::PresumptivePolite => &[t!(Dictionary, "でしょう")],
        R::Resemblance if adj_na => &[t!(Root, "みたい")],
        R::Resemblance => &[t!(Dictionary, "みたい")],

        _ => &[],
    }
}

/// A whole inflected form that no template produces.
#[derive(Debug)]
pub struct Override {
    pub lexeme: &'static str,
    pub class: WordClass,
    pub matching: LexemeMatch,
    pub reason: Reason,
    pub surface: &'static str,
}

const fn o(
    lexeme: &'static str,
    class: WordClass,
    matching: LexemeMatch,
    reason: Reason,
    surface: &'static str,
) -> Override {
    Override { lexeme, class, matching, reason, surface }
}

pub static OVERRIDES: &[Override] = &[
    o("ある", WordClass::GodanRu, LexemeMatch::Whole, Reason::Negative, "ない"),
    o("いい", WordClass::AdjectiveI, LexemeMatch::Whole, Reason::Appearance, "よさそう"),
    o("よい", WordClass::AdjectiveI, LexemeMatch::Whole, Reason::Appearance, "よさそう"),
    o("かっこいい", WordClass::AdjectiveI, LexemeMatch::Whole, Reason::Appearance, "かっこよさそう"),
    o("格好いい", WordClass::AdjectiveI, LexemeMatch::Whole, Reason::Appearance, "格好よさそう"),
    o("気持ちいい", WordClass::AdjectiveI, LexemeMatch::Whole, Reason::Appearance, "気持ちよさそう"),
    o("良い", WordClass::AdjectiveI, LexemeMatch::Suffix, Reason::Appearance, "良さそう"),
    o("ない", WordClass::AdjectiveI, LexemeMatch::Whole, Reason::Appearance, "なさそう"),
    o("無い", WordClass::AdjectiveI, LexemeMatch::Suffix, Reason::Appearance, "無さそう"),
];

impl Override {
    fn apply(&self, word: &str) -> Option<String> {
        let prefix = match self.matching {
            LexemeMatch::Whole => (word == self.lexeme).then_some("")?,
            LexemeMatch::Suffix => word.strip_suffix(self.lexeme)?,
        };
        Some(format!("{}{}", prefix, self.surface))
    }
}

/// Result of applying one reason to a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflected {
    pub surface: String,
    /// Class the new word inflects as, if it inflects further.
    pub class: Option<WordClass>,
}

/// Apply `reason` to `word` of class `class` using the standard template.
/// `None` when the reason has no form for this class.
pub fn inflect(word: &str, class: WordClass, reason: Reason) -> Option<Inflected> {
    let surface = OVERRIDES
        .iter()
        .filter(|ov| ov.reason == reason && ov.class == class)
        .find_map(|ov| ov.apply(word))
        .or_else(|| {
            let template = templates(reason, ClassShape::of(word, class)).first()?;
            let stem = stem::stem_for(word, class, template.kind);
            Some(format!("{}{}", stem, template.suffix))
        })?;
    Some(Inflected {
        surface,
        class: reason.result_class(),
    })
}

/// Apply a chain of reasons in order. `None` as soon as a step has no form
/// or the previous step produced a word that does not inflect further.
pub fn inflect_chain(word: &str, class: WordClass, chain: &[Reason]) -> Option<String> {
    let mut current = word.to_string();
    let mut current_class = Some(class);
    for &reason in chain {
        let class = current_class?;
        let next = inflect(&current, class, reason)?;
        current = next.surface;
        current_class = next.class;
    }
    Some(current)
}
