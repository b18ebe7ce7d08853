//! Word classes and the shapes they inflect as.
use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conjugation class of a dictionary form.
///
/// Serialized as the JMdict part-of-speech tag; the common aliases are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordClass {
    #[serde(rename = "v1", alias = "v1-s")]
    Ichidan,
    #[serde(rename = "v5u", alias = "v5u-s")]
    GodanU,
    #[serde(rename = "v5k", alias = "v5k-s")]
    GodanKu,
    #[serde(rename = "v5g")]
    GodanGu,
    #[serde(rename = "v5s")]
    GodanSu,
    #[serde(rename = "v5t")]
    GodanTsu,
    #[serde(rename = "v5n")]
    GodanNu,
    #[serde(rename = "v5b")]
    GodanBu,
    #[serde(rename = "v5m")]
    GodanMu,
    #[serde(rename = "v5r", alias = "v5r-i")]
    GodanRu,
    #[serde(rename = "vs-i", alias = "vs", alias = "vs-s", alias = "vk")]
    Irregular,
    #[serde(rename = "v5aru", alias = "aux-v")]
    AuxVerb,
    #[serde(rename = "adj-i", alias = "adj-ix")]
    AdjectiveI,
    #[serde(rename = "adj-na")]
    AdjectiveNa,
}

/// Honorific auxiliaries conjugated as -aru verbs.
pub const AUX_VERBS: &[&str] = &[
    "ござる",
    "御座る",
    "いらっしゃる",
    "なさる",
    "為さる",
    "くださる",
    "下さる",
    "おっしゃる",
    "仰る",
];

impl WordClass {
    /// Every class, in the order candidates of equal rank are listed.
    pub const ALL: [WordClass; 14] = [
        WordClass::Ichidan,
        WordClass::GodanRu,
        WordClass::GodanU,
        WordClass::GodanTsu,
        WordClass::GodanKu,
        WordClass::GodanGu,
        WordClass::GodanSu,
        WordClass::GodanMu,
        WordClass::GodanBu,
        WordClass::GodanNu,
        WordClass::Irregular,
        WordClass::AuxVerb,
        WordClass::AdjectiveI,
        WordClass::AdjectiveNa,
    ];

    pub const GODAN: [WordClass; 9] = [
        WordClass::GodanRu,
        WordClass::GodanU,
        WordClass::GodanTsu,
        WordClass::GodanKu,
        WordClass::GodanGu,
        WordClass::GodanSu,
        WordClass::GodanMu,
        WordClass::GodanBu,
        WordClass::GodanNu,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            WordClass::Ichidan => "v1",
            WordClass::GodanU => "v5u",
            WordClass::GodanKu => "v5k",
            WordClass::GodanGu => "v5g",
            WordClass::GodanSu => "v5s",
            WordClass::GodanTsu => "v5t",
            WordClass::GodanNu => "v5n",
            WordClass::GodanBu => "v5b",
            WordClass::GodanMu => "v5m",
            WordClass::GodanRu => "v5r",
            WordClass::Irregular => "vs-i",
            WordClass::AuxVerb => "v5aru",
            WordClass::AdjectiveI => "adj-i",
            WordClass::AdjectiveNa => "adj-na",
        }
    }

    /// Parse a JMdict tag or one of its aliases.
    pub fn from_tag(tag: &str) -> Option<WordClass> {
        let class = match tag.trim() {
            "v1" | "v1-s" => WordClass::Ichidan,
            "v5u" | "v5u-s" => WordClass::GodanU,
            "v5k" | "v5k-s" => WordClass::GodanKu,
            "v5g" => WordClass::GodanGu,
            "v5s" => WordClass::GodanSu,
            "v5t" => WordClass::GodanTsu,
            "v5n" => WordClass::GodanNu,
            "v5b" => WordClass::GodanBu,
            "v5m" => WordClass::GodanMu,
            "v5r" | "v5r-i" => WordClass::GodanRu,
            "vs-i" | "vs" | "vs-s" | "vk" => WordClass::Irregular,
            "v5aru" | "aux-v" => WordClass::AuxVerb,
            "adj-i" | "adj-ix" => WordClass::AdjectiveI,
            "adj-na" => WordClass::AdjectiveNa,
            _ => return None,
        };
        Some(class)
    }

    pub fn is_verb(self) -> bool {
        !matches!(self, WordClass::AdjectiveI | WordClass::AdjectiveNa)
    }

    pub fn is_godan(self) -> bool {
        WordClass::GODAN.contains(&self)
    }

    /// Final character of a dictionary form of this class. Na-adjectives are
    /// listed without their copula, so theirs is the copula itself.
    pub fn ending_character(self) -> char {
        match self {
            WordClass::Ichidan | WordClass::GodanRu | WordClass::Irregular | WordClass::AuxVerb => {
                'る'
            }
            WordClass::GodanU => 'う',
            WordClass::GodanKu => 'く',
            WordClass::GodanGu => 'ぐ',
            WordClass::GodanSu => 'す',
            WordClass::GodanTsu => 'つ',
            WordClass::GodanNu => 'ぬ',
            WordClass::GodanBu => 'ぶ',
            WordClass::GodanMu => 'む',
            WordClass::AdjectiveI => 'い',
            WordClass::AdjectiveNa => 'だ',
        }
    }

    /// Godan row whose dictionary ending is `c`.
    pub fn godan_from_ending(c: char) -> Option<WordClass> {
        WordClass::GODAN
            .into_iter()
            .find(|class| class.ending_character() == c)
    }

    /// Rule-chaining category of this class. Irregular covers both する and
    /// 来る until the base is known; see [`ClassShape::category`].
    pub fn category(self) -> Category {
        match self {
            WordClass::Ichidan => Category::ICHIDAN,
            WordClass::Irregular => Category::SURU | Category::KURU,
            WordClass::AdjectiveI => Category::ADJ_I,
            WordClass::AdjectiveNa => Category::ADJ_NA,
            _ => Category::GODAN,
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for WordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WordClass::from_tag(s).ok_or_else(|| format!("unknown word class tag: {}", s))
    }
}

/// How a class inflects. Classes sharing a shape share their templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassShape {
    Ichidan,
    Godan,
    /// Godan す-row; lacks the contracted causative-passive.
    GodanSu,
    Aux,
    Suru,
    Kuru,
    AdjectiveI,
    AdjectiveNa,
}

impl ClassShape {
    /// Shape of `base` under `class`. The irregular class resolves to suru
    /// for words ending in する and to kuru for everything else.
    pub fn of(base: &str, class: WordClass) -> ClassShape {
        match class {
            WordClass::Irregular if base.ends_with("する") => ClassShape::Suru,
            WordClass::Irregular => ClassShape::Kuru,
            other => ClassShape::regular(other),
        }
    }

    /// Shape of a class whose members all inflect alike.
    pub fn regular(class: WordClass) -> ClassShape {
        match class {
            WordClass::Ichidan => ClassShape::Ichidan,
            WordClass::GodanSu => ClassShape::GodanSu,
            WordClass::AuxVerb => ClassShape::Aux,
            WordClass::Irregular => ClassShape::Suru,
            WordClass::AdjectiveI => ClassShape::AdjectiveI,
            WordClass::AdjectiveNa => ClassShape::AdjectiveNa,
            _ => ClassShape::Godan,
        }
    }

    pub fn category(self) -> Category {
        match self {
            ClassShape::Ichidan => Category::ICHIDAN,
            ClassShape::Godan | ClassShape::GodanSu | ClassShape::Aux => Category::GODAN,
            ClassShape::Suru => Category::SURU,
            ClassShape::Kuru => Category::KURU,
            ClassShape::AdjectiveI => Category::ADJ_I,
            ClassShape::AdjectiveNa => Category::ADJ_NA,
        }
    }

    pub fn is_verb(self) -> bool {
        !matches!(self, ClassShape::AdjectiveI | ClassShape::AdjectiveNa)
    }
}

/// 来る, 來る and compounds ending in them, kana くる and kana 〜てくる
/// compounds. 出来る is ichidan.
pub fn is_kuru(base: &str) -> bool {
    if base == "くる" || base.ends_with("てくる") {
        return true;
    }
    (base.ends_with("来る") || base.ends_with("來る")) && !base.ends_with("出来る")
}
