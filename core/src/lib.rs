//! libkatsuyou-core
//!
//! Word classes, stems, inflection templates, the shared deinflection rule
//! table and configuration used by the direction-specific crates
//! (libdeinflect, libconjugate).
//!
//! Public API:
//! - `WordClass` / `ClassShape` - conjugation classes and how they inflect
//! - `StemKind` and the stem functions - per-class stem derivation
//! - `Reason` / `inflect` - primitive transformations, applied forward
//! - `RuleTable` - the validated, shared rule list used for analysis
//! - `Candidate` - ranked deinflection result
//! - `ClassLookup` / `MorphologicalValidator` / `Lexicon` - dictionary seams
//! - `Config` - shared limits
use serde::{Deserialize, Serialize};

pub mod category;
pub use category::Category;

pub mod class;
pub use class::{ClassShape, WordClass, AUX_VERBS};

pub mod stem;
pub use stem::{continuative_stem, irrealis_stem, stem, stem_for, StemKind};

pub mod inflection;
pub use inflection::{inflect, inflect_chain, templates, Inflected, Reason, Template};

pub mod rules;
pub use rules::{Rule, RuleTable, RuleTableError};

pub mod candidate;
pub use candidate::Candidate;

pub mod lexicon;
pub use lexicon::{ClassLookup, LexEntry, Lexicon, MorphologicalValidator, Segment};

pub mod meaning;

/// Generic configuration shared by analysis and synthesis.
///
/// Direction-specific options (particle sets, reading mirroring, etc.)
/// belong in `DeinflectConfig` or `ConjugateConfig` in their respective
/// crates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of rules chained in one derivation.
    pub max_chain_depth: usize,

    // Progressive Shortening
    /// Retry with a shorter input when nothing matched.
    pub shortening_enabled: bool,
    /// Inputs shorter than this (chars) are never shortened.
    pub min_shortening_input: usize,
    /// Stop shortening at this many chars.
    pub shortening_floor: usize,

    /// Maximum number of candidates returned.
    pub max_candidates: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chain_depth: 5,
            shortening_enabled: true,
            min_shortening_input: 4,
            shortening_floor: 2,
            max_candidates: 32,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Text helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// NFC-normalize and trim.
    pub fn normalize(s: &str) -> String {
        s.trim().nfc().collect::<String>()
    }

    pub fn is_hiragana(c: char) -> bool {
        ('\u{3041}'..='\u{309F}').contains(&c)
    }

    pub fn is_katakana(c: char) -> bool {
        ('\u{30A0}'..='\u{30FF}').contains(&c)
    }

    /// Hiragana, katakana or the prolonged sound mark.
    pub fn is_kana(c: char) -> bool {
        is_hiragana(c) || is_katakana(c)
    }

    /// True when `s` has any character outside the kana blocks (kanji,
    /// latin, ...).
    pub fn contains_non_kana(s: &str) -> bool {
        s.chars().any(|c| !is_kana(c))
    }
}
