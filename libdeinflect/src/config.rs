//! Deinflection-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libkatsuyou_core::Config` (flattened via serde)
//! - The particle guard's word lists and noun-length threshold
//! - Irregular-match and known-base filtering switches
//!
//! # Example
//!
//! ```rust
//! use libdeinflect::DeinflectConfig;
//!
//! let mut config = DeinflectConfig::default();
//! config.base.max_candidates = 5;
//! assert!(config.suffix_particles.iter().any(|p| p == "まで"));
//! ```
use serde::{Deserialize, Serialize};

/// Single particles that are never an inflected form on their own.
pub const DEFAULT_PARTICLES: &[&str] = &[
    "は", "が", "を", "に", "で", "と", "も", "の", "へ", "や", "か", "ね", "よ", "な", "ぞ",
    "さ", "わ",
];

/// Multi-mora particles that, after a short word, mark a noun phrase.
pub const DEFAULT_SUFFIX_PARTICLES: &[&str] = &[
    "まで", "から", "より", "だけ", "しか", "など", "ほど", "ばかり", "のに", "ので", "けど",
    "けれど",
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeinflectConfig {
    /// Base configuration fields (chain depth, shortening, truncation)
    #[serde(flatten)]
    pub base: libkatsuyou_core::Config,

    /// Inputs equal to one of these yield nothing.
    pub particles: Vec<String>,
    /// Inputs of a short word plus one of these yield nothing.
    pub suffix_particles: Vec<String>,
    /// Longest word (chars) in front of a suffix particle that still counts
    /// as a bare noun.
    pub max_noun_chars: usize,

    /// Drop generic derivations once an irregular lexeme matched.
    pub irregular_exclusive: bool,
    /// Drop candidates the class lookup does not know (needs a lookup).
    pub require_known_base: bool,
}

impl Default for DeinflectConfig {
    fn default() -> Self {
        Self {
            base: libkatsuyou_core::Config::default(),
            particles: DEFAULT_PARTICLES.iter().map(|s| s.to_string()).collect(),
            suffix_particles: DEFAULT_SUFFIX_PARTICLES.iter().map(|s| s.to_string()).collect(),
            max_noun_chars: 2,
            irregular_exclusive: false,
            require_known_base: false,
        }
    }
}

impl DeinflectConfig {
    /// Convert this config into the base config
    pub fn into_base(self) -> libkatsuyou_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libkatsuyou_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libkatsuyou_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: DeinflectConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_toml() {
        let cfg = DeinflectConfig::from_toml_str(
            "max_chain_depth = 3\nmax_noun_chars = 1\nparticles = [\"は\"]\n",
        )
        .unwrap();
        assert_eq!(cfg.base.max_chain_depth, 3);
        assert_eq!(cfg.base.max_candidates, 32);
        assert_eq!(cfg.max_noun_chars, 1);
        assert_eq!(cfg.particles, vec!["は".to_string()]);
        assert_eq!(cfg.suffix_particles.len(), DEFAULT_SUFFIX_PARTICLES.len());
    }
}
