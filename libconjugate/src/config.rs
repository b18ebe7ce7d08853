//! Conjugation configuration.
//!
//! The search limits in `libkatsuyou_core::Config` have no meaning for
//! synthesis, so this config stands alone and rejects their keys.
use crate::group::GroupKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConjugateConfig {
    /// Also conjugate the reading when the base is written with kanji.
    pub mirror_readings: bool,

    /// Only generate these groups; `None` generates every group.
    pub groups: Option<Vec<GroupKind>>,
}

impl Default for ConjugateConfig {
    fn default() -> Self {
        Self {
            mirror_readings: true,
            groups: None,
        }
    }
}

impl ConjugateConfig {
    pub fn wants(&self, kind: GroupKind) -> bool {
        self.groups.as_ref().map_or(true, |g| g.contains(&kind))
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ConjugateConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
