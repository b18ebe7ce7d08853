//! Conjugation table output types.
use libkatsuyou_core::Reason;
use serde::{Deserialize, Serialize};

/// Grammatical category a table group collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Basic,
    Polite,
    TeForm,
    Volitional,
    Conditional,
    Potential,
    Passive,
    Causative,
    CausativePassive,
    Imperative,
    Desire,
    Advanced,
    HearsayPresumptive,
}

impl GroupKind {
    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            GroupKind::Basic => "Basic Forms",
            GroupKind::Polite => "Polite Forms",
            GroupKind::TeForm => "Te-form & Continuous",
            GroupKind::Volitional => "Volitional",
            GroupKind::Conditional => "Conditional",
            GroupKind::Potential => "Potential",
            GroupKind::Passive => "Passive",
            GroupKind::Causative => "Causative",
            GroupKind::CausativePassive => "Causative-passive",
            GroupKind::Imperative => "Imperative",
            GroupKind::Desire => "Desire",
            GroupKind::Advanced => "Advanced",
            GroupKind::HearsayPresumptive => "Hearsay & Presumptive",
        }
    }
}

/// One generated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationItem {
    pub form_label: String,
    pub surface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    pub gloss: String,
    /// Transformations applied to the base, innermost first.
    pub reasons: Vec<Reason>,
}

/// A titled set of forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationGroup {
    pub kind: GroupKind,
    pub title: String,
    pub items: Vec<ConjugationItem>,
}

impl ConjugationGroup {
    /// Item with the given label, compared case-insensitively.
    pub fn item(&self, label: &str) -> Option<&ConjugationItem> {
        self.items
            .iter()
            .find(|i| i.form_label.eq_ignore_ascii_case(label))
    }
}
