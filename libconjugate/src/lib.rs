//! # libconjugate
//!
//! Conjugation tables for Japanese verbs and adjectives, built on the
//! inflection templates of libkatsuyou-core.

pub mod config;
pub mod forms;
pub mod generator;
pub mod group;

pub use libkatsuyou_core::{Reason, WordClass};

pub use config::ConjugateConfig;
pub use generator::Generator;
pub use group::{ConjugationGroup, ConjugationItem, GroupKind};

use once_cell::sync::Lazy;

static STANDARD: Lazy<Generator> = Lazy::new(Generator::default);

/// Generate with the default configuration.
pub fn generate(base: &str, class: WordClass, reading: &str, gloss: &str) -> Vec<ConjugationGroup> {
    STANDARD.generate(base, class, reading, gloss)
}
