//! libdeinflect crate root
//!
//! This crate provides the analysis direction: the particle guard, the
//! irregular-lexeme pre-check and a `Deinflector` that strips the shared
//! `libkatsuyou-core` rule table back to dictionary forms.
//!
//! Public API exported here:
//! - `Deinflector` from `engine`
//! - `DeinflectConfig` from `config`
//! - `ParticleGuard` from `guard`
//! - `deinflect` - convenience call on the standard table

pub mod config;
pub mod engine;
pub mod guard;
pub mod irregular;

pub use libkatsuyou_core::{Candidate, ClassLookup, Lexicon, MorphologicalValidator, Reason, WordClass};

pub use config::DeinflectConfig;
pub use engine::{infer_classes, Deinflector};
pub use guard::ParticleGuard;
pub use irregular::IrregularMatcher;

use once_cell::sync::Lazy;

static STANDARD: Lazy<Deinflector> = Lazy::new(Deinflector::standard);

/// Deinflect with the standard table and default configuration.
pub fn deinflect(surface: &str) -> Vec<Candidate> {
    STANDARD.deinflect(surface)
}
