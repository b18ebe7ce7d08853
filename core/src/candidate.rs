//! Deinflection candidates and their ranking.
//!
//! This module provides:
//! - `Candidate`: one proposed base form with the chain that justifies it
//! - `rank`: ordering, de-duplication and truncation of a candidate set

use crate::class::WordClass;
use crate::inflection::Reason;
use crate::meaning;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Confidence of an irregular-lexeme match or a dictionary form.
pub const CONFIDENCE_EXACT: f32 = 1.0;
/// Confidence of a single-step regular derivation.
pub const CONFIDENCE_BASE: f32 = 0.9;
/// Confidence lost per additional step.
pub const CONFIDENCE_STEP: f32 = 0.1;
pub const CONFIDENCE_FLOOR: f32 = 0.1;

/// A proposed dictionary form for an inflected surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub original_form: String,
    pub base_form: String,
    /// Reasons from the base outward: 食べなかった is `[negative, past]`.
    pub reason_chain: Vec<Reason>,
    pub class: WordClass,
    pub confidence: f32,
    pub irregular: bool,
    /// Total length in chars of the suffixes stripped on the way.
    pub specificity: usize,
    pub commonness: u32,
}

impl Candidate {
    pub fn new<S: Into<String>, B: Into<String>>(
        original_form: S,
        base_form: B,
        reason_chain: Vec<Reason>,
        class: WordClass,
        irregular: bool,
        specificity: usize,
    ) -> Self {
        let confidence = if irregular {
            CONFIDENCE_EXACT
        } else {
            let steps = reason_chain.len().saturating_sub(1) as f32;
            (CONFIDENCE_BASE - CONFIDENCE_STEP * steps).max(CONFIDENCE_FLOOR)
        };
        Candidate {
            original_form: original_form.into(),
            base_form: base_form.into(),
            reason_chain,
            class,
            confidence,
            irregular,
            specificity,
            commonness: 0,
        }
    }

    /// A surface that already is a dictionary form.
    pub fn identity<S: Into<String>>(form: S, class: WordClass) -> Self {
        let form = form.into();
        Candidate {
            original_form: form.clone(),
            base_form: form,
            reason_chain: Vec::new(),
            class,
            confidence: CONFIDENCE_EXACT,
            irregular: false,
            specificity: 0,
            commonness: 0,
        }
    }

    pub fn with_commonness(mut self, commonness: u32) -> Self {
        self.commonness = commonness;
        self
    }

    pub fn chain_len(&self) -> usize {
        self.reason_chain.len()
    }

    pub fn is_identity(&self) -> bool {
        self.reason_chain.is_empty()
    }

    /// Reason labels in chain order.
    pub fn reasons(&self) -> Vec<&'static str> {
        self.reason_chain.iter().map(|r| r.label()).collect()
    }

    /// Gloss of the inflected form, given the gloss of the base.
    pub fn describe(&self, gloss: &str) -> String {
        meaning::describe_chain(&self.reason_chain, gloss)
    }

    /// Best first: irregular, shorter chain, more common, more specific.
    pub fn rank_cmp(&self, other: &Candidate) -> Ordering {
        other
            .irregular
            .cmp(&self.irregular)
            .then_with(|| self.chain_len().cmp(&other.chain_len()))
            .then_with(|| other.commonness.cmp(&self.commonness))
            .then_with(|| other.specificity.cmp(&self.specificity))
    }
}

/// Sort best first, collapse duplicates on (base, class, chain) keeping the
/// better-ranked one, and keep at most `max` entries.
pub fn rank(mut candidates: Vec<Candidate>, max: usize) -> Vec<Candidate> {
    // stable: equal keys keep discovery order
    candidates.sort_by(Candidate::rank_cmp);
    let mut seen: AHashSet<(String, WordClass, Vec<Reason>)> = AHashSet::new();
    candidates.retain(|c| seen.insert((c.base_form.clone(), c.class, c.reason_chain.clone())));
    candidates.truncate(max);
    candidates
}
