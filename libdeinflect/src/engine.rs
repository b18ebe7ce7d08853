//! Deinflection engine
//!
//! `Deinflector` turns an inflected surface into ranked dictionary-form
//! candidates:
//!
//! 1. normalize and run the particle guard
//! 2. return the surface itself if the class lookup lists it
//! 3. note which irregular lexemes the surface spells
//! 4. strip rules breadth-first, chaining through categories; rules whose
//!    surface is a bare particle need the lookup to know the stripped word
//! 5. infer classes for every stripped form, resolving with the lookup
//! 6. if nothing matched, retry on shorter prefixes the validator accepts
//! 7. rank
//!
//! The rule table is shared through `Arc`; the engine itself is immutable
//! and can be used from any number of threads.

use std::collections::VecDeque;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use libkatsuyou_core::candidate::rank;
use libkatsuyou_core::class::is_kuru;
use libkatsuyou_core::utils;
use libkatsuyou_core::{
    Candidate, Category, ClassLookup, Lexicon, MorphologicalValidator, Reason, RuleTable,
    WordClass, AUX_VERBS,
};
use phf::phf_set;
use tracing::{debug, trace};

use crate::config::DeinflectConfig;
use crate::guard::ParticleGuard;
use crate::irregular::IrregularMatcher;

/// Kana that can precede the る of an ichidan verb (i- and e-row).
static ICHIDAN_VOWEL_KANA: phf::Set<char> = phf_set! {
    'い', 'き', 'ぎ', 'し', 'じ', 'ち', 'ぢ', 'に', 'ひ', 'び', 'ぴ', 'み', 'り',
    'え', 'け', 'げ', 'せ', 'ぜ', 'て', 'で', 'ね', 'へ', 'べ', 'ぺ', 'め', 'れ',
    'イ', 'キ', 'ギ', 'シ', 'ジ', 'チ', 'ニ', 'ヒ', 'ビ', 'ミ', 'リ',
    'エ', 'ケ', 'ゲ', 'セ', 'ゼ', 'テ', 'デ', 'ネ', 'ヘ', 'ベ', 'メ', 'レ',
};

/// One node of the stripping search.
#[derive(Debug, Clone)]
struct State {
    word: String,
    category: Category,
    /// Outermost reason first, in stripping order.
    reasons: Vec<Reason>,
    irregular: bool,
    specificity: usize,
}

pub struct Deinflector {
    table: Arc<RuleTable>,
    config: DeinflectConfig,
    guard: ParticleGuard,
    irregular: IrregularMatcher,
    lookup: Option<Arc<dyn ClassLookup + Send + Sync>>,
    validator: Option<Arc<dyn MorphologicalValidator + Send + Sync>>,
}

impl Deinflector {
    pub fn new(table: Arc<RuleTable>, config: DeinflectConfig) -> Self {
        let guard = ParticleGuard::from_config(&config);
        Self {
            table,
            config,
            guard,
            irregular: IrregularMatcher::standard(),
            lookup: None,
            validator: None,
        }
    }

    /// Shared standard table, default configuration, no collaborators.
    pub fn standard() -> Self {
        Self::new(RuleTable::shared(), DeinflectConfig::default())
    }

    pub fn with_lookup(mut self, lookup: Arc<dyn ClassLookup + Send + Sync>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn MorphologicalValidator + Send + Sync>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Use one lexicon as both class lookup and validator.
    pub fn with_lexicon(self, lexicon: Arc<Lexicon>) -> Self {
        self.with_lookup(lexicon.clone()).with_validator(lexicon)
    }

    pub fn config(&self) -> &DeinflectConfig {
        &self.config
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Ranked candidates for `surface`; empty when nothing applies.
    pub fn deinflect(&self, surface: &str) -> Vec<Candidate> {
        let word = utils::normalize(surface);
        if word.is_empty() {
            return Vec::new();
        }

        let mut candidates = self.analyze(&word);
        if candidates.is_empty() {
            candidates = self.shorten(&word);
        }

        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .map(|c| {
                let commonness = self.lookup.as_ref().map_or(0, |l| l.commonness(&c.base_form));
                c.with_commonness(commonness)
            })
            .collect();
        let ranked = rank(candidates, self.config.base.max_candidates);
        debug!("deinflect {:?}: {} candidates", word, ranked.len());
        ranked
    }

    /// Guard, identity, search and class resolution for one string.
    fn analyze(&self, word: &str) -> Vec<Candidate> {
        if self.guard.blocks(word) {
            return Vec::new();
        }
        if let Some(identity) = self.identity(word) {
            return vec![identity];
        }

        let mut candidates = self.search(word);

        if self.config.irregular_exclusive && candidates.iter().any(|c| c.irregular) {
            candidates.retain(|c| c.irregular);
        }
        if self.config.require_known_base {
            if let Some(lookup) = &self.lookup {
                candidates.retain(|c| lookup.class_of(&c.base_form).is_some());
            }
        }
        candidates
    }

    /// The surface as its own dictionary form, when the lookup lists it
    /// under a class whose ending it carries.
    fn identity(&self, word: &str) -> Option<Candidate> {
        let class = self.lookup.as_ref()?.class_of(word)?;
        let carries_ending = class == WordClass::AdjectiveNa
            || word.chars().last() == Some(class.ending_character());
        carries_ending.then(|| {
            trace!("{:?} is a dictionary form ({})", word, class);
            Candidate::identity(word, class)
        })
    }

    /// Breadth-first rule stripping from `Category::ALL`.
    fn search(&self, word: &str) -> Vec<Candidate> {
        let allowed = self.irregular.matches(word);
        let max_depth = self.config.base.max_chain_depth;

        let mut found = Vec::new();
        let mut visited: AHashSet<(String, Category, Vec<Reason>)> = AHashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(State {
            word: word.to_string(),
            category: Category::ALL,
            reasons: Vec::new(),
            irregular: false,
            specificity: 0,
        });

        while let Some(state) = queue.pop_front() {
            if state.reasons.len() >= max_depth {
                continue;
            }
            for rule in self.table.rules_for_word(&state.word) {
                if rule.irregular && !allowed.contains(rule.base.as_str()) {
                    continue;
                }
                let Some(base) = rule.deinflect(&state.word, state.category) else {
                    continue;
                };
                if rule.lookup_only && !self.knows(&base) {
                    continue;
                }
                let mut reasons = state.reasons.clone();
                reasons.push(rule.reason);
                if !visited.insert((base.clone(), rule.target, reasons.clone())) {
                    continue;
                }
                let next = State {
                    word: base,
                    category: rule.target,
                    reasons,
                    irregular: state.irregular || rule.irregular,
                    specificity: state.specificity + rule.surface.chars().count(),
                };
                trace!("{:?} -> {:?} ({})", state.word, next.word, rule.reason);
                self.emit(word, &next, &mut found);
                queue.push_back(next);
            }
        }
        self.resolve(found)
    }

    fn knows(&self, base: &str) -> bool {
        self.lookup.as_ref().is_some_and(|l| l.class_of(base).is_some())
    }

    /// Record one candidate per class the stripped form can belong to.
    fn emit(&self, original: &str, state: &State, out: &mut Vec<Candidate>) {
        let chain: Vec<Reason> = state.reasons.iter().rev().copied().collect();
        for class in infer_classes(&state.word, state.category) {
            out.push(Candidate::new(
                original,
                state.word.clone(),
                chain.clone(),
                class,
                state.irregular,
                state.specificity,
            ));
        }
    }

    /// Where one (base, chain) came out with several classes, keep the one
    /// the lookup reports, if it is among them.
    fn resolve(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let Some(lookup) = &self.lookup else {
            return candidates;
        };
        let mut classes: AHashMap<(String, Vec<Reason>), Vec<WordClass>> = AHashMap::new();
        for c in &candidates {
            classes
                .entry((c.base_form.clone(), c.reason_chain.clone()))
                .or_default()
                .push(c.class);
        }
        candidates
            .into_iter()
            .filter(|c| {
                let key = (c.base_form.clone(), c.reason_chain.clone());
                let Some(options) = classes.get(&key).filter(|o| o.len() > 1) else {
                    return true;
                };
                match lookup.class_of(&c.base_form) {
                    Some(known) if options.contains(&known) => c.class == known,
                    _ => true,
                }
            })
            .collect()
    }

    /// Drop trailing characters until a prefix yields a validated base.
    fn shorten(&self, word: &str) -> Vec<Candidate> {
        let base = &self.config.base;
        let Some(validator) = &self.validator else {
            return Vec::new();
        };
        let chars: Vec<char> = word.chars().collect();
        if !base.shortening_enabled || chars.len() < base.min_shortening_input {
            return Vec::new();
        }
        for len in (base.shortening_floor.max(1)..chars.len()).rev() {
            let prefix: String = chars[..len].iter().collect();
            let valid: Vec<Candidate> = self
                .analyze(&prefix)
                .into_iter()
                .filter(|c| validator.is_valid_stem(&c.base_form))
                .collect();
            if !valid.is_empty() {
                debug!("shortened {:?} to {:?}", word, prefix);
                return valid;
            }
        }
        Vec::new()
    }
}

/// Classes `base` can take given the rule's target category. Each bit
/// contributes only when the base carries that class's dictionary ending.
pub fn infer_classes(base: &str, target: Category) -> Vec<WordClass> {
    let mut out = Vec::new();
    let last = base.chars().last();
    for bit in target.iter() {
        let class = match bit {
            Category::ICHIDAN if ichidan_plausible(base) => Some(WordClass::Ichidan),
            Category::GODAN if AUX_VERBS.contains(&base) => Some(WordClass::AuxVerb),
            Category::GODAN => last.and_then(WordClass::godan_from_ending),
            Category::SURU if base.ends_with("する") => Some(WordClass::Irregular),
            Category::KURU if is_kuru(base) => Some(WordClass::Irregular),
            Category::ADJ_I if last == Some('い') && base.chars().count() >= 2 => {
                Some(WordClass::AdjectiveI)
            }
            Category::ADJ_NA if !matches!(last, None | Some('ん') | Some('っ')) => {
                Some(WordClass::AdjectiveNa)
            }
            _ => None,
        };
        if let Some(class) = class {
            if !out.contains(&class) {
                out.push(class);
            }
        }
    }
    out
}

/// Ends in る after a kanji or an i/e-row kana.
fn ichidan_plausible(base: &str) -> bool {
    let mut chars = base.chars().rev();
    if chars.next() != Some('る') {
        return false;
    }
    match chars.next() {
        Some(c) if utils::is_kana(c) => ICHIDAN_VOWEL_KANA.contains(&c),
        Some(_) => true,
        None => false,
    }
}
