//! Conjugation table generator.
//!
//! Walks the paradigm table for a class and applies each form's chain with
//! the shared inflection templates, so every form it prints is one the
//! deinflection rules can strip again.

use crate::config::ConjugateConfig;
use crate::forms::{groups_for, FormDef};
use crate::group::{ConjugationGroup, ConjugationItem};
use libkatsuyou_core::{inflect_chain, meaning, utils, WordClass};
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: ConjugateConfig,
}

impl Generator {
    pub fn new(config: ConjugateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConjugateConfig {
        &self.config
    }

    /// Conjugation table for `base`. `reading` and `gloss` may be empty.
    pub fn generate(
        &self,
        base: &str,
        class: WordClass,
        reading: &str,
        gloss: &str,
    ) -> Vec<ConjugationGroup> {
        let base = utils::normalize(base);
        let reading = utils::normalize(reading);
        let mirror = self.config.mirror_readings
            && !reading.is_empty()
            && utils::contains_non_kana(&base);

        let groups: Vec<ConjugationGroup> = groups_for(class)
            .iter()
            .filter(|def| self.config.wants(def.kind))
            .filter_map(|def| {
                let items: Vec<ConjugationItem> = def
                    .forms
                    .iter()
                    .filter_map(|form| {
                        self.item(&base, class, mirror.then_some(reading.as_str()), gloss, form)
                    })
                    .collect();
                if items.is_empty() {
                    trace!("no {:?} forms for {} ({})", def.kind, base, class);
                    return None;
                }
                Some(ConjugationGroup {
                    kind: def.kind,
                    title: def.kind.title().to_string(),
                    items,
                })
            })
            .collect();
        debug!("generated {} groups for {} ({})", groups.len(), base, class);
        groups
    }

    fn item(
        &self,
        base: &str,
        class: WordClass,
        reading: Option<&str>,
        gloss: &str,
        form: &FormDef,
    ) -> Option<ConjugationItem> {
        let surface = inflect_chain(base, class, form.chain)?;
        let reading = reading.and_then(|r| inflect_chain(r, class, form.chain));
        Some(ConjugationItem {
            form_label: form.label.to_string(),
            surface,
            reading,
            gloss: meaning::describe(form.label, gloss),
            reasons: form.chain.to_vec(),
        })
    }
}
