//! Paradigm tables.
//!
//! Each form is a display label plus the chain of reasons that builds it
//! from the dictionary form. The generator applies the chain with the
//! shared templates; a chain with no template for the class is skipped.
use crate::group::GroupKind;
use libkatsuyou_core::{Reason, WordClass};

use Reason::*;

#[derive(Debug)]
pub struct FormDef {
    pub label: &'static str,
    pub chain: &'static [Reason],
}

#[derive(Debug)]
pub struct GroupDef {
    pub kind: GroupKind,
    pub forms: &'static [FormDef],
}

const fn f(label: &'static str, chain: &'static [Reason]) -> FormDef {
    FormDef { label, chain }
}

const fn g(kind: GroupKind, forms: &'static [FormDef]) -> GroupDef {
    GroupDef { kind, forms }
}

pub static VERB_GROUPS: &[GroupDef] = &[
    g(GroupKind::Basic, &[
        f("Non-past", &[]),
        f("Negative", &[Negative]),
        f("Past", &[Past]),
        f("Past negative", &[Negative, Past]),
    ]),
    g(GroupKind::Polite, &[
        f("Polite", &[Polite]),
        f("Polite negative", &[PoliteNegative]),
        f("Polite past", &[PolitePast]),
        f("Polite past negative", &[PolitePastNegative]),
    ]),
    g(GroupKind::TeForm, &[
        f("Te-form", &[Te]),
        f("Negative te-form", &[Negative, Te]),
        f("Continuous", &[Continuous]),
        f("Continuous polite", &[Continuous, Polite]),
        f("Continuous past", &[Continuous, Past]),
        f("Continuous negative", &[Continuous, Negative]),
        f("Request", &[Request]),
    ]),
    g(GroupKind::Volitional, &[
        f("Volitional", &[Volitional]),
        f("Polite volitional", &[PoliteVolitional]),
    ]),
    g(GroupKind::Conditional, &[
        f("Provisional", &[Provisional]),
        f("Conditional", &[Conditional]),
        f("Negative provisional", &[Negative, Provisional]),
        f("Negative conditional", &[Negative, Conditional]),
    ]),
    g(GroupKind::Potential, &[
        f("Potential", &[Potential]),
        f("Potential negative", &[Potential, Negative]),
        f("Potential polite", &[Potential, Polite]),
        f("Potential past", &[Potential, Past]),
    ]),
    g(GroupKind::Passive, &[
        f("Passive", &[Passive]),
        f("Passive negative", &[Passive, Negative]),
        f("Passive polite", &[Passive, Polite]),
        f("Passive past", &[Passive, Past]),
    ]),
    g(GroupKind::Causative, &[
        f("Causative", &[Causative]),
        f("Causative negative", &[Causative, Negative]),
        f("Causative polite", &[Causative, Polite]),
        f("Causative past", &[Causative, Past]),
    ]),
    g(GroupKind::CausativePassive, &[
        f("Causative-passive", &[CausativePassive]),
        f("Causative-passive negative", &[CausativePassive, Negative]),
        f("Causative-passive polite", &[CausativePassive, Polite]),
        f("Causative-passive past", &[CausativePassive, Past]),
    ]),
    g(GroupKind::Imperative, &[
        f("Imperative", &[Imperative]),
        f("Negative imperative", &[NegativeImperative]),
        f("Polite command", &[PoliteCommand]),
    ]),
    g(GroupKind::Desire, &[
        f("Desire", &[Desire]),
        f("Desire negative", &[Desire, Negative]),
        f("Desire past", &[Desire, Past]),
        f("Desire polite", &[Desire, Polite]),
    ]),
    g(GroupKind::Advanced, &[
        f("Excessive", &[Excessive]),
        f("Appearance", &[Appearance]),
        f("Simultaneous", &[Simultaneous]),
        f("Representative", &[Tari]),
        f("Completion", &[Completion]),
        f("Completion past", &[Completion, Past]),
        f("Preparation", &[Preparation]),
        f("Attempt", &[Attempt]),
        f("Without doing", &[WithoutDoing]),
        f("Classical negative", &[ClassicalNegative]),
    ]),
    g(GroupKind::HearsayPresumptive, &[
        f("Hearsay", &[Hearsay]),
        f("Seemingly", &[Seemingly]),
        f("Presumptive", &[Presumptive]),
        f("Polite presumptive", &[PresumptivePolite]),
        f("Resemblance", &[Resemblance]),
    ]),
];

pub static ADJ_I_GROUPS: &[GroupDef] = &[
    g(GroupKind::Basic, &[
        f("Non-past", &[]),
        f("Negative", &[Negative]),
        f("Past", &[Past]),
        f("Past negative", &[Negative, Past]),
    ]),
    g(GroupKind::Polite, &[
        f("Polite", &[Polite]),
        f("Polite negative", &[PoliteNegative]),
        f("Polite past", &[PolitePast]),
        f("Polite past negative", &[PolitePastNegative]),
    ]),
    g(GroupKind::TeForm, &[
        f("Te-form", &[Te]),
        f("Negative te-form", &[Negative, Te]),
    ]),
    g(GroupKind::Volitional, &[f("Literary presumptive", &[Volitional])]),
    g(GroupKind::Conditional, &[
        f("Provisional", &[Provisional]),
        f("Conditional", &[Conditional]),
        f("Negative provisional", &[Negative, Provisional]),
        f("Negative conditional", &[Negative, Conditional]),
    ]),
    g(GroupKind::Advanced, &[
        f("Excessive", &[Excessive]),
        f("Appearance", &[Appearance]),
        f("Become", &[Become]),
        f("Representative", &[Tari]),
    ]),
    g(GroupKind::HearsayPresumptive, &[
        f("Hearsay", &[Hearsay]),
        f("Seemingly", &[Seemingly]),
        f("Presumptive", &[Presumptive]),
        f("Polite presumptive", &[PresumptivePolite]),
        f("Resemblance", &[Resemblance]),
    ]),
];

pub static ADJ_NA_GROUPS: &[GroupDef] = &[
    g(GroupKind::Basic, &[
        f("Non-past", &[Copula]),
        f("Negative", &[Negative]),
        f("Past", &[Past]),
        f("Past negative", &[Negative, Past]),
    ]),
    g(GroupKind::Polite, &[
        f("Polite", &[Polite]),
        f("Polite negative", &[PoliteNegative]),
        f("Polite past", &[PolitePast]),
        f("Polite past negative", &[PolitePastNegative]),
    ]),
    g(GroupKind::Conditional, &[
        f("Provisional", &[Provisional]),
        f("Conditional", &[Conditional]),
        f("Negative provisional", &[Negative, Provisional]),
    ]),
    g(GroupKind::Advanced, &[
        f("Excessive", &[Excessive]),
        f("Appearance", &[Appearance]),
        f("Become", &[Become]),
    ]),
    g(GroupKind::HearsayPresumptive, &[
        f("Hearsay", &[Hearsay]),
        f("Seemingly", &[Seemingly]),
        f("Presumptive", &[Presumptive]),
        f("Polite presumptive", &[PresumptivePolite]),
        f("Resemblance", &[Resemblance]),
    ]),
];

/// The paradigm table for `class`.
pub fn groups_for(class: WordClass) -> &'static [GroupDef] {
    match class {
        WordClass::AdjectiveI => ADJ_I_GROUPS,
        WordClass::AdjectiveNa => ADJ_NA_GROUPS,
        _ => VERB_GROUPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libkatsuyou_core::meaning;

    #[test]
    fn every_label_has_a_gloss_template() {
        for table in [VERB_GROUPS, ADJ_I_GROUPS, ADJ_NA_GROUPS] {
            for group in table {
                // the plain form keeps the base gloss
                for form in group.forms.iter().filter(|f| f.label != "Non-past") {
                    assert!(meaning::is_known(form.label), "{}", form.label);
                }
            }
        }
    }

    #[test]
    fn labels_unique_within_group() {
        for group in VERB_GROUPS {
            let mut labels: Vec<_> = group.forms.iter().map(|f| f.label).collect();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), group.forms.len());
        }
    }
}
