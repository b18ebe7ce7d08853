/// End-to-end deinflection on the standard table without collaborators.
use libdeinflect::{deinflect, Candidate, Reason, WordClass};

fn find<'a>(cands: &'a [Candidate], base: &str, class: WordClass) -> Option<&'a Candidate> {
    cands.iter().find(|c| c.base_form == base && c.class == class)
}

#[test]
fn past_of_ichidan() {
    let cands = deinflect("食べた");
    let c = find(&cands, "食べる", WordClass::Ichidan).expect("食べる missing");
    assert_eq!(c.reason_chain, vec![Reason::Past]);
    assert_eq!(c.reasons(), vec!["past"]);
    assert_eq!(c.original_form, "食べた");
}

#[test]
fn irregular_kuru_ranks_first() {
    let cands = deinflect("こられません");
    let top = &cands[0];
    assert_eq!(top.base_form, "くる");
    assert_eq!(top.class, WordClass::Irregular);
    assert!(top.irregular);
    assert_eq!(top.confidence, 1.0);
    assert_eq!(*top.reason_chain.last().unwrap(), Reason::PoliteNegative);
}

#[test]
fn kanji_kuru_and_compounds() {
    let top = &deinflect("来ました")[0];
    assert_eq!((top.base_form.as_str(), top.class), ("来る", WordClass::Irregular));
    assert_eq!(top.reason_chain, vec![Reason::PolitePast]);

    let cands = deinflect("持って来た");
    assert_eq!(cands[0].base_form, "持って来る");
    assert!(cands[0].irregular);
}

#[test]
fn deki_ru_is_not_kuru() {
    let cands = deinflect("出来ない");
    assert!(find(&cands, "出来る", WordClass::Ichidan).is_some());
    assert!(find(&cands, "出来る", WordClass::Irregular).is_none());
}

#[test]
fn particle_guard() {
    assert!(deinflect("みまで").is_empty());
    assert!(deinflect("は").is_empty());
    assert!(deinflect("駅から").is_empty());
}

#[test]
fn motion_verb_te_and_ta() {
    let top = &deinflect("行った")[0];
    assert_eq!((top.base_form.as_str(), top.class), ("行く", WordClass::GodanKu));
    assert!(top.irregular);

    let cands = deinflect("書いて");
    let c = find(&cands, "書く", WordClass::GodanKu).unwrap();
    assert_eq!(c.reason_chain, vec![Reason::Te]);
}

#[test]
fn multi_step_chains() {
    let cands = deinflect("書かせられた");
    assert!(cands.iter().any(|c| c.base_form == "書く"
        && c.reason_chain == vec![Reason::CausativePassive, Reason::Past]));

    let cands = deinflect("読まされる");
    assert!(cands.iter().any(|c| c.base_form == "読む"
        && c.reason_chain == vec![Reason::CausativePassive]));

    let cands = deinflect("読めませんでした");
    assert!(cands.iter().any(|c| c.base_form == "読む"
        && c.reason_chain == vec![Reason::Potential, Reason::PolitePastNegative]));
}

#[test]
fn adjectives() {
    let cands = deinflect("高くなかった");
    let c = find(&cands, "高い", WordClass::AdjectiveI).unwrap();
    assert_eq!(c.reason_chain, vec![Reason::Negative, Reason::Past]);

    let cands = deinflect("静かじゃない");
    let c = find(&cands, "静か", WordClass::AdjectiveNa).unwrap();
    assert_eq!(c.reason_chain, vec![Reason::Negative]);

    let cands = deinflect("よかった");
    assert_eq!(cands[0].base_form, "いい");
    assert!(cands[0].irregular);
}

#[test]
fn literal_overrides() {
    let top = &deinflect("なかった")[0];
    assert_eq!(top.base_form, "ある");
    assert_eq!(top.reason_chain, vec![Reason::Negative, Reason::Past]);

    let cands = deinflect("良さそう");
    assert!(cands.iter().any(|c| c.base_form == "良い" && c.reason_chain == vec![Reason::Appearance]));
}

#[test]
fn lexical_imperative_survives_particle_filter() {
    let top = &deinflect("死ね")[0];
    assert_eq!(top.base_form, "死ぬ");
    assert_eq!(top.reason_chain, vec![Reason::Imperative]);
}

#[test]
fn honorific_aux_verbs() {
    let cands = deinflect("いらっしゃいます");
    let c = find(&cands, "いらっしゃる", WordClass::AuxVerb).unwrap();
    assert_eq!(c.reason_chain, vec![Reason::Polite]);
}

#[test]
fn suru_compounds() {
    let cands = deinflect("勉強しました");
    let c = find(&cands, "勉強する", WordClass::Irregular).unwrap();
    assert_eq!(c.reason_chain, vec![Reason::PolitePast]);

    let cands = deinflect("勉強できない");
    assert!(cands.iter().any(|c| c.base_form == "勉強する"
        && c.reason_chain == vec![Reason::Potential, Reason::Negative]));
}

#[test]
fn nothing_matches() {
    assert!(deinflect("abc").is_empty());
    assert!(deinflect("").is_empty());
}

#[test]
fn ranking_prefers_short_chains() {
    let cands = deinflect("食べさせられなかった");
    for pair in cands.windows(2) {
        if pair[0].irregular == pair[1].irregular {
            assert!(pair[0].chain_len() <= pair[1].chain_len());
        }
    }
}

#[test]
fn kana_kuru_and_iku_compounds() {
    let cands = deinflect("やってきた");
    let c = find(&cands, "やってくる", WordClass::Irregular).expect("やってくる missing");
    assert_eq!(c.reason_chain, vec![Reason::Past]);
    assert!(c.irregular);

    let cands = deinflect("もってこない");
    assert!(find(&cands, "もってくる", WordClass::Irregular).is_some());

    let cands = deinflect("持っていった");
    let c = find(&cands, "持っていく", WordClass::GodanKu).expect("持っていく missing");
    assert_eq!(c.reason_chain, vec![Reason::Past]);
}

#[test]
fn ichidan_te_is_not_a_tsu_imperative() {
    let cands = deinflect("食べて");
    assert!(find(&cands, "食べる", WordClass::Ichidan).is_some());
    assert!(find(&cands, "食べつ", WordClass::GodanTsu).is_none());
}

#[test]
fn na_adjective_needs_a_plausible_stem() {
    let cands = deinflect("読んだ");
    assert!(find(&cands, "読む", WordClass::GodanMu).is_some());
    assert!(!cands.iter().any(|c| c.class == WordClass::AdjectiveNa));
}

#[test]
fn bare_dictionary_form_without_lookup() {
    // nothing says 食べる is a word, so only non-identity readings remain
    let cands = deinflect("食べる");
    assert!(!cands.is_empty());
    assert!(cands.iter().all(|c| !c.reason_chain.is_empty()));
    let c = find(&cands, "食ぶ", WordClass::GodanBu).expect("食ぶ missing");
    assert_eq!(c.reason_chain, vec![Reason::Potential]);
}
