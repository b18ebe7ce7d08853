use libconjugate::{generate, ConjugationGroup, ConjugationItem, GroupKind, WordClass};

fn find<'a>(groups: &'a [ConjugationGroup], title: &str, label: &str) -> &'a ConjugationItem {
    groups
        .iter()
        .find(|g| g.title == title)
        .and_then(|g| g.item(label))
        .unwrap_or_else(|| panic!("missing {} / {}", title, label))
}

fn surface(groups: &[ConjugationGroup], title: &str, label: &str) -> String {
    find(groups, title, label).surface.clone()
}

#[test]
fn ichidan_table() {
    let groups = generate("食べる", WordClass::Ichidan, "たべる", "to eat");
    assert_eq!(groups.len(), 13);

    let past = find(&groups, "Basic Forms", "Past");
    assert_eq!(past.surface, "食べた");
    assert_eq!(past.reading.as_deref(), Some("たべた"));
    assert_eq!(past.gloss, "eat (past)");

    let plain = find(&groups, "Basic Forms", "Non-past");
    assert_eq!(plain.surface, "食べる");
    assert_eq!(plain.gloss, "to eat");
    assert!(plain.reasons.is_empty());

    assert_eq!(surface(&groups, "Basic Forms", "Past negative"), "食べなかった");
    assert_eq!(surface(&groups, "Polite Forms", "Polite past negative"), "食べませんでした");
    assert_eq!(surface(&groups, "Te-form & Continuous", "Te-form"), "食べて");
    assert_eq!(surface(&groups, "Te-form & Continuous", "Continuous negative"), "食べていない");
    assert_eq!(surface(&groups, "Volitional", "Volitional"), "食べよう");
    assert_eq!(surface(&groups, "Conditional", "Provisional"), "食べれば");
    assert_eq!(surface(&groups, "Potential", "Potential"), "食べられる");
    assert_eq!(surface(&groups, "Causative-passive", "Causative-passive"), "食べさせられる");
    assert_eq!(surface(&groups, "Imperative", "Imperative"), "食べろ");
    assert_eq!(surface(&groups, "Imperative", "Negative imperative"), "食べるな");
    assert_eq!(surface(&groups, "Desire", "Desire past"), "食べたかった");
    assert_eq!(surface(&groups, "Advanced", "Completion past"), "食べてしまった");
    assert_eq!(surface(&groups, "Hearsay & Presumptive", "Presumptive"), "食べるだろう");
}

#[test]
fn godan_rows_and_shapes() {
    let kaku = generate("書く", WordClass::GodanKu, "", "to write");
    assert_eq!(surface(&kaku, "Te-form & Continuous", "Te-form"), "書いて");
    assert_eq!(surface(&kaku, "Potential", "Potential"), "書ける");
    assert_eq!(surface(&kaku, "Causative-passive", "Causative-passive"), "書かされる");
    assert_eq!(find(&kaku, "Basic Forms", "Past").reading, None);

    let hanasu = generate("話す", WordClass::GodanSu, "はなす", "to speak");
    assert_eq!(surface(&hanasu, "Causative-passive", "Causative-passive"), "話させられる");
    assert_eq!(surface(&hanasu, "Basic Forms", "Past"), "話した");

    let yomu = generate("読む", WordClass::GodanMu, "よむ", "to read");
    assert_eq!(surface(&yomu, "Basic Forms", "Past"), "読んだ");
    assert_eq!(surface(&yomu, "Potential", "Potential polite"), "読めます");

    let iku = generate("行く", WordClass::GodanKu, "いく", "to go");
    let past = find(&iku, "Basic Forms", "Past");
    assert_eq!(past.surface, "行った");
    assert_eq!(past.reading.as_deref(), Some("いった"));
}

#[test]
fn kuru_follows_its_own_stems() {
    let kana = generate("くる", WordClass::Irregular, "", "to come");
    assert_eq!(surface(&kana, "Basic Forms", "Negative"), "こない");
    assert_eq!(surface(&kana, "Polite Forms", "Polite"), "きます");
    assert_eq!(surface(&kana, "Te-form & Continuous", "Te-form"), "きて");
    assert_eq!(surface(&kana, "Volitional", "Volitional"), "こよう");
    assert_eq!(surface(&kana, "Imperative", "Imperative"), "こい");
    assert_eq!(surface(&kana, "Potential", "Potential"), "こられる");

    let kanji = generate("来る", WordClass::Irregular, "くる", "to come");
    let neg = find(&kanji, "Basic Forms", "Negative");
    assert_eq!(neg.surface, "来ない");
    assert_eq!(neg.reading.as_deref(), Some("こない"));
    assert_eq!(surface(&kanji, "Imperative", "Imperative"), "来い");
}

#[test]
fn kuru_compounds_in_kanji_and_kana() {
    let kanji = generate("持って来る", WordClass::Irregular, "もってくる", "to bring");
    let neg = find(&kanji, "Basic Forms", "Negative");
    assert_eq!(neg.surface, "持って来ない");
    assert_eq!(neg.reading.as_deref(), Some("もってこない"));
    assert_eq!(
        find(&kanji, "Polite Forms", "Polite").reading.as_deref(),
        Some("もってきます")
    );

    let kana = generate("やってくる", WordClass::Irregular, "", "to come along");
    assert_eq!(surface(&kana, "Basic Forms", "Negative"), "やってこない");
    assert_eq!(surface(&kana, "Basic Forms", "Past"), "やってきた");
    assert_eq!(surface(&kana, "Imperative", "Imperative"), "やってこい");
    assert_eq!(surface(&kana, "Potential", "Potential"), "やってこられる");
}

#[test]
fn iku_compounds_use_geminate_te() {
    let groups = generate("持っていく", WordClass::GodanKu, "もっていく", "to take");
    let te = find(&groups, "Te-form & Continuous", "Te-form");
    assert_eq!(te.surface, "持っていって");
    assert_eq!(te.reading.as_deref(), Some("もっていって"));
    assert_eq!(surface(&groups, "Basic Forms", "Past"), "持っていった");
    assert_eq!(surface(&groups, "Basic Forms", "Negative"), "持っていかない");

    let yuku = generate("歩いてゆく", WordClass::GodanKu, "", "");
    assert_eq!(surface(&yuku, "Te-form & Continuous", "Te-form"), "歩いてゆって");
}

#[test]
fn suru_compounds() {
    let groups = generate("勉強する", WordClass::Irregular, "べんきょうする", "to study");
    assert_eq!(surface(&groups, "Potential", "Potential"), "勉強できる");
    assert_eq!(surface(&groups, "Passive", "Passive"), "勉強される");
    assert_eq!(surface(&groups, "Causative", "Causative"), "勉強させる");
    assert_eq!(surface(&groups, "Imperative", "Imperative"), "勉強しろ");
    assert_eq!(surface(&groups, "Advanced", "Classical negative"), "勉強せず");
    assert_eq!(
        find(&groups, "Polite Forms", "Polite").reading.as_deref(),
        Some("べんきょうします")
    );
}

#[test]
fn honorific_verbs_lack_voice_groups() {
    let groups = generate("なさる", WordClass::AuxVerb, "", "to do");
    let kinds: Vec<GroupKind> = groups.iter().map(|g| g.kind).collect();
    assert!(!kinds.contains(&GroupKind::Potential));
    assert!(!kinds.contains(&GroupKind::Passive));
    assert!(!kinds.contains(&GroupKind::Causative));
    assert!(!kinds.contains(&GroupKind::CausativePassive));
    assert_eq!(surface(&groups, "Polite Forms", "Polite"), "なさいます");
    assert_eq!(surface(&groups, "Imperative", "Imperative"), "なさい");
    assert_eq!(surface(&groups, "Basic Forms", "Negative"), "なさらない");
}

#[test]
fn i_adjective_table() {
    let groups = generate("高い", WordClass::AdjectiveI, "たかい", "high; tall");
    assert_eq!(groups.len(), 7);
    assert_eq!(surface(&groups, "Basic Forms", "Negative"), "高くない");
    assert_eq!(surface(&groups, "Basic Forms", "Past"), "高かった");
    assert_eq!(surface(&groups, "Basic Forms", "Past negative"), "高くなかった");
    assert_eq!(surface(&groups, "Polite Forms", "Polite"), "高いです");
    assert_eq!(surface(&groups, "Polite Forms", "Polite negative"), "高くありません");
    assert_eq!(surface(&groups, "Te-form & Continuous", "Te-form"), "高くて");
    assert_eq!(surface(&groups, "Volitional", "Literary presumptive"), "高かろう");
    assert_eq!(surface(&groups, "Conditional", "Provisional"), "高ければ");
    assert_eq!(surface(&groups, "Advanced", "Become"), "高くなる");
    assert_eq!(surface(&groups, "Advanced", "Excessive"), "高すぎる");

    let neg = find(&groups, "Basic Forms", "Negative");
    assert_eq!(neg.reading.as_deref(), Some("たかくない"));
    assert_eq!(neg.gloss, "not high");
}

#[test]
fn ii_uses_yo_stems() {
    let groups = generate("いい", WordClass::AdjectiveI, "", "good");
    assert_eq!(surface(&groups, "Basic Forms", "Past"), "よかった");
    assert_eq!(surface(&groups, "Basic Forms", "Negative"), "よくない");
    assert_eq!(surface(&groups, "Advanced", "Appearance"), "よさそう");

    let cool = generate("かっこいい", WordClass::AdjectiveI, "", "cool");
    assert_eq!(surface(&cool, "Te-form & Continuous", "Te-form"), "かっこよくて");
    assert_eq!(surface(&cool, "Basic Forms", "Past"), "かっこよかった");
    assert_eq!(surface(&cool, "Advanced", "Appearance"), "かっこよさそう");

    let cute = generate("かわいい", WordClass::AdjectiveI, "", "cute");
    assert_eq!(surface(&cute, "Te-form & Continuous", "Te-form"), "かわいくて");
}

#[test]
fn na_adjective_table() {
    let groups = generate("静か", WordClass::AdjectiveNa, "しずか", "quiet");
    let kinds: Vec<GroupKind> = groups.iter().map(|g| g.kind).collect();
    assert_eq!(
        kinds,
        vec![
            GroupKind::Basic,
            GroupKind::Polite,
            GroupKind::Conditional,
            GroupKind::Advanced,
            GroupKind::HearsayPresumptive,
        ]
    );
    assert_eq!(surface(&groups, "Basic Forms", "Non-past"), "静かだ");
    assert_eq!(surface(&groups, "Basic Forms", "Negative"), "静かではない");
    assert_eq!(surface(&groups, "Basic Forms", "Past"), "静かだった");
    assert_eq!(surface(&groups, "Basic Forms", "Past negative"), "静かではなかった");
    assert_eq!(surface(&groups, "Polite Forms", "Polite past"), "静かでした");
    assert_eq!(surface(&groups, "Conditional", "Provisional"), "静かなら");
    assert_eq!(surface(&groups, "Advanced", "Become"), "静かになる");
    assert_eq!(surface(&groups, "Hearsay & Presumptive", "Presumptive"), "静かだろう");
    assert_eq!(find(&groups, "Basic Forms", "Past").reading.as_deref(), Some("しずかだった"));
}

#[test]
fn table_serializes_to_json() {
    let groups = generate("見る", WordClass::Ichidan, "みる", "to see");
    let json = serde_json::to_value(&groups).unwrap();
    assert_eq!(json[0]["kind"], "basic");
    assert_eq!(json[0]["title"], "Basic Forms");
    assert_eq!(json[0]["items"][2]["surface"], "見た");
    assert_eq!(json[0]["items"][2]["reasons"][0], "past");
}
