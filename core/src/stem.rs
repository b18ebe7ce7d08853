//! Stem derivation.
//!
//! A stem is the base with its dictionary ending replaced by the ending for a
//! [`StemKind`]. Regular classes take that ending from a per-class table.
//! Lexemes with sound changes of their own are looked up in [`EXCEPTIONS`]
//! first, which lists every stem in full.
use crate::class::WordClass;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemKind {
    /// Base minus its dictionary ending.
    Root,
    Dictionary,
    /// 連用形, the masu stem.
    Continuative,
    /// 未然形, the negative stem.
    Irrealis,
    /// 仮定形, the e-row stem before ば.
    Hypothetical,
    Volitional,
    Te,
    Ta,
    Imperative,
}

impl StemKind {
    pub const ALL: [StemKind; 9] = [
        StemKind::Root,
        StemKind::Dictionary,
        StemKind::Continuative,
        StemKind::Irrealis,
        StemKind::Hypothetical,
        StemKind::Volitional,
        StemKind::Te,
        StemKind::Ta,
        StemKind::Imperative,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Endings of one godan row.
struct GodanRow {
    u: &'static str,
    i: &'static str,
    a: &'static str,
    e: &'static str,
    o: &'static str,
    te: &'static str,
    ta: &'static str,
}

impl GodanRow {
    const fn new(
        u: &'static str,
        i: &'static str,
        a: &'static str,
        e: &'static str,
        o: &'static str,
        te: &'static str,
        ta: &'static str,
    ) -> Self {
        Self { u, i, a, e, o, te, ta }
    }

    fn ending(&self, kind: StemKind) -> &'static str {
        match kind {
            StemKind::Root => "",
            StemKind::Dictionary => self.u,
            StemKind::Continuative => self.i,
            StemKind::Irrealis => self.a,
            StemKind::Hypothetical | StemKind::Imperative => self.e,
            StemKind::Volitional => self.o,
            StemKind::Te => self.te,
            StemKind::Ta => self.ta,
        }
    }
}

const U_ROW: GodanRow = GodanRow::new("う", "い", "わ", "え", "お", "って", "った");
const KU_ROW: GodanRow = GodanRow::new("く", "き", "か", "け", "こ", "いて", "いた");
const GU_ROW: GodanRow = GodanRow::new("ぐ", "ぎ", "が", "げ", "ご", "いで", "いだ");
const SU_ROW: GodanRow = GodanRow::new("す", "し", "さ", "せ", "そ", "して", "した");
const TSU_ROW: GodanRow = GodanRow::new("つ", "ち", "た", "て", "と", "って", "った");
const NU_ROW: GodanRow = GodanRow::new("ぬ", "に", "な", "ね", "の", "んで", "んだ");
const BU_ROW: GodanRow = GodanRow::new("ぶ", "び", "ば", "べ", "ぼ", "んで", "んだ");
const MU_ROW: GodanRow = GodanRow::new("む", "み", "ま", "め", "も", "んで", "んだ");
const RU_ROW: GodanRow = GodanRow::new("る", "り", "ら", "れ", "ろ", "って", "った");
const ARU_ROW: GodanRow = GodanRow::new("る", "い", "ら", "れ", "ろ", "って", "った");

/// Ending appended to the root of a regular member of `class`.
/// For the irregular class this is the する paradigm; 来る lives in
/// [`EXCEPTIONS`].
pub fn class_ending(class: WordClass, kind: StemKind) -> &'static str {
    use StemKind::*;
    match class {
        WordClass::Ichidan => match kind {
            Root | Continuative | Irrealis => "",
            Dictionary => "る",
            Hypothetical => "れ",
            Volitional => "よ",
            Te => "て",
            Ta => "た",
            Imperative => "ろ",
        },
        WordClass::GodanU => U_ROW.ending(kind),
        WordClass::GodanKu => KU_ROW.ending(kind),
        WordClass::GodanGu => GU_ROW.ending(kind),
        WordClass::GodanSu => SU_ROW.ending(kind),
        WordClass::GodanTsu => TSU_ROW.ending(kind),
        WordClass::GodanNu => NU_ROW.ending(kind),
        WordClass::GodanBu => BU_ROW.ending(kind),
        WordClass::GodanMu => MU_ROW.ending(kind),
        WordClass::GodanRu => RU_ROW.ending(kind),
        WordClass::AuxVerb => match kind {
            Imperative => "い",
            other => ARU_ROW.ending(other),
        },
        WordClass::Irregular => match kind {
            Root => "",
            Dictionary => "する",
            Continuative | Irrealis => "し",
            Hypothetical => "すれ",
            Volitional => "しよ",
            Te => "して",
            Ta => "した",
            Imperative => "しろ",
        },
        WordClass::AdjectiveI => match kind {
            Root => "",
            Dictionary => "い",
            Continuative | Irrealis => "く",
            Hypothetical => "けれ",
            Volitional => "かろ",
            Te => "くて",
            Ta => "かった",
            Imperative => "かれ",
        },
        WordClass::AdjectiveNa => match kind {
            Root | Dictionary => "",
            Continuative => "に",
            Irrealis => "では",
            Hypothetical => "なら",
            Volitional => "だろ",
            Te => "で",
            Ta => "だった",
            Imperative => "であれ",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeMatch {
    /// The word must equal the lexeme.
    Whole,
    /// The word may end in the lexeme (持って来る).
    Suffix,
}

/// A lexeme whose stems are listed in full rather than derived.
#[derive(Debug)]
pub struct Exception {
    pub lexeme: &'static str,
    pub class: WordClass,
    pub matching: LexemeMatch,
    /// Stems in [`StemKind::ALL`] order.
    stems: [&'static str; 9],
}

impl Exception {
    pub fn stem(&self, kind: StemKind) -> &'static str {
        self.stems[kind.index()]
    }

    pub fn stems(&self) -> impl Iterator<Item = (StemKind, &'static str)> + '_ {
        StemKind::ALL.into_iter().map(move |k| (k, self.stem(k)))
    }

    /// Text in front of the lexeme when `word` is this lexeme or (for
    /// suffix lexemes) a compound ending in it.
    pub fn prefix_of<'a>(&self, word: &'a str) -> Option<&'a str> {
        match self.matching {
            LexemeMatch::Whole => (word == self.lexeme).then_some(""),
            LexemeMatch::Suffix => word.strip_suffix(self.lexeme),
        }
    }
}

const fn exception(
    lexeme: &'static str,
    class: WordClass,
    matching: LexemeMatch,
    stems: [&'static str; 9],
) -> Exception {
    Exception { lexeme, class, matching, stems }
}

use LexemeMatch::{Suffix, Whole};
use WordClass::{AdjectiveI, GodanKu, GodanNu, GodanU, Irregular};

/// Root, dictionary, continuative, irrealis, hypothetical, volitional, te,
/// ta, imperative.
pub static EXCEPTIONS: &[Exception] = &[
    exception("来る", Irregular, Suffix, ["来", "来る", "来", "来", "来れ", "来よ", "来て", "来た", "来い"]),
    exception("來る", Irregular, Suffix, ["來", "來る", "來", "來", "來れ", "來よ", "來て", "來た", "來い"]),
    exception("くる", Irregular, Whole, ["く", "くる", "き", "こ", "くれ", "こよ", "きて", "きた", "こい"]),
    exception("てくる", Irregular, Suffix, ["てく", "てくる", "てき", "てこ", "てくれ", "てこよ", "てきて", "てきた", "てこい"]),
    exception("行く", GodanKu, Suffix, ["行", "行く", "行き", "行か", "行け", "行こ", "行って", "行った", "行け"]),
    exception("逝く", GodanKu, Suffix, ["逝", "逝く", "逝き", "逝か", "逝け", "逝こ", "逝って", "逝った", "逝け"]),
    exception("往く", GodanKu, Suffix, ["往", "往く", "往き", "往か", "往け", "往こ", "往って", "往った", "往け"]),
    exception("いく", GodanKu, Whole, ["い", "いく", "いき", "いか", "いけ", "いこ", "いって", "いった", "いけ"]),
    exception("ゆく", GodanKu, Whole, ["ゆ", "ゆく", "ゆき", "ゆか", "ゆけ", "ゆこ", "ゆって", "ゆった", "ゆけ"]),
    exception("ていく", GodanKu, Suffix, ["てい", "ていく", "ていき", "ていか", "ていけ", "ていこ", "ていって", "ていった", "ていけ"]),
    exception("てゆく", GodanKu, Suffix, ["てゆ", "てゆく", "てゆき", "てゆか", "てゆけ", "てゆこ", "てゆって", "てゆった", "てゆけ"]),
    exception("問う", GodanU, Suffix, ["問", "問う", "問い", "問わ", "問え", "問お", "問うて", "問うた", "問え"]),
    exception("請う", GodanU, Suffix, ["請", "請う", "請い", "請わ", "請え", "請お", "請うて", "請うた", "請え"]),
    exception("乞う", GodanU, Suffix, ["乞", "乞う", "乞い", "乞わ", "乞え", "乞お", "乞うて", "乞うた", "乞え"]),
    exception("いい", AdjectiveI, Whole, ["よ", "いい", "よく", "よく", "よけれ", "よかろ", "よくて", "よかった", "よかれ"]),
    exception("かっこいい", AdjectiveI, Whole, ["かっこよ", "かっこいい", "かっこよく", "かっこよく", "かっこよけれ", "かっこよかろ", "かっこよくて", "かっこよかった", "かっこよかれ"]),
    exception("格好いい", AdjectiveI, Whole, ["格好よ", "格好いい", "格好よく", "格好よく", "格好よけれ", "格好よかろ", "格好よくて", "格好よかった", "格好よかれ"]),
    exception("気持ちいい", AdjectiveI, Whole, ["気持ちよ", "気持ちいい", "気持ちよく", "気持ちよく", "気持ちよけれ", "気持ちよかろ", "気持ちよくて", "気持ちよかった", "気持ちよかれ"]),
    exception("死ぬ", GodanNu, Suffix, ["死", "死ぬ", "死に", "死な", "死ね", "死の", "死んで", "死んだ", "死ね"]),
    exception("しぬ", GodanNu, Whole, ["し", "しぬ", "しに", "しな", "しね", "しの", "しんで", "しんだ", "しね"]),
];

/// Exception entry covering `word` under `class`, with the text in front of
/// the lexeme.
pub fn find_exception(word: &str, class: WordClass) -> Option<(&'static Exception, &str)> {
    EXCEPTIONS
        .iter()
        .filter(|e| e.class == class)
        .find_map(|e| e.prefix_of(word).map(|prefix| (e, prefix)))
}

/// Base with its dictionary ending removed. A base lacking the ending is
/// returned unchanged.
pub fn root(base: &str, class: WordClass) -> &str {
    base.strip_suffix(class_ending(class, StemKind::Dictionary))
        .unwrap_or(base)
}

/// Stem of `base` for `kind`.
pub fn stem_for(base: &str, class: WordClass, kind: StemKind) -> String {
    if let Some((exc, prefix)) = find_exception(base, class) {
        return format!("{}{}", prefix, exc.stem(kind));
    }
    format!("{}{}", root(base, class), class_ending(class, kind))
}

/// Plain stem: the base minus its dictionary ending.
pub fn stem(base: &str, class: WordClass) -> String {
    stem_for(base, class, StemKind::Root)
}

pub fn continuative_stem(base: &str, class: WordClass) -> String {
    stem_for(base, class, StemKind::Continuative)
}

pub fn irrealis_stem(base: &str, class: WordClass) -> String {
    stem_for(base, class, StemKind::Irrealis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ichidan_stems() {
        assert_eq!(stem("食べる", WordClass::Ichidan), "食べ");
        assert_eq!(continuative_stem("食べる", WordClass::Ichidan), "食べ");
        assert_eq!(stem_for("食べる", WordClass::Ichidan, StemKind::Te), "食べて");
        assert_eq!(stem_for("食べる", WordClass::Ichidan, StemKind::Imperative), "食べろ");
    }

    #[test]
    fn godan_rows() {
        assert_eq!(irrealis_stem("書く", WordClass::GodanKu), "書か");
        assert_eq!(stem_for("書く", WordClass::GodanKu, StemKind::Te), "書いて");
        assert_eq!(irrealis_stem("買う", WordClass::GodanU), "買わ");
        assert_eq!(stem_for("泳ぐ", WordClass::GodanGu, StemKind::Ta), "泳いだ");
        assert_eq!(stem_for("読む", WordClass::GodanMu, StemKind::Te), "読んで");
        assert_eq!(continuative_stem("話す", WordClass::GodanSu), "話し");
        assert_eq!(stem_for("待つ", WordClass::GodanTsu, StemKind::Ta), "待った");
    }

    #[test]
    fn aux_verbs_use_i_stem() {
        assert_eq!(continuative_stem("いらっしゃる", WordClass::AuxVerb), "いらっしゃい");
        assert_eq!(stem_for("下さる", WordClass::AuxVerb, StemKind::Imperative), "下さい");
        assert_eq!(irrealis_stem("なさる", WordClass::AuxVerb), "なさら");
    }

    #[test]
    fn suru_and_kuru() {
        assert_eq!(continuative_stem("勉強する", WordClass::Irregular), "勉強し");
        assert_eq!(stem("する", WordClass::Irregular), "");
        assert_eq!(irrealis_stem("くる", WordClass::Irregular), "こ");
        assert_eq!(continuative_stem("くる", WordClass::Irregular), "き");
        assert_eq!(irrealis_stem("来る", WordClass::Irregular), "来");
        assert_eq!(stem_for("持って来る", WordClass::Irregular, StemKind::Imperative), "持って来い");
        assert_eq!(irrealis_stem("もってくる", WordClass::Irregular), "もってこ");
        assert_eq!(continuative_stem("やってくる", WordClass::Irregular), "やってき");
    }

    #[test]
    fn lexical_exceptions() {
        assert_eq!(stem_for("行く", WordClass::GodanKu, StemKind::Te), "行って");
        assert_eq!(stem_for("いく", WordClass::GodanKu, StemKind::Ta), "いった");
        assert_eq!(stem_for("持っていく", WordClass::GodanKu, StemKind::Te), "持っていって");
        assert_eq!(stem_for("歩いてゆく", WordClass::GodanKu, StemKind::Ta), "歩いてゆった");
        assert_eq!(stem_for("問う", WordClass::GodanU, StemKind::Ta), "問うた");
        assert_eq!(stem_for("いい", WordClass::AdjectiveI, StemKind::Ta), "よかった");
        assert_eq!(stem_for("かっこいい", WordClass::AdjectiveI, StemKind::Te), "かっこよくて");
        assert_eq!(stem_for("気持ちいい", WordClass::AdjectiveI, StemKind::Ta), "気持ちよかった");
        // かわいい is an ordinary い-adjective
        assert_eq!(stem_for("かわいい", WordClass::AdjectiveI, StemKind::Te), "かわいくて");
    }

    #[test]
    fn adjectives() {
        assert_eq!(stem_for("高い", WordClass::AdjectiveI, StemKind::Ta), "高かった");
        assert_eq!(stem("静か", WordClass::AdjectiveNa), "静か");
        assert_eq!(stem_for("静か", WordClass::AdjectiveNa, StemKind::Ta), "静かだった");
    }

    #[test]
    fn base_without_ending_is_its_own_root() {
        assert_eq!(root("食べ", WordClass::GodanKu), "食べ");
    }
}
