//! Irregular-lexeme pre-check.
//!
//! The rule table holds lexical rules for every exception lexeme and literal
//! override. They are only tried when the surface shows one of the stem
//! spellings of that lexeme (来/こ/き, 行っ/いっ, 死ね, な for ない...), so
//! their derivations can be trusted as irregular matches.
use ahash::AHashSet;
use libkatsuyou_core::inflection::OVERRIDES;
use libkatsuyou_core::stem::{LexemeMatch, EXCEPTIONS};
use tracing::trace;

#[derive(Debug, Clone)]
struct Pattern {
    spelling: String,
    lexeme: &'static str,
    matching: LexemeMatch,
}

impl Pattern {
    fn matches(&self, surface: &str) -> bool {
        match self.matching {
            // kana lexemes are whole words: the stem starts the surface
            LexemeMatch::Whole => surface.starts_with(self.spelling.as_str()),
            LexemeMatch::Suffix => surface.contains(self.spelling.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IrregularMatcher {
    patterns: Vec<Pattern>,
}

impl IrregularMatcher {
    pub fn standard() -> Self {
        let mut seen = AHashSet::new();
        let mut patterns = Vec::new();
        for exc in EXCEPTIONS {
            for (_, stem) in exc.stems() {
                if !stem.is_empty() && seen.insert((stem, exc.lexeme)) {
                    patterns.push(Pattern {
                        spelling: stem.to_string(),
                        lexeme: exc.lexeme,
                        matching: exc.matching,
                    });
                }
            }
        }
        for ov in OVERRIDES {
            // the override surface minus its last kana still prefixes every
            // further inflection of it (ない -> なかった)
            let mut chars = ov.surface.chars();
            chars.next_back();
            let spelling = chars.as_str();
            if !spelling.is_empty() && seen.insert((spelling, ov.lexeme)) {
                patterns.push(Pattern {
                    spelling: spelling.to_string(),
                    lexeme: ov.lexeme,
                    matching: ov.matching,
                });
            }
        }
        Self { patterns }
    }

    /// Lexemes whose irregular spellings occur in `surface`.
    pub fn matches(&self, surface: &str) -> AHashSet<&'static str> {
        let found: AHashSet<&'static str> = self
            .patterns
            .iter()
            .filter(|p| p.matches(surface))
            .map(|p| p.lexeme)
            .collect();
        if !found.is_empty() {
            trace!("irregular spellings in {:?}: {:?}", surface, found);
        }
        found
    }
}

impl Default for IrregularMatcher {
    fn default() -> Self {
        Self::standard()
    }
}
