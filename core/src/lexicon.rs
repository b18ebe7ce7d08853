//! Lexicon collaborators.
//!
//! Deinflection can consult a dictionary to settle class ambiguity, to rank
//! common words first and to validate truncated inputs. This module defines
//! those seams as traits and provides `Lexicon`, a simple serializable
//! in-memory implementation of both.
//!
//! Public API:
//! - `ClassLookup` - lexeme -> class and commonness
//! - `MorphologicalValidator` - stem validation and greedy segmentation
//! - `LexEntry` - one dictionary entry
//! - `Lexicon` - lookup/insert API, JSON (de)serialization helpers

use crate::class::WordClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Dictionary class lookup.
pub trait ClassLookup {
    /// Class of `lexeme`, if the dictionary knows it.
    fn class_of(&self, lexeme: &str) -> Option<WordClass>;

    /// Relative frequency of `lexeme`; higher is more common.
    fn commonness(&self, _lexeme: &str) -> u32 {
        0
    }
}

/// Dictionary-backed validation of proposed bases.
pub trait MorphologicalValidator {
    fn is_valid_stem(&self, base: &str) -> bool;

    /// Split `text` into known words and unknown runs.
    fn analyze(&self, text: &str) -> Vec<Segment>;
}

/// One piece of an analysed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub surface: String,
    /// Dictionary form when the segment is a known word.
    pub base: Option<String>,
    pub class: Option<WordClass>,
}

/// A single lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexEntry {
    pub lexeme: String,
    pub class: WordClass,
    /// Simple frequency / weight. Higher means more frequent.
    #[serde(default)]
    pub commonness: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

impl LexEntry {
    pub fn new<T: Into<String>>(lexeme: T, class: WordClass, commonness: u32) -> Self {
        Self {
            lexeme: lexeme.into(),
            class,
            commonness,
            reading: None,
            gloss: None,
        }
    }

    pub fn with_reading<T: Into<String>>(mut self, reading: T) -> Self {
        self.reading = Some(reading.into());
        self
    }

    pub fn with_gloss<T: Into<String>>(mut self, gloss: T) -> Self {
        self.gloss = Some(gloss.into());
        self
    }
}

/// In-memory lexicon mapping a lexeme -> Vec<LexEntry>. Homographs of
/// different classes (切る v1 / v5r) share a bucket.
///
/// Serialized as a flat JSON array of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<LexEntry>", into = "Vec<LexEntry>")]
pub struct Lexicon {
    map: HashMap<String, Vec<LexEntry>>,
    /// Longest lexeme in chars, bounds the segmentation window.
    max_len: usize,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a lexeme with its class.
    ///
    /// If the same lexeme/class pair already exists its commonness is raised
    /// to `commonness`, otherwise a new entry is pushed.
    pub fn insert<T: Into<String>>(&mut self, lexeme: T, class: WordClass, commonness: u32) {
        self.push_entry(LexEntry::new(lexeme, class, commonness));
    }

    /// Push a full entry (useful for bulk-loading).
    pub fn push_entry(&mut self, entry: LexEntry) {
        self.max_len = self.max_len.max(entry.lexeme.chars().count());
        let bucket = self.map.entry(entry.lexeme.clone()).or_default();
        if let Some(e) = bucket.iter_mut().find(|e| e.class == entry.class) {
            e.commonness = e.commonness.max(entry.commonness);
            if entry.reading.is_some() {
                e.reading = entry.reading;
            }
            if entry.gloss.is_some() {
                e.gloss = entry.gloss;
            }
        } else {
            bucket.push(entry);
        }
    }

    /// Entries for `lexeme`, most common first.
    pub fn lookup_entries(&self, lexeme: &str) -> Vec<LexEntry> {
        let mut entries = self.map.get(lexeme).cloned().unwrap_or_default();
        entries.sort_by(|a, b| b.commonness.cmp(&a.commonness));
        entries
    }

    /// Every class `lexeme` is listed under.
    pub fn classes_of(&self, lexeme: &str) -> Vec<WordClass> {
        self.lookup_entries(lexeme).into_iter().map(|e| e.class).collect()
    }

    pub fn contains(&self, lexeme: &str) -> bool {
        self.map.contains_key(lexeme)
    }

    /// Remove every entry for `lexeme`. Returns true if removed.
    pub fn remove(&mut self, lexeme: &str) -> bool {
        self.map.remove(lexeme).is_some()
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &LexEntry> {
        self.map.values().flatten()
    }

    /// Small built-in lexicon for smoke-testing.
    pub fn load_demo() -> Self {
        let mut lx = Self::new();
        let demo = [
            LexEntry::new("食べる", WordClass::Ichidan, 90).with_reading("たべる").with_gloss("to eat"),
            LexEntry::new("見る", WordClass::Ichidan, 95).with_reading("みる").with_gloss("to see"),
            LexEntry::new("書く", WordClass::GodanKu, 80).with_reading("かく").with_gloss("to write"),
            LexEntry::new("読む", WordClass::GodanMu, 80).with_reading("よむ").with_gloss("to read"),
            LexEntry::new("話す", WordClass::GodanSu, 70).with_reading("はなす").with_gloss("to speak"),
            LexEntry::new("行く", WordClass::GodanKu, 95).with_reading("いく").with_gloss("to go"),
            LexEntry::new("来る", WordClass::Irregular, 95).with_reading("くる").with_gloss("to come"),
            LexEntry::new("する", WordClass::Irregular, 100).with_gloss("to do"),
            LexEntry::new("高い", WordClass::AdjectiveI, 60).with_reading("たかい").with_gloss("high; expensive"),
            LexEntry::new("静か", WordClass::AdjectiveNa, 40).with_reading("しずか").with_gloss("quiet"),
        ];
        for entry in demo {
            lx.push_entry(entry);
        }
        lx
    }

    /// Save the lexicon to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load a lexicon from a JSON array of entries.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let lexicon: Self = serde_json::from_reader(reader)?;
        Ok(lexicon)
    }

    /// Return the number of distinct lexemes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Return true if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl From<Vec<LexEntry>> for Lexicon {
    fn from(entries: Vec<LexEntry>) -> Self {
        let mut lx = Lexicon::new();
        for entry in entries {
            lx.push_entry(entry);
        }
        lx
    }
}

impl From<Lexicon> for Vec<LexEntry> {
    fn from(lx: Lexicon) -> Self {
        let mut entries: Vec<LexEntry> = lx.map.into_values().flatten().collect();
        entries.sort_by(|a, b| a.lexeme.cmp(&b.lexeme));
        entries
    }
}

impl ClassLookup for Lexicon {
    fn class_of(&self, lexeme: &str) -> Option<WordClass> {
        self.lookup_entries(lexeme).first().map(|e| e.class)
    }

    fn commonness(&self, lexeme: &str) -> u32 {
        self.map
            .get(lexeme)
            .and_then(|b| b.iter().map(|e| e.commonness).max())
            .unwrap_or(0)
    }
}

impl MorphologicalValidator for Lexicon {
    fn is_valid_stem(&self, base: &str) -> bool {
        self.contains(base)
    }

    /// Greedy longest match from the left. Unknown characters are gathered
    /// into runs with no base.
    fn analyze(&self, text: &str) -> Vec<Segment> {
        let chars: Vec<char> = text.chars().collect();
        let mut segments = Vec::new();
        let mut unknown = String::new();
        let mut i = 0;
        while i < chars.len() {
            let longest = (1..=self.max_len.min(chars.len() - i)).rev().find_map(|len| {
                let word: String = chars[i..i + len].iter().collect();
                self.class_of(&word).map(|class| (word, class, len))
            });
            match longest {
                Some((word, class, len)) => {
                    if !unknown.is_empty() {
                        segments.push(Segment {
                            surface: std::mem::take(&mut unknown),
                            base: None,
                            class: None,
                        });
                    }
                    segments.push(Segment {
                        surface: word.clone(),
                        base: Some(word),
                        class: Some(class),
                    });
                    i += len;
                }
                None => {
                    unknown.push(chars[i]);
                    i += 1;
                }
            }
        }
        if !unknown.is_empty() {
            segments.push(Segment {
                surface: unknown,
                base: None,
                class: None,
            });
        }
        segments
    }
}
