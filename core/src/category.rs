//! Morphological categories used to chain deinflection rules.
//!
//! A `Category` is a small bitset. Dictionary bits name the classes a word
//! may belong to; `INITIAL` marks an unanalysed surface string. A rule's
//! source category describes what the inflected word behaves like, and its
//! target category the classes the stripped word may legally take.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(u8);

impl Category {
    pub const NONE: Category = Category(0);
    pub const ICHIDAN: Category = Category(1 << 0);
    pub const GODAN: Category = Category(1 << 1);
    pub const KURU: Category = Category(1 << 2);
    pub const SURU: Category = Category(1 << 3);
    pub const ADJ_I: Category = Category(1 << 4);
    pub const ADJ_NA: Category = Category(1 << 5);
    /// Only the raw input carries this bit.
    pub const INITIAL: Category = Category(1 << 6);

    /// Every class a dictionary form can belong to.
    pub const DICTIONARY: Category = Category(0b0011_1111);
    /// State of an input nothing has been stripped from yet.
    pub const ALL: Category = Category(0b0111_1111);

    const NAMES: [(Category, &'static str); 7] = [
        (Category::ICHIDAN, "ichidan"),
        (Category::GODAN, "godan"),
        (Category::KURU, "kuru"),
        (Category::SURU, "suru"),
        (Category::ADJ_I, "adj-i"),
        (Category::ADJ_NA, "adj-na"),
        (Category::INITIAL, "initial"),
    ];

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn union(self, other: Category) -> Category {
        Category(self.0 | other.0)
    }

    pub const fn intersection(self, other: Category) -> Category {
        Category(self.0 & other.0)
    }

    pub const fn intersects(self, other: Category) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn contains(self, other: Category) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit set names a dictionary class.
    pub const fn is_dictionary(self) -> bool {
        !self.is_empty() && Category::DICTIONARY.contains(self)
    }

    /// Iterate over the single-bit categories contained in `self`.
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Self::NAMES
            .into_iter()
            .map(|(c, _)| c)
            .filter(move |c| self.contains(*c))
    }

    /// Name of a single-bit category, `None` for unions.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMES.iter().find(|(c, _)| *c == self).map(|(_, n)| *n)
    }
}

impl BitOr for Category {
    type Output = Category;

    fn bitor(self, rhs: Category) -> Category {
        self.union(rhs)
    }
}

impl BitOrAssign for Category {
    fn bitor_assign(&mut self, rhs: Category) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Category {
    type Output = Category;

    fn bitand(self, rhs: Category) -> Category {
        self.intersection(rhs)
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Category(none)");
        }
        let names: Vec<&str> = self.iter().filter_map(|c| c.name()).collect();
        write!(f, "Category({})", names.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_bit() {
        for (c, _) in Category::NAMES {
            assert!(Category::ALL.contains(c));
        }
        assert!(!Category::DICTIONARY.contains(Category::INITIAL));
    }

    #[test]
    fn union_and_iter() {
        let c = Category::ICHIDAN | Category::GODAN;
        assert!(c.intersects(Category::GODAN));
        assert!(!c.intersects(Category::ADJ_I));
        assert_eq!(c.iter().count(), 2);
        assert!(c.is_dictionary());
        assert!(!(c | Category::INITIAL).is_dictionary());
    }

    #[test]
    fn debug_lists_names() {
        let c = Category::ADJ_I | Category::SURU;
        assert_eq!(format!("{:?}", c), "Category(suru|adj-i)");
    }
}
