//! Diacritic lookup table
//!
//! Maps diacritic-bearing letters to their plain equivalents. The mapping is
//! one-to-one and context-free: no combining sequences, no case folding.

use std::collections::HashMap;

/// Letters of the Latin-based Urmi alphabet that carry a cedilla
pub const URMI_DIACRITICS: [(char, char); 3] = [('ç', 'c'), ('ţ', 't'), ('ş', 's')];

/// Immutable diacritic-to-plain lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiacriticTable {
    map: HashMap<char, char>,
}

impl DiacriticTable {
    /// Table used by the compiler
    pub fn urmi() -> Self {
        Self::from_pairs(URMI_DIACRITICS)
    }

    /// Build a table from `(diacritic, plain)` pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// Plain equivalent of `ch`, if `ch` is in the table
    #[inline]
    pub fn plain(&self, ch: char) -> Option<char> {
        self.map.get(&ch).copied()
    }

    /// Whether `ch` is a diacritic letter
    #[inline]
    pub fn is_diacritic(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    /// Whether any character of `text` is a diacritic letter
    pub fn contains_diacritic(&self, text: &str) -> bool {
        text.chars().any(|ch| self.is_diacritic(ch))
    }

    /// Replace every diacritic letter in `text`, leaving other characters alone
    pub fn strip(&self, text: &str) -> String {
        text.chars().map(|ch| self.plain(ch).unwrap_or(ch)).collect()
    }

    /// Number of diacritic characters in `text`
    pub fn count(&self, text: &str) -> usize {
        text.chars().filter(|&ch| self.is_diacritic(ch)).count()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for DiacriticTable {
    fn default() -> Self {
        Self::urmi()
    }
}
