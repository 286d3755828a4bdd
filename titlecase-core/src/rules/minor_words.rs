//! Minor-word lookup table
//!
//! Minor words are the closed class of articles, coordinating conjunctions
//! and short prepositions that APA 7 lowercases unless they open the title
//! or a clause. Membership is the only signal: part of speech and word
//! length play no role.

use std::collections::{BTreeMap, HashSet};

/// Minor-word lookup table
#[derive(Debug, Clone)]
pub struct MinorWordTable {
    /// Lower-cased minor words for O(1) lookup
    words: HashSet<String>,
    /// Longest entry in chars, used to reject long words early
    max_chars: usize,
}

impl MinorWordTable {
    /// Create from categorized word lists
    pub fn from_categories(categories: &BTreeMap<String, Vec<String>>) -> Self {
        Self::from_words(categories.values().flatten().map(String::as_str))
    }

    /// Create from a flat list of words
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let words: HashSet<String> = words.into_iter().map(str::to_lowercase).collect();
        let max_chars = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

        Self { words, max_chars }
    }

    /// Check if a word belongs to the minor-word class (case-insensitive)
    pub fn is_minor_word(&self, word: &str) -> bool {
        if word.is_empty() || word.chars().count() > self.max_chars {
            return false;
        }

        self.words.contains(&word.to_lowercase())
    }

    /// All minor words, sorted
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Number of distinct minor words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
