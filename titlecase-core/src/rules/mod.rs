//! APA 7 style rules
//!
//! Rule data (minor words, clause boundary marks, punctuation spacing sets)
//! is described in TOML and turned into lookup tables once at construction.

pub mod config;
pub(crate) mod loader;
mod minor_words;

use std::collections::HashSet;
use std::path::Path;

pub use config::{StyleConfig, APA7_CODE};
pub use loader::{builtin_rules, load_rules_file, parse_rules, EMBEDDED_APA7};
pub use minor_words::MinorWordTable;

use crate::error::{Error, Result};
use crate::spacing::PunctuationCheck;

/// Runtime style rules built from a [`StyleConfig`]
#[derive(Debug, Clone)]
pub struct StyleRules {
    code: String,
    name: String,
    minor_words: MinorWordTable,
    clause_boundaries: HashSet<String>,
    apostrophes: Vec<char>,
    punctuation: PunctuationCheck,
}

impl StyleRules {
    /// Build rules from a validated configuration
    pub fn from_config(config: &StyleConfig) -> Result<Self> {
        config.validate().map_err(Error::InvalidRules)?;

        let punctuation = PunctuationCheck::new(
            &config.punctuation.space_before,
            &config.punctuation.space_after,
            &config.punctuation.spaced_separators,
        )?;

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            minor_words: MinorWordTable::from_categories(&config.minor_words.categories),
            clause_boundaries: config.punctuation.clause_boundaries.iter().cloned().collect(),
            apostrophes: config.punctuation.apostrophes.clone(),
            punctuation,
        })
    }

    /// Load rules from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_rules_file(path.as_ref())
    }

    /// Style code (always `apa7`)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable style name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn minor_words(&self) -> &MinorWordTable {
        &self.minor_words
    }

    /// Check if a word is a minor word
    #[inline]
    pub fn is_minor_word(&self, word: &str) -> bool {
        self.minor_words.is_minor_word(word)
    }

    /// Check if a punctuation token opens a new clause
    #[inline]
    pub fn is_clause_boundary(&self, mark: &str) -> bool {
        self.clause_boundaries.contains(mark)
    }

    #[inline]
    pub fn is_apostrophe(&self, ch: char) -> bool {
        self.apostrophes.contains(&ch)
    }

    pub fn apostrophes(&self) -> &[char] {
        &self.apostrophes
    }

    pub(crate) fn punctuation(&self) -> &PunctuationCheck {
        &self.punctuation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_boundaries() {
        let rules = builtin_rules().unwrap();
        for mark in [":", ";", "—", "!", "?"] {
            assert!(rules.is_clause_boundary(mark), "{mark} should open a clause");
        }
        // Comma joins parts of the same clause
        assert!(!rules.is_clause_boundary(","));
        assert!(!rules.is_clause_boundary("-"));
        assert!(!rules.is_clause_boundary("."));
    }

    #[test]
    fn test_apostrophes() {
        let rules = builtin_rules().unwrap();
        assert!(rules.is_apostrophe('\''));
        assert!(rules.is_apostrophe('’'));
        assert!(!rules.is_apostrophe('"'));
    }

    #[test]
    fn test_from_file_wrapper() {
        let err = StyleRules::from_file("/nonexistent/rules.toml").unwrap_err();
        assert!(matches!(err, Error::RulesUnavailable { .. }));
    }
}
