//! Configuration structures and validation
//!
//! This module defines the TOML schema for style rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The only style code accepted by the checker
pub const APA7_CODE: &str = "apa7";

/// Root style configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub metadata: Metadata,
    pub minor_words: MinorWords,
    pub punctuation: Punctuation,
}

/// Style metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Minor words grouped by category (articles, conjunctions, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MinorWords {
    #[serde(flatten)]
    pub categories: BTreeMap<String, Vec<String>>,
}

/// Punctuation sets driving clause resets and spacing checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Punctuation {
    pub clause_boundaries: Vec<String>,
    #[serde(default)]
    pub space_before: Vec<char>,
    #[serde(default)]
    pub space_after: Vec<char>,
    /// Marks accepted with whitespace on both sides
    #[serde(default)]
    pub spaced_separators: Vec<char>,
    #[serde(default = "default_apostrophes")]
    pub apostrophes: Vec<char>,
}

fn default_apostrophes() -> Vec<char> {
    vec!['\'', '’']
}

impl StyleConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code != APA7_CODE {
            return Err(format!(
                "unsupported style code '{}', only '{APA7_CODE}' is supported",
                self.metadata.code
            ));
        }

        if self
            .minor_words
            .categories
            .values()
            .all(|words| words.is_empty())
        {
            return Err("no minor words defined".to_string());
        }

        if let Some(word) = self
            .minor_words
            .categories
            .values()
            .flatten()
            .find(|word| word.trim().is_empty() || word.contains(char::is_whitespace))
        {
            return Err(format!("minor word '{word}' must be a single non-empty word"));
        }

        if self.punctuation.clause_boundaries.is_empty() {
            return Err("no clause boundary marks defined".to_string());
        }

        if self
            .punctuation
            .clause_boundaries
            .iter()
            .any(|mark| mark.is_empty())
        {
            return Err("clause boundary marks must not be empty".to_string());
        }

        Ok(())
    }
}
