//! Whitespace and punctuation spacing inspection
//!
//! These checks run on the raw title, before whitespace is normalized, so
//! that spacing defects are still visible.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Spacing diagnostics for a raw title
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpaceReport {
    /// The title exactly as inspected
    pub original_title: String,
    /// Title starts with a space
    pub has_leading_space: bool,
    /// Title ends with a space
    pub has_trailing_space: bool,
    /// Two consecutive spaces appear somewhere in the title
    pub has_double_space: bool,
    /// Total number of space characters
    pub space_count: usize,
    /// Positions of empty fields when splitting on single spaces
    pub extra_space_indices: Vec<usize>,
}

impl SpaceReport {
    /// Whether any leading, trailing or doubled space was found
    pub fn has_extra_space(&self) -> bool {
        self.has_leading_space || self.has_trailing_space || self.has_double_space
    }
}

/// Inspect a raw title for spacing defects
///
/// Total over all strings; the empty title yields an all-false report.
pub fn inspect(title: &str) -> SpaceReport {
    let extra_space_indices = if title.is_empty() {
        Vec::new()
    } else {
        title
            .split(' ')
            .enumerate()
            .filter(|(_, field)| field.is_empty())
            .map(|(index, _)| index)
            .collect()
    };

    SpaceReport {
        original_title: title.to_string(),
        has_leading_space: title.starts_with(' '),
        has_trailing_space: title.ends_with(' '),
        has_double_space: title.contains("  "),
        space_count: title.matches(' ').count(),
        extra_space_indices,
    }
}

/// Collapse whitespace runs to a single space and trim both ends
pub fn normalize(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Regex-based punctuation spacing checks
#[derive(Debug, Clone)]
pub struct PunctuationCheck {
    /// Whitespace followed by a mark from the space-before set
    space_before: Option<Regex>,
    /// A mark from the space-after set followed by a non-space
    missing_after: Option<Regex>,
}

impl PunctuationCheck {
    /// Compile the checks for the given punctuation sets
    ///
    /// Marks in `spaced_separators` are accepted with whitespace on both
    /// sides; whitespace before them is only a defect when nothing but the
    /// end of the title or a non-space follows.
    pub fn new(
        space_before: &[char],
        space_after: &[char],
        spaced_separators: &[char],
    ) -> Result<Self> {
        let (separators, tight): (Vec<char>, Vec<char>) = space_before
            .iter()
            .copied()
            .partition(|ch| spaced_separators.contains(ch));

        let alternatives: Vec<String> = [
            char_class(&tight).map(|class| format!(r"\s+{class}")),
            char_class(&separators).map(|class| format!(r"\s+{class}(?:\S|$)")),
        ]
        .into_iter()
        .flatten()
        .collect();

        let space_before = if alternatives.is_empty() {
            None
        } else {
            Some(compile(&alternatives.join("|"))?)
        };
        let missing_after = match char_class(space_after) {
            Some(class) => Some(compile(&format!(r"{class}\S"))?),
            None => None,
        };

        Ok(Self {
            space_before,
            missing_after,
        })
    }

    /// Whitespace appears before a mark that must hug the preceding word
    pub fn has_space_before(&self, title: &str) -> bool {
        self.space_before
            .as_ref()
            .is_some_and(|re| re.is_match(title))
    }

    /// A mark that must be followed by a space is followed by something else
    pub fn has_missing_space_after(&self, title: &str) -> bool {
        self.missing_after
            .as_ref()
            .is_some_and(|re| re.is_match(title))
    }
}

fn char_class(chars: &[char]) -> Option<String> {
    if chars.is_empty() {
        return None;
    }

    let escaped: String = chars
        .iter()
        .map(|ch| regex::escape(&ch.to_string()))
        .collect();
    Some(format!("[{escaped}]"))
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| Error::InvalidRules(format!("bad punctuation pattern {pattern}: {e}")))
}
