//! Violations and validation results

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single detected defect in a title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Every cased character of the title is uppercase
    UppercaseTitle,
    /// Leading, trailing or doubled spaces
    ExtraSpace,
    /// Whitespace before `, : ; — ! ?`
    SpaceBeforePunctuation,
    /// `: ; ! ?` directly followed by a non-space character
    MissingSpaceAfterPunctuation,
    /// A hyphen-separated part does not start with an uppercase letter
    HyphenatedWord { word: String },
    /// Word must be capitalized but starts lowercase
    ShouldBeCapitalized { word: String },
    /// Minor word mid-clause starts uppercase
    ShouldNotBeCapitalized { word: String },
}

impl Violation {
    /// Stable identifier of the violation kind
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::UppercaseTitle => "uppercase_title",
            Violation::ExtraSpace => "extra_space",
            Violation::SpaceBeforePunctuation => "space_before_punctuation",
            Violation::MissingSpaceAfterPunctuation => "missing_space_after_punctuation",
            Violation::HyphenatedWord { .. } => "hyphenated_word",
            Violation::ShouldBeCapitalized { .. } => "should_be_capitalized",
            Violation::ShouldNotBeCapitalized { .. } => "should_not_be_capitalized",
        }
    }

    /// The offending word, for word-level violations
    pub fn word(&self) -> Option<&str> {
        match self {
            Violation::HyphenatedWord { word }
            | Violation::ShouldBeCapitalized { word }
            | Violation::ShouldNotBeCapitalized { word } => Some(word),
            _ => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UppercaseTitle => write!(f, "Title should not be in uppercase."),
            Violation::ExtraSpace => {
                write!(f, "Extra space in leading, trailing, or in the middle.")
            }
            Violation::SpaceBeforePunctuation => write!(f, "Extra space before punctuation."),
            Violation::MissingSpaceAfterPunctuation => {
                write!(f, "Missing space after punctuation.")
            }
            Violation::HyphenatedWord { word } => {
                write!(f, "Hyphenated word '{word}' not properly capitalized.")
            }
            Violation::ShouldBeCapitalized { word } => {
                write!(f, "Word '{word}' should be capitalized.")
            }
            Violation::ShouldNotBeCapitalized { word } => {
                write!(f, "Word '{word}' should not be capitalized.")
            }
        }
    }
}

/// Outcome of validating one title
///
/// Validity is derived from the violation list, so `is_valid` and
/// `errors.is_empty()` can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    #[serde(skip)]
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// Build a result from violations in discovery order
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let errors: Vec<String> = violations.iter().map(ToString::to_string).collect();
        Self {
            is_valid: errors.is_empty(),
            errors,
            violations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Human-readable messages, one per violation
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether a violation of the given kind was reported
    pub fn has(&self, kind: &str) -> bool {
        self.violations.iter().any(|v| v.kind() == kind)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::from_violations(Vec::new())
    }
}
