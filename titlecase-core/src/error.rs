//! Error types for checker construction
//!
//! Validation itself never fails: formatting defects in a title are
//! reported as [`Violation`](crate::Violation)s. Errors only arise while
//! building a [`TitleChecker`](crate::TitleChecker), when the rule data it
//! depends on is missing or inconsistent.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for checker construction
#[derive(Debug, Error)]
pub enum Error {
    /// The rules asset could not be read or parsed
    #[error("style rules unavailable from {source_name}: {reason}. {hint}")]
    RulesUnavailable {
        /// Where the rules were expected to come from
        source_name: String,
        /// The rules file, `None` for the built-in rules
        path: Option<PathBuf>,
        /// What went wrong
        reason: String,
        /// How to obtain a usable rules file
        hint: &'static str,
    },

    /// The rules asset parsed but does not describe a usable APA 7 rule set
    #[error("invalid style rules: {0}")]
    InvalidRules(String),

    /// Builder misconfiguration
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Hint attached to every [`Error::RulesUnavailable`]
pub(crate) const RULES_HINT: &str =
    "Generate a fresh rules file with `titlecase generate-rules --output apa7.toml` \
     or omit the rules path to use the built-in APA 7 rules";

impl Error {
    pub(crate) fn rules_file(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Error::RulesUnavailable {
            source_name: path.display().to_string(),
            path: Some(path.to_path_buf()),
            reason: reason.into(),
            hint: RULES_HINT,
        }
    }

    pub(crate) fn embedded_rules(reason: impl Into<String>) -> Self {
        Error::RulesUnavailable {
            source_name: "built-in apa7.toml".to_string(),
            path: None,
            reason: reason.into(),
            hint: RULES_HINT,
        }
    }

    /// Path of the rules file when the error came from one
    pub fn rules_path(&self) -> Option<PathBuf> {
        match self {
            Error::RulesUnavailable { path, .. } => path.clone(),
            _ => None,
        }
    }
}

/// Result type for checker construction
pub type Result<T> = std::result::Result<T, Error>;
