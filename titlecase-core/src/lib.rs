//! APA 7th edition title-case validation
//!
//! This crate checks whether a title follows APA 7 title-case
//! capitalization and flags irregular whitespace around punctuation. It
//! reports violations; it never rewrites the title.
//!
//! # Architecture
//!
//! Validation is a sequence of independent passes whose findings are
//! concatenated in discovery order:
//! - **Spacing**: leading, trailing and doubled spaces, plus punctuation
//!   spacing, checked on the raw title
//! - **Tokenizer**: splits the whitespace-normalized title into words and
//!   punctuation
//! - **Capitalization**: a stateful pass deciding, per word, whether it must
//!   or must not be capitalized
//!
//! # Example
//!
//! ```rust
//! use titlecase_core::TitleChecker;
//!
//! let checker = TitleChecker::new().unwrap();
//!
//! let result = checker.check_title("A Study of Urban Development: Challenges and Solutions");
//! assert!(result.is_valid());
//!
//! let result = checker.check_title("the Wrong Capitalization");
//! assert_eq!(result.errors(), &["Word 'the' should be capitalized.".to_string()]);
//! ```

pub mod capitalization;
pub mod checker;
pub mod error;
pub mod report;
pub mod rules;
pub mod spacing;
pub mod tokenizer;

pub use capitalization::CapitalizationRules;
pub use checker::{CheckerBuilder, TitleChecker};
pub use error::{Error, Result};
pub use report::{ValidationResult, Violation};
pub use rules::{MinorWordTable, StyleRules};
pub use spacing::{inspect, normalize, SpaceReport};
pub use tokenizer::{RuleTokenizer, Token, TokenKind, TokenStream, Tokenizer};

/// Check a title with the built-in APA 7 rules
pub fn check_title(title: &str) -> Result<ValidationResult> {
    Ok(TitleChecker::new()?.check_title(title))
}

/// Check if a word is an APA 7 minor word
pub fn is_minor_word(word: &str) -> Result<bool> {
    Ok(rules::builtin_rules()?.is_minor_word(word))
}
