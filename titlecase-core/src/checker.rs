//! Title validation entry point

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::capitalization::CapitalizationRules;
use crate::error::{Error, Result};
use crate::report::{ValidationResult, Violation};
use crate::rules::{builtin_rules, StyleRules};
use crate::spacing::{self, SpaceReport};
use crate::tokenizer::{RuleTokenizer, TokenStream, Tokenizer};

/// APA 7 title checker
///
/// Construction loads the style rules and tokenizer once; every call to
/// [`check_title`](Self::check_title) afterwards is a pure function of its
/// input and may run concurrently with others.
#[derive(Clone)]
pub struct TitleChecker {
    rules: Arc<StyleRules>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl fmt::Debug for TitleChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleChecker")
            .field("style", &self.rules.code())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl TitleChecker {
    /// Create a checker with the built-in APA 7 rules
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::default()
    }

    /// Validate a title against APA 7 title case and spacing rules
    pub fn check_title(&self, title: &str) -> ValidationResult {
        let mut violations = Vec::new();

        violations.extend(check_uppercase(title));
        violations.extend(check_extra_space(&spacing::inspect(title)));
        violations.extend(self.check_punctuation_spacing(title));

        let tokens = self.tokenize(title);
        violations.extend(CapitalizationRules::new(&self.rules).check(&tokens));

        log::debug!("checked {title:?}: {} violation(s)", violations.len());
        ValidationResult::from_violations(violations)
    }

    /// Validate a batch of titles, preserving order
    pub fn check_titles<'t>(
        &self,
        titles: impl IntoIterator<Item = &'t str>,
    ) -> Vec<ValidationResult> {
        titles
            .into_iter()
            .map(|title| self.check_title(title))
            .collect()
    }

    /// Validate a batch of titles on the rayon thread pool, preserving order
    #[cfg(feature = "parallel")]
    pub fn check_titles_parallel<S: AsRef<str> + Sync>(
        &self,
        titles: &[S],
    ) -> Vec<ValidationResult> {
        use rayon::prelude::*;

        titles
            .par_iter()
            .map(|title| self.check_title(title.as_ref()))
            .collect()
    }

    /// Spacing diagnostics for a raw title
    pub fn inspect(&self, title: &str) -> SpaceReport {
        spacing::inspect(title)
    }

    /// Tokens the capitalization pass sees: the title is normalized first
    pub fn tokenize(&self, title: &str) -> TokenStream {
        self.tokenizer.tokenize(&spacing::normalize(title))
    }

    pub fn rules(&self) -> &StyleRules {
        &self.rules
    }

    fn check_punctuation_spacing(&self, title: &str) -> Vec<Violation> {
        let check = self.rules.punctuation();
        let mut violations = Vec::new();

        if check.has_space_before(title) {
            violations.push(Violation::SpaceBeforePunctuation);
        }
        if check.has_missing_space_after(title) {
            violations.push(Violation::MissingSpaceAfterPunctuation);
        }

        violations
    }
}

/// At least one cased character and no lowercase ones
fn check_uppercase(title: &str) -> Option<Violation> {
    let has_cased = title.chars().any(|c| c.is_uppercase() || c.is_lowercase());
    let has_lower = title.chars().any(char::is_lowercase);

    (has_cased && !has_lower).then_some(Violation::UppercaseTitle)
}

fn check_extra_space(report: &SpaceReport) -> Option<Violation> {
    report.has_extra_space().then_some(Violation::ExtraSpace)
}

/// Where the checker's rules come from
#[derive(Debug, Clone, Default)]
enum RulesSource {
    #[default]
    BuiltIn,
    File(PathBuf),
    Rules(Arc<StyleRules>),
}

/// Fluent builder for [`TitleChecker`]
#[derive(Default)]
pub struct CheckerBuilder {
    source: RulesSource,
    tokenizer: Option<Arc<dyn Tokenizer>>,
}

impl fmt::Debug for CheckerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckerBuilder")
            .field("source", &self.source)
            .field("tokenizer", &self.tokenizer.as_ref().map(|t| t.name()))
            .finish()
    }
}

impl CheckerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rules from a TOML file instead of the built-in set
    pub fn rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = RulesSource::File(path.into());
        self
    }

    /// Use already-loaded rules
    pub fn rules(mut self, rules: Arc<StyleRules>) -> Self {
        self.source = RulesSource::Rules(rules);
        self
    }

    /// Replace the default tokenizer
    pub fn tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        let tokenizer: Arc<dyn Tokenizer> = Arc::new(tokenizer);
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Build the checker
    pub fn build(self) -> Result<TitleChecker> {
        let rules = match self.source {
            RulesSource::BuiltIn => builtin_rules()?,
            RulesSource::File(path) => {
                if path.as_os_str().is_empty() {
                    return Err(Error::Configuration("rules path must not be empty".into()));
                }
                Arc::new(StyleRules::from_file(&path)?)
            }
            RulesSource::Rules(rules) => rules,
        };

        let tokenizer: Arc<dyn Tokenizer> = match self.tokenizer {
            Some(tokenizer) => tokenizer,
            None => Arc::new(RuleTokenizer::new(rules.apostrophes())),
        };

        log::debug!(
            "built title checker: style={}, tokenizer={}",
            rules.code(),
            tokenizer.name()
        );

        Ok(TitleChecker { rules, tokenizer })
    }
}
