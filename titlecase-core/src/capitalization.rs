//! Token-level capitalization rules
//!
//! A single pass over the token sequence carries one piece of state: whether
//! the next word opens a clause. The title's first word and the first word
//! after a clause boundary (`: ; — ! ?`) must be capitalized; elsewhere only
//! minor words are lowercased. Comma does not open a clause.

use crate::report::Violation;
use crate::rules::StyleRules;
use crate::tokenizer::{Token, TokenKind};

/// Capitalization rule engine
#[derive(Debug, Clone, Copy)]
pub struct CapitalizationRules<'a> {
    rules: &'a StyleRules,
}

impl<'a> CapitalizationRules<'a> {
    pub fn new(rules: &'a StyleRules) -> Self {
        Self { rules }
    }

    /// Report every capitalization violation in token order
    pub fn check(&self, tokens: &[Token]) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut start_of_clause = true;

        for token in tokens {
            match token.kind {
                TokenKind::Punctuation => {
                    if self.rules.is_clause_boundary(&token.text) {
                        start_of_clause = true;
                    }
                }
                TokenKind::Word => {
                    let should_capitalize = token.index == 0
                        || start_of_clause
                        || !self.rules.is_minor_word(&token.text);

                    self.check_word(&token.text, should_capitalize, &mut violations);
                    start_of_clause = false;
                }
            }
        }

        violations
    }

    fn check_word(&self, word: &str, should_capitalize: bool, violations: &mut Vec<Violation>) {
        let Some(first) = word.chars().next() else {
            return;
        };

        // Hyphenated compounds are checked whether or not the word is minor
        if word.contains('-') && !hyphen_parts_capitalized(word) {
            log::trace!("hyphenated word '{word}' has a lowercase part");
            violations.push(Violation::HyphenatedWord {
                word: word.to_string(),
            });
        }

        if should_capitalize && self.lacks_capital(first) {
            log::trace!("word '{word}' should be capitalized");
            violations.push(Violation::ShouldBeCapitalized {
                word: word.to_string(),
            });
        }

        if !should_capitalize && first.is_uppercase() {
            log::trace!("word '{word}' should not be capitalized");
            violations.push(Violation::ShouldNotBeCapitalized {
                word: word.to_string(),
            });
        }
    }
}

impl CapitalizationRules<'_> {
    /// Words opening with an apostrophe or a numeral carry no case
    fn lacks_capital(&self, first: char) -> bool {
        !(first.is_uppercase() || first.is_numeric() || self.rules.is_apostrophe(first))
    }
}

fn hyphen_parts_capitalized(word: &str) -> bool {
    word.split('-')
        .filter_map(|part| part.chars().next())
        .all(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::builtin_rules;
    use crate::tokenizer::{RuleTokenizer, Tokenizer};

    fn check(title: &str) -> Vec<String> {
        let rules = builtin_rules().unwrap();
        let tokens = RuleTokenizer::default().tokenize(title);
        CapitalizationRules::new(&rules)
            .check(&tokens)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_correct_title() {
        assert!(check("The Effects of Social Media on Mental Health").is_empty());
    }

    #[test]
    fn test_first_word_must_be_capitalized() {
        assert_eq!(
            check("the Wrong Capitalization"),
            vec!["Word 'the' should be capitalized."]
        );
    }

    #[test]
    fn test_lowercase_major_word() {
        assert_eq!(
            check("Incorrect Capitalization of short Words"),
            vec!["Word 'short' should be capitalized."]
        );
    }

    #[test]
    fn test_capitalized_minor_words() {
        assert_eq!(
            check("Speaking English In An Indonesian High School"),
            vec![
                "Word 'In' should not be capitalized.",
                "Word 'An' should not be capitalized.",
            ]
        );
    }

    #[test]
    fn test_clause_boundaries_reset() {
        assert!(check("A Study of Urban Development: Challenges and Solutions").is_empty());
        assert!(check("Breaking Down Barriers — A New Approach").is_empty());
        assert!(check("Is It Over? The Aftermath").is_empty());
        assert!(check("Stop! In the Name of Love").is_empty());
        assert!(check("Part One; The Beginning").is_empty());
    }

    #[test]
    fn test_clause_start_requires_capital_even_for_minor_words() {
        assert_eq!(
            check("Students' Anxiety: in Speaking English"),
            vec!["Word 'in' should be capitalized."]
        );
    }

    #[test]
    fn test_comma_does_not_reset_clause() {
        assert!(check("Apples, and Oranges").is_empty());
        assert_eq!(
            check("Apples, And Oranges"),
            vec!["Word 'And' should not be capitalized."]
        );
    }

    #[test]
    fn test_boundary_only_arms_the_next_word() {
        assert_eq!(
            check("Results: A Look at The Data"),
            vec!["Word 'The' should not be capitalized."]
        );
    }

    #[test]
    fn test_hyphenated_words() {
        assert_eq!(
            check("Self-report Questionnaire"),
            vec!["Hyphenated word 'Self-report' not properly capitalized."]
        );
        assert!(check("Self-Report Questionnaire").is_empty());
    }

    #[test]
    fn test_hyphenated_word_with_lowercase_head_reports_both() {
        assert_eq!(
            check("A self-Report Study"),
            vec![
                "Hyphenated word 'self-Report' not properly capitalized.",
                "Word 'self-Report' should be capitalized.",
            ]
        );
    }

    #[test]
    fn test_apostrophe_and_digit_starts_are_exempt() {
        assert!(check("Life in the '90s").is_empty());
        assert!(check("2020 Vision: 10 Lessons").is_empty());
    }

    #[test]
    fn test_elisions_are_exempt() {
        assert!(check("Rock 'n' Roll Forever").is_empty());
        assert!(check("Fish ’n’ Chips").is_empty());
        assert!(check("Love 'em All").is_empty());
        assert!(check("'Tis the Season").is_empty());
    }

    #[test]
    fn test_uncased_first_letter_needs_capital() {
        // Only apostrophes and numerals are exempt, other marks are not
        let rules = builtin_rules().unwrap();
        let tokens = [Token::word("_private", 0)];
        assert_eq!(
            CapitalizationRules::new(&rules).check(&tokens),
            vec![Violation::ShouldBeCapitalized {
                word: "_private".into()
            }]
        );
    }

    #[test]
    fn test_leading_quote_still_counts_as_clause_start() {
        // The quote takes index 0 but the clause flag is still armed
        assert_eq!(
            check("\"the Raven\" Revisited"),
            vec!["Word 'the' should be capitalized."]
        );
    }

    #[test]
    fn test_every_defect_is_reported() {
        assert_eq!(
            check("the study Of urban-planning"),
            vec![
                "Word 'the' should be capitalized.",
                "Word 'study' should be capitalized.",
                "Word 'Of' should not be capitalized.",
                "Hyphenated word 'urban-planning' not properly capitalized.",
                "Word 'urban-planning' should be capitalized.",
            ]
        );
    }

    #[test]
    fn test_no_tokens() {
        assert!(check("").is_empty());
        assert!(check("— : ?").is_empty());
    }
}
