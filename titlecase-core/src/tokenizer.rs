//! Title tokenization
//!
//! A title is split into words and punctuation marks, keeping the exact
//! surface form of every token. Capitalization checks need the literal
//! text, so nothing is stemmed or case-folded here.
//!
//! Words keep their internal hyphens (`Self-Report`), apostrophes
//! (`Children's`, `Students'`, `'90s`, `'n'`) and digit separators
//! (`1,000`, `U.S`). Every other non-alphanumeric character becomes punctuation; a run
//! of the same mark (`...`, `--`) is one token.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Coarse token category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Word,
    Punctuation,
}

/// One unit of a tokenized title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text, exactly as it appeared
    pub text: String,
    pub kind: TokenKind,
    /// Position in the token sequence, punctuation included
    pub index: usize,
}

impl Token {
    pub fn word(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Word,
            index,
        }
    }

    pub fn punctuation(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Punctuation,
            index,
        }
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Token buffer; typical titles fit without a heap allocation
pub type TokenStream = SmallVec<[Token; 16]>;

/// Splits text into an ordered token sequence
///
/// Implementations must preserve order and surface text exactly.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Short name used in logs
    fn name(&self) -> &str {
        "custom"
    }
}

/// Character-class tokenizer for English titles
#[derive(Debug, Clone)]
pub struct RuleTokenizer {
    apostrophes: Vec<char>,
}

impl Default for RuleTokenizer {
    fn default() -> Self {
        Self::new(&['\'', '’'])
    }
}

impl RuleTokenizer {
    /// Create a tokenizer treating the given characters as apostrophes
    pub fn new(apostrophes: &[char]) -> Self {
        Self {
            apostrophes: apostrophes.to_vec(),
        }
    }

    #[inline]
    fn is_apostrophe(&self, ch: char) -> bool {
        self.apostrophes.contains(&ch)
    }

    fn starts_word(&self, current: char, next: Option<char>) -> bool {
        if current.is_alphanumeric() {
            return true;
        }
        // Elisions such as '90s, 'em and 'n'; an apostrophe before a capital
        // is an opening quote
        self.is_apostrophe(current) && next.is_some_and(|c| c.is_lowercase() || c.is_numeric())
    }

    /// Whether `chars[pos]` continues the word ending at `chars[pos - 1]`
    fn continues_word(&self, chars: &[char], pos: usize) -> bool {
        let current = chars[pos];
        let prev = chars[pos - 1];
        let next = chars.get(pos + 1).copied();

        if current.is_alphanumeric() {
            return true;
        }

        if self.is_apostrophe(current) {
            // Contractions and possessives, including trailing Students'
            return prev.is_alphanumeric();
        }

        match current {
            '-' => prev.is_alphanumeric() && next.is_some_and(char::is_alphanumeric),
            '.' => prev.is_alphanumeric() && next.is_some_and(char::is_alphanumeric),
            ',' => prev.is_ascii_digit() && next.is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    fn tokenize_chunk(&self, chunk: &str, tokens: &mut TokenStream) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut pos = 0;

        while pos < chars.len() {
            let start = pos;
            let kind = if self.starts_word(chars[pos], chars.get(pos + 1).copied()) {
                pos += 1;
                while pos < chars.len() && self.continues_word(&chars, pos) {
                    pos += 1;
                }
                TokenKind::Word
            } else {
                let mark = chars[pos];
                while pos < chars.len() && chars[pos] == mark {
                    pos += 1;
                }
                TokenKind::Punctuation
            };

            tokens.push(Token {
                text: chars[start..pos].iter().collect(),
                kind,
                index: tokens.len(),
            });
        }
    }
}

impl Tokenizer for RuleTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = TokenStream::new();
        for chunk in text.split_whitespace() {
            self.tokenize_chunk(chunk, &mut tokens);
        }
        tokens
    }

    fn name(&self) -> &str {
        "rule"
    }
}
