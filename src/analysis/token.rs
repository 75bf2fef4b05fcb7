//! Token types for sentence analysis.
//!
//! A sentence is partitioned into [`Token`]s that alternate between runs of
//! word characters and runs of everything else. Offsets are byte offsets into
//! the original text, so joining the token texts in order reproduces it.
//!
//! # Examples
//!
//! ```
//! use descramble::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("world", 2, 6, 11, TokenType::Word);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert!(token.is_word());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A contiguous run of characters from one character class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this run is a word candidate or a separator
    pub token_type: TokenType,
}

/// Classification of a token run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// A run consisting only of alphabetic characters; eligible for restoration
    Word,
    /// Whitespace, punctuation, symbols, and word runs that are not purely alphabetic
    Separator,
}

impl Token {
    /// Create a new token with text, position, byte offsets, and type.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
        token_type: TokenType,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            token_type,
        }
    }

    /// Check if this token should be passed to the word restorer.
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    /// Clone this token with updated text, keeping its original offsets.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Word => write!(f, "word"),
            TokenType::Separator => write!(f, "separator"),
        }
    }
}

/// A stream of tokens produced by a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

/// Join token texts back into a single string, in stream order.
pub fn join_tokens<I>(tokens: I) -> String
where
    I: IntoIterator<Item = Token>,
{
    tokens.into_iter().map(|token| token.text).collect()
}
