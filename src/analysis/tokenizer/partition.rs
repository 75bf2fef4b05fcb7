//! Lossless word/separator tokenizer.

use std::sync::Arc;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{DescrambleError, Result};

/// Which characters make up a word run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordClass {
    /// Runs of alphabetic characters; digits and `_` are separators.
    #[default]
    Alphabetic,
    /// Runs of regex word characters (`\w`). Runs containing digits or `_`
    /// are kept whole and passed through unrestored.
    RegexWord,
}

impl WordClass {
    /// The alternation that partitions text into runs of this class and its complement.
    pub fn pattern(self) -> &'static str {
        match self {
            WordClass::Alphabetic => r"\p{Alphabetic}+|\P{Alphabetic}+",
            WordClass::RegexWord => r"\w+|\W+",
        }
    }
}

/// Splits text into maximal alternating runs of word and non-word characters.
///
/// Every character of the input lands in exactly one token, so concatenating
/// the token texts reproduces the input.
#[derive(Clone, Debug)]
pub struct PartitionTokenizer {
    pattern: Arc<Regex>,
    word_class: WordClass,
}

impl PartitionTokenizer {
    /// Create a tokenizer using the alphabetic word class.
    pub fn new() -> Result<Self> {
        Self::with_word_class(WordClass::default())
    }

    /// Create a tokenizer for the given word class.
    pub fn with_word_class(word_class: WordClass) -> Result<Self> {
        let regex = Regex::new(word_class.pattern())
            .map_err(|e| DescrambleError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(PartitionTokenizer {
            pattern: Arc::new(regex),
            word_class,
        })
    }

    /// Get the word class this tokenizer partitions on.
    pub fn word_class(&self) -> WordClass {
        self.word_class
    }

    /// Split `text` into its word and separator runs, in order.
    pub fn partition(&self, text: &str) -> Vec<Token> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(
                    mat.as_str(),
                    position,
                    mat.start(),
                    mat.end(),
                    Self::classify(mat.as_str()),
                )
            })
            .collect();

        log::trace!("partitioned {} bytes into {} tokens", text.len(), tokens.len());
        tokens
    }

    fn classify(run: &str) -> TokenType {
        if !run.is_empty() && run.chars().all(char::is_alphabetic) {
            TokenType::Word
        } else {
            TokenType::Separator
        }
    }
}

impl Default for PartitionTokenizer {
    fn default() -> Self {
        Self::new().expect("Default partition pattern should be valid")
    }
}

impl Tokenizer for PartitionTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.partition(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "partition"
    }
}
