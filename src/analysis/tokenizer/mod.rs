//! Tokenizer implementations for sentence analysis.
//!
//! Tokenizers split a sentence into alternating word and separator runs so
//! that words can be restored individually and the sentence reassembled.
//!
//! # Examples
//!
//! ```
//! use descramble::analysis::tokenizer::{PartitionTokenizer, Tokenizer};
//!
//! let tokenizer = PartitionTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by reference
/// between restorers.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod partition;

pub use partition::{PartitionTokenizer, WordClass};
