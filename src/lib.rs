//! # Descramble
//!
//! Restores words whose interior letters were shuffled back to their
//! dictionary form, keeping word order, spacing, and punctuation intact.
//!
//! ## Features
//!
//! - Ordered word-list loading
//! - Letter-multiset matching with first-match semantics
//! - Lossless word/separator tokenization
//! - A small CLI (`descramble`)
//!
//! ```
//! use descramble::spelling::{WordList, restore_sentence};
//!
//! let dictionary = WordList::from_words(["hello", "world"]);
//! assert_eq!(restore_sentence("hlelao wlrod!", &dictionary), "hello world!");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
