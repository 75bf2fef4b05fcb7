//! Error types for the Descramble library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`DescrambleError`] enum.
//!
//! # Examples
//!
//! ```
//! use descramble::error::{DescrambleError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DescrambleError::config("no dictionary path given"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Descramble operations.
#[derive(Error, Debug)]
pub enum DescrambleError {
    /// I/O errors (missing dictionary, unreadable file, bad encoding)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DescrambleError.
pub type Result<T> = std::result::Result<T, DescrambleError>;

impl DescrambleError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DescrambleError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DescrambleError::Config(msg.into())
    }
}
