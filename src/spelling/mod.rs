//! Word list loading and scrambled-word restoration.
//!
//! This module provides the ordered word list, letter multisets, and the
//! restorers that map scrambled words and sentences back to dictionary form.

pub mod dictionary;
pub mod letters;
pub mod restorer;

// Re-export commonly used types
pub use dictionary::*;
pub use letters::*;
pub use restorer::*;
