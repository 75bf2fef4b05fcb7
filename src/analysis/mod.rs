//! Sentence analysis: tokens and tokenizers.

pub mod token;
pub mod tokenizer;
