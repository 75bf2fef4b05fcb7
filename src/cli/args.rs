//! Command line argument parsing for the Descramble CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::WordClass;
use crate::spelling::MatchRule;

/// Descramble - restore words whose interior letters were shuffled
#[derive(Parser, Debug, Clone)]
#[command(name = "descramble")]
#[command(about = "Restore scrambled words to their dictionary form")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DescrambleArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DescrambleArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Restore every word of a sentence
    Restore(RestoreArgs),

    /// Restore a single word
    Word(WordArgs),

    /// Show how a sentence is split into word and separator runs
    Tokenize(TokenizeArgs),
}

/// Arguments for restoring a sentence
#[derive(Parser, Debug, Clone)]
pub struct RestoreArgs {
    /// Sentence to restore (defaults to the configured sample sentence)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Word list, one word per line
    #[arg(short, long, value_name = "DICTIONARY", env = "DESCRAMBLE_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Rule for accepting dictionary entries
    #[arg(short, long)]
    pub rule: Option<MatchRule>,

    /// Characters that form word runs
    #[arg(short, long)]
    pub word_class: Option<WordClass>,
}

/// Arguments for restoring a single word
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// Scrambled word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Word list, one word per line
    #[arg(short, long, value_name = "DICTIONARY", env = "DESCRAMBLE_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Rule for accepting dictionary entries
    #[arg(short, long)]
    pub rule: Option<MatchRule>,
}

/// Arguments for tokenizing a sentence
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Sentence to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Characters that form word runs
    #[arg(short, long)]
    pub word_class: Option<WordClass>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
