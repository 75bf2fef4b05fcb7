//! Configuration for restoration runs.
//!
//! A [`RestorerConfig`] can be built in code, read from a JSON file, and then
//! overridden field by field from the command line.
//!
//! ```no_run
//! use descramble::config::RestorerConfig;
//!
//! let config = RestorerConfig::from_file("descramble.json").unwrap();
//! let restorer = config.build_restorer().unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::WordClass;
use crate::error::{DescrambleError, Result};
use crate::spelling::{MatchRule, WordList, WordRestorer};

/// Sentence restored when none is supplied.
pub const SAMPLE_TEXT: &str = "hlelao wlrod!";

/// Settings for a restoration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestorerConfig {
    /// Path to the newline-delimited word list.
    pub dictionary_path: Option<PathBuf>,
    /// Rule used to accept dictionary entries.
    pub match_rule: MatchRule,
    /// Characters forming word runs.
    pub word_class: WordClass,
    /// Sentence restored when no text is given.
    pub sample_text: String,
}

impl Default for RestorerConfig {
    fn default() -> Self {
        RestorerConfig {
            dictionary_path: None,
            match_rule: MatchRule::default(),
            word_class: WordClass::default(),
            sample_text: SAMPLE_TEXT.to_string(),
        }
    }
}

impl RestorerConfig {
    /// Read a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: RestorerConfig = serde_json::from_str(&content)?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Set the dictionary path.
    pub fn with_dictionary_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    /// Set the match rule.
    pub fn with_match_rule(mut self, rule: MatchRule) -> Self {
        self.match_rule = rule;
        self
    }

    /// Set the word class.
    pub fn with_word_class(mut self, word_class: WordClass) -> Self {
        self.word_class = word_class;
        self
    }

    /// Check that a dictionary path is configured and return it.
    pub fn validate(&self) -> Result<&Path> {
        match self.dictionary_path.as_deref() {
            None => Err(DescrambleError::config(
                "no dictionary path given (use --dictionary or set dictionary_path)",
            )),
            Some(path) if path.as_os_str().is_empty() => {
                Err(DescrambleError::config("dictionary path is empty"))
            }
            Some(path) => Ok(path),
        }
    }

    /// Load the configured word list.
    pub fn load_dictionary(&self) -> Result<WordList> {
        WordList::load_from_file(self.validate()?)
    }

    /// Load the word list and build a restorer from this configuration.
    pub fn build_restorer(&self) -> Result<WordRestorer> {
        let dictionary = self.load_dictionary()?;
        WordRestorer::with_options(dictionary, self.match_rule, self.word_class)
    }
}
