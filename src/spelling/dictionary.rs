//! Word list management for restoration.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, error, info};

use crate::error::Result;

/// An ordered list of valid words.
///
/// Entries keep file order and are never deduplicated or normalized beyond
/// trimming surrounding whitespace; matching against them is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create a new empty word list.
    pub fn new() -> Self {
        WordList { words: Vec::new() }
    }

    /// Build a word list from an in-memory sequence, keeping its order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordList {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a word list from a text file with one word per line.
    ///
    /// Each line is trimmed. Blank lines are kept as empty entries. A missing
    /// or unreadable file, or one that is not valid UTF-8, is an error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading word list from {}", path.display());

        let file = File::open(path).map_err(|e| with_path(path, None, e))?;
        let reader = BufReader::new(file);

        let mut list = WordList::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| with_path(path, Some(line_num + 1), e))?;
            list.push(line.trim());
        }

        info!("Loaded {} entries from {}", list.len(), path.display());
        Ok(list)
    }

    /// Append a word to the end of the list.
    pub fn push<S: Into<String>>(&mut self, word: S) {
        self.words.push(word.into());
    }

    /// Get all words in list order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Get the number of entries, blanks and duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Attach the word list path (and line, if known) to an I/O error, keeping its kind.
fn with_path(path: &Path, line: Option<usize>, e: io::Error) -> io::Error {
    let location = match line {
        Some(line) => format!("{}:{line}", path.display()),
        None => path.display().to_string(),
    };
    error!("Failed to read word list {location}: {e}");
    io::Error::new(e.kind(), format!("{location}: {e}"))
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        WordList { words }
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        WordList {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
