//! Letter multisets.

use ahash::AHashMap;

/// Per-character occurrence counts of a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: AHashMap<char, usize>,
}

impl LetterCounts {
    /// Count the characters of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut counts = AHashMap::new();
        for c in text.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        LetterCounts { counts }
    }

    /// Occurrences of `c` (zero if absent).
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Check whether `self` contains at least as many of every character as `other`.
    ///
    /// An empty `other` is dominated by anything.
    pub fn dominates(&self, other: &LetterCounts) -> bool {
        other
            .counts
            .iter()
            .all(|(c, &needed)| self.count(*c) >= needed)
    }
}
