//! Word and sentence restoration.
//!
//! A scrambled word is restored by scanning the word list in order and taking
//! the first entry whose letters are all available in the scrambled word (see
//! [`LetterCounts::dominates`]). When nothing matches, the word is returned
//! unchanged. Sentences are tokenized into word and separator runs; only word
//! runs are restored, and the runs are joined back in their original order.
//!
//! # Examples
//!
//! ```
//! use descramble::spelling::{WordList, WordRestorer};
//!
//! let restorer = WordRestorer::new(WordList::from_words(["hello", "world"])).unwrap();
//! let report = restorer.restore_with_report("hlelao wlrod!").unwrap();
//!
//! assert_eq!(report.restored, "hello world!");
//! assert_eq!(report.restored_count(), 2);
//! ```

use std::sync::LazyLock;

use clap::ValueEnum;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, join_tokens};
use crate::analysis::tokenizer::{PartitionTokenizer, WordClass};
use crate::error::Result;
use crate::spelling::dictionary::WordList;
use crate::spelling::letters::LetterCounts;

/// Alphabetic-run tokenizer shared by the free restoration functions.
static DEFAULT_TOKENIZER: LazyLock<PartitionTokenizer> = LazyLock::new(PartitionTokenizer::default);

/// Rule deciding whether a dictionary entry is a valid restoration of a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// The entry's letters must be a sub-multiset of the token's letters.
    ///
    /// Length and first/last letters are not checked, so a shorter entry can
    /// match a longer token.
    #[default]
    Loose,
    /// Like `Loose`, but the entry must also have the same length and the
    /// same first and last letters as the token.
    Anchored,
}

impl MatchRule {
    fn accepts(self, token: &str, token_counts: &LetterCounts, candidate: &str) -> bool {
        if self == MatchRule::Anchored && !same_frame(token, candidate) {
            return false;
        }
        token_counts.dominates(&LetterCounts::from_text(candidate))
    }
}

/// Same length in chars and same first and last char.
fn same_frame(token: &str, candidate: &str) -> bool {
    token.chars().count() == candidate.chars().count()
        && token.chars().next() == candidate.chars().next()
        && token.chars().next_back() == candidate.chars().next_back()
}

/// Find the first entry of `dictionary` that `rule` accepts for `token`.
pub fn find_match<'a>(token: &str, dictionary: &'a WordList, rule: MatchRule) -> Option<&'a str> {
    let token_counts = LetterCounts::from_text(token);
    dictionary
        .iter()
        .find(|candidate| rule.accepts(token, &token_counts, candidate))
        .map(String::as_str)
}

/// Restore a single scrambled word with the loose rule.
///
/// Returns the first dictionary entry whose letters are contained in `token`,
/// or `token` itself when there is none.
pub fn restore_word(token: &str, dictionary: &WordList) -> String {
    find_match(token, dictionary, MatchRule::Loose)
        .unwrap_or(token)
        .to_string()
}

/// Restore every alphabetic run of `text` with the loose rule, leaving all
/// other characters untouched.
pub fn restore_sentence(text: &str, dictionary: &WordList) -> String {
    let tokens = DEFAULT_TOKENIZER.partition(text).into_iter().map(|token| {
        if token.is_word() {
            token.with_text(restore_word(&token.text, dictionary))
        } else {
            token
        }
    });
    join_tokens(tokens)
}

/// Outcome of restoring one word token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRestoration {
    /// Token text as it appeared in the input.
    pub original: String,
    /// Text emitted for the token.
    pub restored: String,
    /// Position of the token in the token stream.
    pub position: usize,
    /// Whether a dictionary entry was found.
    pub matched: bool,
}

/// Result of restoring a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestorationReport {
    /// Input sentence.
    pub original: String,
    /// Restored sentence.
    pub restored: String,
    /// One entry per word token, in order.
    pub words: Vec<WordRestoration>,
}

impl RestorationReport {
    /// Number of word tokens that matched a dictionary entry.
    pub fn restored_count(&self) -> usize {
        self.words.iter().filter(|w| w.matched).count()
    }

    /// Number of word tokens passed through unchanged for lack of a match.
    pub fn unmatched_count(&self) -> usize {
        self.words.len() - self.restored_count()
    }
}

/// Restores words and sentences against a fixed word list.
pub struct WordRestorer {
    dictionary: WordList,
    tokenizer: PartitionTokenizer,
    rule: MatchRule,
}

impl WordRestorer {
    /// Create a restorer with the loose rule and alphabetic word runs.
    pub fn new(dictionary: WordList) -> Result<Self> {
        Self::with_options(dictionary, MatchRule::default(), WordClass::default())
    }

    /// Create a restorer with an explicit match rule and word class.
    pub fn with_options(dictionary: WordList, rule: MatchRule, word_class: WordClass) -> Result<Self> {
        Ok(WordRestorer {
            dictionary,
            tokenizer: PartitionTokenizer::with_word_class(word_class)?,
            rule,
        })
    }

    /// Get the word list.
    pub fn dictionary(&self) -> &WordList {
        &self.dictionary
    }

    /// Get the match rule.
    pub fn rule(&self) -> MatchRule {
        self.rule
    }

    /// Get the tokenizer used for sentences.
    pub fn tokenizer(&self) -> &PartitionTokenizer {
        &self.tokenizer
    }

    /// Find the dictionary entry that restores `token`, if any.
    pub fn find_match(&self, token: &str) -> Option<&str> {
        find_match(token, &self.dictionary, self.rule)
    }

    /// Restore a single word, returning it unchanged when nothing matches.
    pub fn restore_word(&self, token: &str) -> String {
        self.find_match(token).unwrap_or(token).to_string()
    }

    /// Restore every word token of `text`.
    pub fn restore_sentence(&self, text: &str) -> Result<String> {
        Ok(self.restore_with_report(text)?.restored)
    }

    /// Restore every word token of `text` and report what happened to each.
    pub fn restore_with_report(&self, text: &str) -> Result<RestorationReport> {
        let mut restored = String::with_capacity(text.len());
        let mut words = Vec::new();

        for token in self.tokenizer.partition(text) {
            if !token.is_word() {
                restored.push_str(&token.text);
                continue;
            }

            let outcome = self.restore_token(&token);
            restored.push_str(&outcome.restored);
            words.push(outcome);
        }

        debug!(
            "Restored {}/{} words using {} entries",
            words.iter().filter(|w| w.matched).count(),
            words.len(),
            self.dictionary.len()
        );

        Ok(RestorationReport {
            original: text.to_string(),
            restored,
            words,
        })
    }

    fn restore_token(&self, token: &Token) -> WordRestoration {
        let found = self.find_match(&token.text);
        trace!("{:?} -> {:?}", token.text, found);

        WordRestoration {
            original: token.text.clone(),
            restored: found.unwrap_or(token.text.as_str()).to_string(),
            position: token.position,
            matched: found.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> WordList {
        WordList::from_words(list.iter().copied())
    }

    #[test]
    fn test_restore_sentence_scenario() {
        let dictionary = words(&["hello", "world"]);
        assert_eq!(restore_sentence("hlelao wlrod!", &dictionary), "hello world!");
    }

    #[test]
    fn test_restore_word_first_match_wins() {
        let dictionary = words(&["cat", "act"]);
        assert_eq!(restore_word("tac", &dictionary), "cat");

        let dictionary = words(&["act", "cat"]);
        assert_eq!(restore_word("tac", &dictionary), "act");
    }

    #[test]
    fn test_restore_word_no_match() {
        let dictionary = words(&["zzz"]);
        assert_eq!(restore_word("abc", &dictionary), "abc");
    }

    #[test]
    fn test_shorter_entry_can_match() {
        let dictionary = words(&["he", "hello"]);
        assert_eq!(restore_word("hlelo", &dictionary), "he");
    }

    #[test]
    fn test_case_is_exact() {
        let dictionary = words(&["cat"]);
        assert_eq!(restore_word("Tac", &dictionary), "Tac");
    }

    #[test]
    fn test_blank_entry_matches_anything() {
        let dictionary = words(&["", "cat"]);
        assert_eq!(restore_word("tac", &dictionary), "");
    }

    #[test]
    fn test_empty_dictionary_passes_through() {
        let dictionary = WordList::new();
        let text = "Some text, with 42 symbols & spacing!  ";
        assert_eq!(restore_sentence(text, &dictionary), text);

        let restorer = WordRestorer::new(WordList::new()).unwrap();
        assert_eq!(restorer.restore_sentence(text).unwrap(), text);
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(restore_word("", &words(&["a"])), "");
    }

    #[test]
    fn test_anchored_rule() {
        let dictionary = words(&["he", "hello"]);
        let restorer =
            WordRestorer::with_options(dictionary, MatchRule::Anchored, WordClass::Alphabetic)
                .unwrap();
        assert_eq!(restorer.restore_word("hlelo"), "hello");

        let restorer =
            WordRestorer::with_options(words(&["cat"]), MatchRule::Anchored, WordClass::Alphabetic)
                .unwrap();
        assert_eq!(restorer.restore_word("tac"), "tac");
        assert_eq!(restorer.find_match("tac"), None);
    }

    #[test]
    fn test_report() {
        let restorer = WordRestorer::new(words(&["hello", "world"])).unwrap();
        let report = restorer.restore_with_report("hlelo, xyz wlrod").unwrap();

        assert_eq!(report.restored, "hello, xyz world");
        assert_eq!(report.words.len(), 3);
        assert_eq!(report.restored_count(), 2);
        assert_eq!(report.unmatched_count(), 1);
        assert_eq!(report.words[1].original, "xyz");
        assert!(!report.words[1].matched);
        assert_eq!(report.words[2].position, 4);
    }

    #[test]
    fn test_regex_word_class_passes_mixed_runs() {
        let restorer =
            WordRestorer::with_options(words(&["cat", "a"]), MatchRule::Loose, WordClass::RegexWord)
                .unwrap();
        assert_eq!(restorer.restore_sentence("abc1 tac").unwrap(), "abc1 cat");

        let restorer = WordRestorer::new(words(&["cat", "a"])).unwrap();
        assert_eq!(restorer.restore_sentence("abc1 tac").unwrap(), "a1 cat");
    }

    #[test]
    fn test_free_and_struct_restorers_agree() {
        let dictionary = words(&["the", "quick", "brown", "fox", "café", "naïve", "straße", "a"]);
        let restorer = WordRestorer::new(dictionary.clone()).unwrap();

        for text in [
            "Teh qciuk, bowrn fox -- tpyos 123 ok?",
            "snake_case_ehT x1y2z3 __init__ 42abc",
            "écfa, nvïae; sßtrae!",
            "日本語 テキスト and Ελληνικά",
            "tabs\tand\r\nnewlines\u{00a0}nbsp",
            "",
            "   ",
        ] {
            assert_eq!(
                restorer.restore_sentence(text).unwrap(),
                restore_sentence(text, &dictionary),
                "paths disagree on {text:?}"
            );
        }
    }

    #[test]
    fn test_free_restore_sentence_splits_digits_and_underscores() {
        let dictionary = words(&["cat"]);
        assert_eq!(restore_sentence("tac_tac1tac", &dictionary), "cat_cat1cat");
    }

    #[test]
    fn test_restored_word_is_contained_in_token() {
        let dictionary = words(&["ab", "bca", "aaa", "c", "hello"]);
        for token in ["abc", "cab", "aab", "lleho", "xyz", "a"] {
            let restored = restore_word(token, &dictionary);
            let token_counts = LetterCounts::from_text(token);
            assert!(token_counts.dominates(&LetterCounts::from_text(&restored)));
        }
    }
}
