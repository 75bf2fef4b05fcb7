use std::io::Write;

use descramble::analysis::token::join_tokens;
use descramble::analysis::tokenizer::{PartitionTokenizer, Tokenizer, WordClass};
use descramble::config::{RestorerConfig, SAMPLE_TEXT};
use descramble::error::DescrambleError;
use descramble::spelling::{MatchRule, WordList, WordRestorer, restore_sentence, restore_word};

use tempfile::NamedTempFile;

fn dictionary_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_sample_sentence_from_file() {
    let file = dictionary_file("hello\nworld\n");
    let dictionary = WordList::load_from_file(file.path()).unwrap();

    assert_eq!(restore_sentence(SAMPLE_TEXT, &dictionary), "hello world!");
}

#[test]
fn test_single_word_scenarios() {
    assert_eq!(restore_word("tac", &WordList::from_words(["cat"])), "cat");
    assert_eq!(restore_word("abc", &WordList::from_words(["zzz"])), "abc");
}

#[test]
fn test_crlf_dictionary() {
    let file = dictionary_file("hello\r\nworld\r\n");
    let dictionary = WordList::load_from_file(file.path()).unwrap();

    assert_eq!(dictionary.words(), &["hello", "world"]);
    assert_eq!(restore_sentence("wlrod, hlelo.", &dictionary), "world, hello.");
}

#[test]
fn test_missing_dictionary_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = RestorerConfig::default().with_dictionary_path(dir.path().join("nope.txt"));

    assert!(matches!(config.build_restorer(), Err(DescrambleError::Io(_))));
}

#[test]
fn test_separators_are_preserved() {
    let dictionary = WordList::from_words(["a", "the"]);
    let text = "  teh--[x]  , 12_34\t\"eht\"?!\n";
    let restored = restore_sentence(text, &dictionary);

    let separators = |s: &str| -> Vec<String> {
        s.split(|c: char| c.is_alphabetic())
            .filter(|run| !run.is_empty())
            .map(str::to_string)
            .collect()
    };
    assert_eq!(separators(&restored), separators(text));
}

#[test]
fn test_empty_dictionary_identity() {
    let restorer = WordRestorer::new(WordList::new()).unwrap();
    for text in ["", "plain words", "Mixed CASE, punctuation; and 123!", "ünïcödé wörds"] {
        assert_eq!(restorer.restore_sentence(text).unwrap(), text);
        assert_eq!(restore_sentence(text, &WordList::new()), text);
    }
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let restorer = WordRestorer::new(WordList::from_words(["act", "cat", "tact"])).unwrap();
    let first = restorer.restore_sentence("tca atc tcat").unwrap();

    for _ in 0..10 {
        assert_eq!(restorer.restore_sentence("tca atc tcat").unwrap(), first);
    }
    assert_eq!(first, "act act act");
}

#[test]
fn test_tokenizer_round_trip_both_classes() {
    let text = "It's 9:41 -- snake_case, CamelCase & naïve café.\r\n";
    for class in [WordClass::Alphabetic, WordClass::RegexWord] {
        let tokenizer = PartitionTokenizer::with_word_class(class).unwrap();
        assert_eq!(join_tokens(tokenizer.tokenize(text).unwrap()), text);
    }
}

#[test]
fn test_anchored_rule_from_config() {
    let file = dictionary_file("he\nhello\ncat\n");
    let restorer = RestorerConfig::default()
        .with_dictionary_path(file.path())
        .with_match_rule(MatchRule::Anchored)
        .build_restorer()
        .unwrap();

    assert_eq!(restorer.restore_sentence("hlelo tac").unwrap(), "hello tac");
}

#[test]
fn test_blank_line_matches_first() {
    let file = dictionary_file("\nhello\n");
    let dictionary = WordList::load_from_file(file.path()).unwrap();

    assert_eq!(dictionary.len(), 2);
    assert_eq!(restore_sentence("hlelo!", &dictionary), "!");
}
