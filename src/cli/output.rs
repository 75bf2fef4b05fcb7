//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::WordClass;
use crate::cli::args::{DescrambleArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::RestorationReport;

/// Label printed before a restored sentence.
pub const RESTORED_LABEL: &str = "Restored sentence:";

/// Result structure for single word restoration.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordResult {
    pub word: String,
    pub restored: String,
    pub matched: bool,
}

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenList {
    pub tokenizer: String,
    pub word_class: WordClass,
    pub tokens: Vec<Token>,
}

/// Results that have a human-readable rendering.
pub trait HumanOutput {
    /// Render for a terminal at the given verbosity.
    fn render_human(&self, verbosity: u8) -> String;
}

impl HumanOutput for RestorationReport {
    fn render_human(&self, verbosity: u8) -> String {
        let mut out = format!("{RESTORED_LABEL} {}", self.restored);

        if verbosity > 1 {
            for word in &self.words {
                let note = if word.matched { "" } else { " (no match)" };
                out.push_str(&format!(
                    "\n  [{}] {} -> {}{}",
                    word.position, word.original, word.restored, note
                ));
            }
            out.push_str(&format!(
                "\n{} restored, {} unmatched",
                self.restored_count(),
                self.unmatched_count()
            ));
        }

        out
    }
}

impl HumanOutput for WordResult {
    fn render_human(&self, _verbosity: u8) -> String {
        if self.matched {
            format!("{} -> {}", self.word, self.restored)
        } else {
            format!("{} -> {} (no match)", self.word, self.restored)
        }
    }
}

impl HumanOutput for TokenList {
    fn render_human(&self, _verbosity: u8) -> String {
        self.tokens
            .iter()
            .map(|t| {
                format!(
                    "{}\t{}\t{}..{}\t{:?}",
                    t.position, t.token_type, t.start_offset, t.end_offset, t.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a result in the requested format.
pub fn render<T: Serialize + HumanOutput>(result: &T, args: &DescrambleArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.render_human(args.verbosity())),
        OutputFormat::Json if args.pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::analysis::token::TokenType;
    use crate::spelling::WordRestoration;

    fn report() -> RestorationReport {
        RestorationReport {
            original: "tac xyz".to_string(),
            restored: "cat xyz".to_string(),
            words: vec![
                WordRestoration {
                    original: "tac".to_string(),
                    restored: "cat".to_string(),
                    position: 0,
                    matched: true,
                },
                WordRestoration {
                    original: "xyz".to_string(),
                    restored: "xyz".to_string(),
                    position: 2,
                    matched: false,
                },
            ],
        }
    }

    #[test]
    fn test_human_report() {
        let args = DescrambleArgs::try_parse_from(["descramble", "tokenize", "x"]).unwrap();
        assert_eq!(render(&report(), &args).unwrap(), "Restored sentence: cat xyz");
    }

    #[test]
    fn test_verbose_report() {
        let args = DescrambleArgs::try_parse_from(["descramble", "-vv", "tokenize", "x"]).unwrap();
        let text = render(&report(), &args).unwrap();

        assert!(text.starts_with("Restored sentence: cat xyz\n"));
        assert!(text.contains("[2] xyz -> xyz (no match)"));
        assert!(text.ends_with("1 restored, 1 unmatched"));
    }

    #[test]
    fn test_json_report() {
        let args =
            DescrambleArgs::try_parse_from(["descramble", "-f", "json", "tokenize", "x"]).unwrap();
        let text = render(&report(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["restored"], "cat xyz");
        assert_eq!(value["words"][0]["matched"], true);
    }

    #[test]
    fn test_word_result() {
        let result = WordResult {
            word: "abc".to_string(),
            restored: "abc".to_string(),
            matched: false,
        };
        assert_eq!(result.render_human(1), "abc -> abc (no match)");
    }

    #[test]
    fn test_token_list_human() {
        let list = TokenList {
            tokenizer: "partition".to_string(),
            word_class: WordClass::Alphabetic,
            tokens: vec![
                Token::with_offsets("hi", 0, 0, 2, TokenType::Word),
                Token::with_offsets("!", 1, 2, 3, TokenType::Separator),
            ],
        };
        assert_eq!(
            list.render_human(1),
            "0\tword\t0..2\t\"hi\"\n1\tseparator\t2..3\t\"!\""
        );
    }
}
