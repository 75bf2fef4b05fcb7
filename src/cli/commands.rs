//! Command implementations for the Descramble CLI.

use std::io;
use std::path::PathBuf;

use log::{debug, info};

use crate::analysis::tokenizer::{PartitionTokenizer, Tokenizer, WordClass};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::RestorerConfig;
use crate::error::{DescrambleError, Result};
use crate::spelling::MatchRule;

/// Execute a CLI command and print its output.
pub fn execute_command(args: DescrambleArgs) -> Result<()> {
    println!("{}", run_command(&args)?);
    Ok(())
}

/// Execute a CLI command and return the rendered output.
pub fn run_command(args: &DescrambleArgs) -> Result<String> {
    let base = load_base_config(args)?;

    match &args.command {
        Command::Restore(restore_args) => restore(restore_args.clone(), base, args),
        Command::Word(word_args) => restore_single_word(word_args.clone(), base, args),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args.clone(), base, args),
    }
}

/// A follow-up hint for errors the user can fix from the command line.
pub fn error_hint(error: &DescrambleError) -> Option<&'static str> {
    match error {
        DescrambleError::Config(_) => Some(
            "pass --dictionary <FILE>, set DESCRAMBLE_DICTIONARY, or set dictionary_path in --config",
        ),
        DescrambleError::Io(e) if e.kind() == io::ErrorKind::NotFound => {
            Some("check that the word list or config file path exists")
        }
        DescrambleError::Io(e) if e.kind() == io::ErrorKind::InvalidData => {
            Some("the word list must be UTF-8 text with one word per line")
        }
        _ => None,
    }
}

/// Read the configuration file if one was given, otherwise use defaults.
fn load_base_config(args: &DescrambleArgs) -> Result<RestorerConfig> {
    match &args.config {
        Some(path) => {
            info!("Using configuration file {}", path.display());
            RestorerConfig::from_file(path)
        }
        None => Ok(RestorerConfig::default()),
    }
}

/// Apply command line overrides on top of a base configuration.
pub fn merge_config(
    mut config: RestorerConfig,
    dictionary: Option<PathBuf>,
    rule: Option<MatchRule>,
    word_class: Option<WordClass>,
) -> RestorerConfig {
    if let Some(path) = dictionary {
        config = config.with_dictionary_path(path);
    }
    if let Some(rule) = rule {
        config = config.with_match_rule(rule);
    }
    if let Some(word_class) = word_class {
        config = config.with_word_class(word_class);
    }
    config
}

/// Restore a sentence.
fn restore(args: RestoreArgs, base: RestorerConfig, cli_args: &DescrambleArgs) -> Result<String> {
    let config = merge_config(base, args.dictionary, args.rule, args.word_class);
    let restorer = config.build_restorer()?;

    let text = args.text.unwrap_or_else(|| config.sample_text.clone());
    debug!(
        "Restoring {:?} with rule {:?}, word class {:?}, {} entries",
        text,
        restorer.rule(),
        restorer.tokenizer().word_class(),
        restorer.dictionary().len()
    );

    let report = restorer.restore_with_report(&text)?;
    render(&report, cli_args)
}

/// Restore a single word.
fn restore_single_word(
    args: WordArgs,
    base: RestorerConfig,
    cli_args: &DescrambleArgs,
) -> Result<String> {
    let config = merge_config(base, args.dictionary, args.rule, None);
    let restorer = config.build_restorer()?;

    let found = restorer.find_match(&args.word);
    let result = WordResult {
        restored: found.unwrap_or(args.word.as_str()).to_string(),
        matched: found.is_some(),
        word: args.word.clone(),
    };

    render(&result, cli_args)
}

/// Render the token partition of a sentence.
fn tokenize(args: TokenizeArgs, base: RestorerConfig, cli_args: &DescrambleArgs) -> Result<String> {
    let word_class = args.word_class.unwrap_or(base.word_class);
    let tokenizer = PartitionTokenizer::with_word_class(word_class)?;

    let result = TokenList {
        tokenizer: tokenizer.name().to_string(),
        word_class,
        tokens: tokenizer.tokenize(&args.text)?.collect(),
    };

    render(&result, cli_args)
}
