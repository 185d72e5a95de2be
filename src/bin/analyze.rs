//! analyze - lexical statistics for a file, URL or standard input.
//!
//! Usage:
//!   analyze -f FILE -w -v       Word and vowel counts of a file
//!   analyze -u URL -g -t        Top words of a downloaded Gutenberg text
//!   cat FILE | analyze -W word  Occurrences of a word on stdin
//!   analyze --help              Show help

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};

use tally::{cli, logging};
use tally_core::{AnalysisConfig, DEFAULT_FETCH_TIMEOUT, InputSource, Metric};

#[derive(Parser)]
#[command(
    name = "analyze",
    version,
    about = "Report lexical statistics for a file, URL or standard input",
    long_about = "Reads a file (-f), a URL (-u) or standard input and prints the requested \
                  statistics.\n\n\
                  Statistics are always printed in the order words, vowels, consonants, \
                  punctuation, digits, top words, bottom words, specific word, whatever \
                  order the flags are given in."
)]
struct Cli {
    /// Read the text from this file
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Download the text from this URL
    #[arg(short = 'u', long = "url", value_name = "URL")]
    url: Option<String>,

    /// Strip the Project Gutenberg header and footer
    #[arg(short = 'g', long = "gutenberg")]
    gutenberg: bool,

    /// Count words
    #[arg(short = 'w', long = "words")]
    words: bool,

    /// Count vowels
    #[arg(short = 'v', long = "vowels")]
    vowels: bool,

    /// Count consonants
    #[arg(short = 'c', long = "consonants")]
    consonants: bool,

    /// Count punctuation characters
    #[arg(short = 'p', long = "punctuation")]
    punctuation: bool,

    /// Count digits
    #[arg(short = 'd', long = "digits")]
    digits: bool,

    /// Show the 10 most frequent words
    #[arg(short = 't', long = "top")]
    top: bool,

    /// Show the 10 least frequent words
    #[arg(short = 'T', long = "bottom")]
    bottom: bool,

    /// Count whole-word, case-insensitive occurrences of WORD
    #[arg(short = 'W', long = "word", value_name = "WORD")]
    word: Option<String>,

    /// Timeout for URL downloads, in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    timeout: u64,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (repeatable)
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    fn metrics(&self) -> impl Iterator<Item = Metric> {
        [
            (self.words, Metric::WordCount),
            (self.vowels, Metric::VowelCount),
            (self.consonants, Metric::ConsonantCount),
            (self.punctuation, Metric::PunctuationCount),
            (self.digits, Metric::DigitCount),
            (self.top, Metric::TopWords),
            (self.bottom, Metric::BottomWords),
            (self.word.is_some(), Metric::SpecificWord),
        ]
        .into_iter()
        .filter_map(|(on, metric)| on.then_some(metric))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Cli = cli::parse_args();
    logging::init(args.verbose);

    let config = build_config(&args).unwrap_or_else(|e| cli::usage_error::<Cli>(e));

    let report = tally_text::run(&config).context("Could not analyze input")?;

    match args.format {
        OutputFormat::Text => print!("{}", report.render()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn build_config(args: &Cli) -> std::result::Result<AnalysisConfig, String> {
    let source = InputSource::from_flags(args.file.clone(), args.url.clone())?;

    let mut builder = AnalysisConfig::builder();
    builder
        .source(source)
        .gutenberg_trim(args.gutenberg)
        .fetch_timeout(Duration::from_secs(args.timeout));
    for metric in args.metrics() {
        builder.metric(metric);
    }
    if let Some(word) = &args.word {
        builder.specific_word(word.as_str());
    }
    builder.build().map_err(|e| e.to_string())
}
