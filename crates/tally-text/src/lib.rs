//! Text acquisition and lexical statistics for tally.
//!
//! The analyzer reads one input (file, URL or standard input), optionally
//! strips Project Gutenberg boilerplate, and computes the requested
//! statistics:
//!
//! - **Counts** - words, vowels, consonants, punctuation, digits
//! - **Rankings** - ten most and ten least frequent words
//! - **Search** - case-insensitive whole-word occurrences of one word
//!
//! Metrics are computed by a fixed, ordered pipeline, so output order never
//! depends on the order flags were given in.
//!
//! ```rust,no_run
//! use tally_core::{AnalysisConfig, InputSource, Metric};
//!
//! let config = AnalysisConfig::builder()
//!     .source(InputSource::File("book.txt".into()))
//!     .gutenberg_trim(true)
//!     .metric(Metric::WordCount)
//!     .metric(Metric::TopWords)
//!     .build()
//!     .unwrap();
//!
//! let report = tally_text::run(&config).unwrap();
//! print!("{}", report.render());
//! ```

mod counts;
mod frequency;
pub mod gutenberg;
mod report;
mod source;
mod word;

pub use counts::{CharClass, CharCounts, word_count};
pub use frequency::{RANKING_SIZE, RankedWord, WordFrequencies};
pub use report::{AnalysisReport, MetricEntry, MetricValue, analyze};
pub use source::{Document, Spool, acquire, fetch, read_file, read_stream};
pub use word::count_occurrences;

// Re-export core types
pub use tally_core::{AnalysisConfig, InputSource, Metric, SourceError};

/// Acquire the configured input and analyze it.
///
/// Any temporary download is removed before this returns.
pub fn run(config: &AnalysisConfig) -> Result<AnalysisReport, SourceError> {
    let document = acquire(config)?;
    Ok(analyze(document.text(), config))
}
