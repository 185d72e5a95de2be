//! Text analysis request types.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Timeout applied to URL fetches when none is configured.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the analyzed text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputSource {
    /// A local file.
    File(PathBuf),
    /// A document fetched with HTTP GET.
    Url(String),
    /// Standard input, read to end-of-stream.
    #[default]
    Stdin,
}

impl InputSource {
    /// Resolve the source from the optional file and URL flags.
    ///
    /// A file wins over a URL, which wins over stdin. Supplying both a file
    /// and a URL is rejected.
    pub fn from_flags(file: Option<PathBuf>, url: Option<String>) -> Result<Self, String> {
        match (file, url) {
            (Some(path), Some(url)) => Err(format!(
                "Both a file ({}) and a URL ({url}) were given; choose one",
                path.display()
            )),
            (Some(path), None) => Ok(Self::File(path)),
            (None, Some(url)) => Ok(Self::Url(url)),
            (None, None) => Ok(Self::Stdin),
        }
    }
}

/// A statistic the analyzer can report.
///
/// Declaration order is output order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Metric {
    #[strum(to_string = "Word count")]
    WordCount,
    #[strum(to_string = "Vowel count")]
    VowelCount,
    #[strum(to_string = "Consonant count")]
    ConsonantCount,
    #[strum(to_string = "Punctuation count")]
    PunctuationCount,
    #[strum(to_string = "Digit count")]
    DigitCount,
    #[strum(to_string = "Top 10 words")]
    TopWords,
    #[strum(to_string = "Bottom 10 words")]
    BottomWords,
    #[strum(to_string = "Specific word count")]
    SpecificWord,
}

/// Configuration for a text analysis run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct AnalysisConfig {
    /// Input to read.
    #[builder(default)]
    #[serde(default)]
    pub source: InputSource,

    /// Strip Gutenberg header and footer before counting.
    #[builder(default = "false")]
    #[serde(default)]
    pub gutenberg_trim: bool,

    /// Requested statistics.
    #[builder(default)]
    #[serde(default)]
    pub metrics: BTreeSet<Metric>,

    /// Word searched by [`Metric::SpecificWord`].
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    pub specific_word: Option<String>,

    /// Timeout for URL fetches.
    #[builder(default = "DEFAULT_FETCH_TIMEOUT")]
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: Duration,
}

fn default_fetch_timeout() -> Duration {
    DEFAULT_FETCH_TIMEOUT
}

impl AnalysisConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let wants_word = self
            .metrics
            .as_ref()
            .is_some_and(|m| m.contains(&Metric::SpecificWord));
        match self.specific_word.as_ref().and_then(|w| w.as_deref()) {
            Some(word) if word.trim().is_empty() => {
                Err("Specific word cannot be empty".to_string())
            }
            None if wants_word => Err("Specific word count requested without a word".to_string()),
            _ => Ok(()),
        }
    }

    /// Add one metric to the requested set.
    pub fn metric(&mut self, metric: Metric) -> &mut Self {
        self.metrics.get_or_insert_with(BTreeSet::new).insert(metric);
        self
    }
}

impl AnalysisConfig {
    /// Create a new analysis config builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Check whether a metric was requested.
    pub fn wants(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            source: InputSource::Stdin,
            gutenberg_trim: false,
            metrics: BTreeSet::new(),
            specific_word: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}
