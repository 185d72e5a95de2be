//! Ordered metric pipeline and report rendering.

use std::cell::OnceCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use tally_core::{AnalysisConfig, Metric};

use crate::counts::{CharCounts, word_count};
use crate::frequency::{RANKING_SIZE, RankedWord, WordFrequencies};
use crate::gutenberg;
use crate::word::count_occurrences;

/// Value computed for one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricValue {
    Count(usize),
    Ranking(Vec<RankedWord>),
    Occurrences { word: String, count: usize },
}

/// One line group of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricEntry {
    pub metric: Metric,
    pub value: MetricValue,
}

/// Results of an analysis, in output order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Whether the Gutenberg trim was applied.
    pub trimmed: bool,
    /// Computed metrics in output order.
    pub entries: Vec<MetricEntry>,
}

impl AnalysisReport {
    /// Look up the value computed for a metric.
    pub fn get(&self, metric: Metric) -> Option<&MetricValue> {
        self.entries
            .iter()
            .find(|e| e.metric == metric)
            .map(|e| &e.value)
    }

    /// Shorthand for count-valued metrics.
    pub fn count(&self, metric: Metric) -> Option<usize> {
        match self.get(metric)? {
            MetricValue::Count(n) | MetricValue::Occurrences { count: n, .. } => Some(*n),
            MetricValue::Ranking(_) => None,
        }
    }

    /// Render the report as the plain-text lines printed by the CLI.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match &entry.value {
                MetricValue::Count(n) => writeln!(f, "{}: {n}", entry.metric)?,
                MetricValue::Ranking(words) => {
                    writeln!(f, "{}:", entry.metric)?;
                    for w in words {
                        writeln!(f, "{:>7} {}", w.count, w.word)?;
                    }
                }
                MetricValue::Occurrences { word, count } => {
                    writeln!(f, "Occurrences of '{word}': {count}")?
                }
            }
        }
        Ok(())
    }
}

/// Text under analysis, with the shared scans computed on first use.
struct Corpus<'a> {
    text: &'a str,
    chars: OnceCell<CharCounts>,
    frequencies: OnceCell<WordFrequencies<'a>>,
}

impl<'a> Corpus<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: OnceCell::new(),
            frequencies: OnceCell::new(),
        }
    }

    fn chars(&self) -> &CharCounts {
        self.chars.get_or_init(|| CharCounts::scan(self.text))
    }

    fn frequencies(&self) -> &WordFrequencies<'a> {
        self.frequencies
            .get_or_init(|| WordFrequencies::tally(self.text))
    }
}

type Compute = fn(&Corpus<'_>, &AnalysisConfig) -> MetricValue;

/// Every metric paired with the function computing it, in output order.
const PIPELINE: [(Metric, Compute); 8] = [
    (Metric::WordCount, words),
    (Metric::VowelCount, vowels),
    (Metric::ConsonantCount, consonants),
    (Metric::PunctuationCount, punctuation),
    (Metric::DigitCount, digits),
    (Metric::TopWords, top_words),
    (Metric::BottomWords, bottom_words),
    (Metric::SpecificWord, specific_word),
];

fn words(corpus: &Corpus<'_>, _: &AnalysisConfig) -> MetricValue {
    MetricValue::Count(word_count(corpus.text))
}

fn vowels(corpus: &Corpus<'_>, _: &AnalysisConfig) -> MetricValue {
    MetricValue::Count(corpus.chars().vowels)
}

fn consonants(corpus: &Corpus<'_>, _: &AnalysisConfig) -> MetricValue {
    MetricValue::Count(corpus.chars().consonants)
}

fn punctuation(corpus: &Corpus<'_>, _: &AnalysisConfig) -> MetricValue {
    MetricValue::Count(corpus.chars().punctuation)
}

fn digits(corpus: &Corpus<'_>, _: &AnalysisConfig) -> MetricValue {
    MetricValue::Count(corpus.chars().digits)
}

fn top_words(corpus: &Corpus<'_>, _: &AnalysisConfig) -> MetricValue {
    MetricValue::Ranking(corpus.frequencies().top(RANKING_SIZE))
}

fn bottom_words(corpus: &Corpus<'_>, _: &AnalysisConfig) -> MetricValue {
    MetricValue::Ranking(corpus.frequencies().bottom(RANKING_SIZE))
}

fn specific_word(corpus: &Corpus<'_>, config: &AnalysisConfig) -> MetricValue {
    let word = config.specific_word.clone().unwrap_or_default();
    let count = count_occurrences(corpus.text, &word);
    MetricValue::Occurrences { word, count }
}

/// Compute the requested metrics over `text`, applying the Gutenberg trim
/// first when configured.
pub fn analyze(text: &str, config: &AnalysisConfig) -> AnalysisReport {
    let body = if config.gutenberg_trim {
        gutenberg::trim(text)
    } else {
        text
    };
    tracing::debug!(
        bytes = body.len(),
        trimmed = config.gutenberg_trim,
        "analyzing text"
    );

    let corpus = Corpus::new(body);
    let entries = PIPELINE
        .iter()
        .filter(|(metric, _)| config.wants(*metric))
        .map(|(metric, compute)| MetricEntry {
            metric: *metric,
            value: compute(&corpus, config),
        })
        .collect();

    AnalysisReport {
        trimmed: config.gutenberg_trim,
        entries,
    }
}
