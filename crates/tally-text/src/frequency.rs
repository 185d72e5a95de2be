//! Word frequency ranking.
//!
//! Tokens are maximal runs of alphanumeric characters, kept case-sensitive.
//! Counts live in an insertion-ordered map, and rankings use a stable sort,
//! so words with equal counts keep their first-occurrence order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of entries reported by the top/bottom rankings.
pub const RANKING_SIZE: usize = 10;

/// A word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    pub count: usize,
    pub word: String,
}

/// Occurrence counts of every distinct token in a text.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies<'a> {
    counts: IndexMap<&'a str, usize>,
}

impl<'a> WordFrequencies<'a> {
    /// Tokenize on non-alphanumeric boundaries and count each token.
    pub fn tally(text: &'a str) -> Self {
        let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            *counts.entry(token).or_default() += 1;
        }
        Self { counts }
    }

    /// The `n` most frequent words, highest count first.
    pub fn top(&self, n: usize) -> Vec<RankedWord> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(n);
        entries
    }

    /// The `n` least frequent words, lowest count first.
    pub fn bottom(&self, n: usize) -> Vec<RankedWord> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| a.count.cmp(&b.count));
        entries.truncate(n);
        entries
    }

    fn entries(&self) -> Vec<RankedWord> {
        self.counts
            .iter()
            .map(|(word, count)| RankedWord {
                count: *count,
                word: (*word).to_string(),
            })
            .collect()
    }
}
