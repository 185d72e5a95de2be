//! Character-class and word counts.

use serde::{Deserialize, Serialize};

/// Character class used by the counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Vowel,
    Consonant,
    Punctuation,
    Digit,
    Other,
}

impl CharClass {
    /// Classify a character.
    ///
    /// Vowels are `aeiou` in either case; consonants are the remaining ASCII
    /// letters except `y`/`Y`, which belongs to neither class. Punctuation
    /// is the ASCII punctuation set.
    pub fn of(c: char) -> Self {
        match c {
            'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U' => Self::Vowel,
            'y' | 'Y' => Self::Other,
            c if c.is_ascii_alphabetic() => Self::Consonant,
            c if c.is_ascii_digit() => Self::Digit,
            c if c.is_ascii_punctuation() => Self::Punctuation,
            _ => Self::Other,
        }
    }
}

/// Per-class character totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCounts {
    pub vowels: usize,
    pub consonants: usize,
    pub punctuation: usize,
    pub digits: usize,
}

impl CharCounts {
    /// Count every class in a single pass over the text.
    pub fn scan(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut counts, c| {
            match CharClass::of(c) {
                CharClass::Vowel => counts.vowels += 1,
                CharClass::Consonant => counts.consonants += 1,
                CharClass::Punctuation => counts.punctuation += 1,
                CharClass::Digit => counts.digits += 1,
                CharClass::Other => {}
            }
            counts
        })
    }
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
