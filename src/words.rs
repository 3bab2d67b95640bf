//! Word tokenization and frequency maps.

use std::collections::HashMap;

use serde::Serialize;

/// Word -> occurrence count, remembering the order words were first seen.
///
/// The order is what ranking ties fall back on, so two runs over the same
/// lyrics always rank equally-frequent words the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyMap {
    by_word: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl WordFrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `word`. A zero count adds nothing.
    pub fn add(&mut self, word: &str, count: u64) {
        if count == 0 {
            return;
        }
        if let Some(&idx) = self.by_word.get(word) {
            self.entries[idx].1 += count;
        } else {
            self.by_word.insert(word.to_string(), self.entries.len());
            self.entries.push((word.to_string(), count));
        }
    }

    /// Occurrences of `word`, zero when absent.
    pub fn get(&self, word: &str) -> u64 {
        self.by_word.get(word).map_or(0, |&idx| self.entries[idx].1)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences over all words.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// `(word, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, n)| (w.as_str(), *n))
    }

    /// Add every count of `other` into this map.
    pub fn absorb(&mut self, other: &Self) {
        for (word, count) in other.iter() {
            self.add(word, count);
        }
    }
}

impl<'a> FromIterator<(&'a str, u64)> for WordFrequencyMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (word, count) in iter {
            map.add(word, count);
        }
        map
    }
}

impl Serialize for WordFrequencyMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Normalize one whitespace-delimited token: boundary punctuation off, lowercased.
///
/// Inner punctuation survives, so "don't" and "rock-n-roll" stay whole.
pub fn normalize_token(token: &str) -> String {
    token.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase()
}

/// Count the words of `text`.
///
/// Tokens made only of punctuation (a lone "-" between lines) normalize to
/// nothing and are not counted.
pub fn count_words(text: &str) -> WordFrequencyMap {
    let mut counts = WordFrequencyMap::new();
    for word in text.split_whitespace().map(normalize_token) {
        if !word.is_empty() {
            counts.add(&word, 1);
        }
    }
    counts
}
