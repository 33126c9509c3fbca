use std::collections::HashMap;

use crate::types::Word;

/// Running occurrence counts keyed by word.
///
/// Only two mutations exist: `increment` and a full `clear`. A word is
/// inserted at 1, so every stored count is at least 1.
#[derive(Debug, Default)]
pub struct WordCounter {
    counts: HashMap<Word, u64>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Returns the updated count.
    pub fn increment(&mut self, word: Word) -> u64 {
        let count = self.counts.entry(word).or_insert(0);
        *count += 1;
        *count
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words tracked.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&Word, u64)> {
        self.counts.iter().map(|(w, &c)| (w, c))
    }
}
