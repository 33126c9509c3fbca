use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::counter::WordCounter;
use crate::types::TopEntry;

/// How ties on count are handled while selecting the top list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopListMode {
    /// Selection is keyed by count alone: each count value holds one word, and
    /// a word visited later overwrites an earlier word with the same count.
    #[default]
    CollapseByCount,
    /// Selection is keyed by `(count, word)`; every word keeps its own slot.
    /// Among equal counts the lexicographically smallest word is evicted first.
    PerWord,
}

/// Select at most `limit` entries from `counter`, ascending by count.
///
/// Walks the counter once with a bounded ordered structure, evicting the
/// smallest key whenever it grows past `limit`.
pub fn select_top(counter: &WordCounter, limit: usize, mode: TopListMode) -> Vec<TopEntry> {
    match mode {
        TopListMode::CollapseByCount => collapse_by_count(counter, limit),
        TopListMode::PerWord => per_word(counter, limit),
    }
}

fn collapse_by_count(counter: &WordCounter, limit: usize) -> Vec<TopEntry> {
    let mut top: BTreeMap<u64, &str> = BTreeMap::new();
    for (word, count) in counter.iter() {
        top.insert(count, word.as_str());
        if top.len() > limit {
            top.pop_first();
        }
        debug_assert!(top.len() <= limit);
    }

    top.into_iter()
        .map(|(count, word)| TopEntry::new(word, count))
        .collect()
}

fn per_word(counter: &WordCounter, limit: usize) -> Vec<TopEntry> {
    let mut top: BTreeSet<(u64, &str)> = BTreeSet::new();
    for (word, count) in counter.iter() {
        top.insert((count, word.as_str()));
        if top.len() > limit {
            top.pop_first();
        }
        debug_assert!(top.len() <= limit);
    }

    top.into_iter()
        .map(|(count, word)| TopEntry::new(word, count))
        .collect()
}
