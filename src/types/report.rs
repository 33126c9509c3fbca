use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the top list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopEntry {
    pub word: String,
    pub count: u64,
}

impl TopEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// The outcome of one report cycle.
///
/// `entries` are ascending by count. `distinct_words` is the counter size at
/// trigger time, before any clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>, // informational only
    pub distinct_words: usize,
    pub entries: Vec<TopEntry>,
    pub cleared: bool,
}

impl Report {
    pub fn summary_line(&self) -> String {
        format!("Word count: {}", self.distinct_words)
    }

    pub fn entry_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(|e| format!("Top List - {}|{}", e.word, e.count))
    }

    /// Text lines as emitted to a sink, optionally preceded by a blank separator.
    pub fn lines(&self, blank_separator: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        if blank_separator {
            lines.push(String::new());
        }
        lines.push(self.summary_line());
        lines.extend(self.entry_lines());
        lines
    }
}

/// What a single `record_occurrence` call did.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    /// False when the event carried no usable word.
    pub counted: bool,
    pub report: Option<Report>,
}

impl RecordOutcome {
    pub(crate) fn ignored() -> Self {
        Self {
            counted: false,
            report: None,
        }
    }
}
