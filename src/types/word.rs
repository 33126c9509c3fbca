use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-empty word token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Returns `None` for the empty token, which the tracker ignores.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Word(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One inbound occurrence event.
/// The `word` field may be absent; such an event is acknowledged and otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceEvent {
    #[serde(default)]
    pub word: Option<String>,
}

impl OccurrenceEvent {
    pub fn word(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
        }
    }

    pub fn empty() -> Self {
        Self { word: None }
    }
}
