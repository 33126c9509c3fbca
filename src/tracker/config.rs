use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::counter::TopListMode;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

// Immutable for the lifetime of a tracker.
// Serializable, comparable, explicit defaults for the optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// A report is produced once more than this many whole seconds have passed since the last one.
    pub report_interval_secs: u64,
    /// Counts are cleared at a report once more than this many seconds have passed since the last clear.
    pub clear_interval_secs: u64,
    /// Maximum number of entries in a report. Must be at least 1.
    pub top_list_size: usize,
    #[serde(default)]
    pub top_list_mode: TopListMode,
    #[serde(default = "default_blank_separator")]
    pub blank_separator: bool,
}

fn default_blank_separator() -> bool {
    true
}

impl TrackerConfig {
    pub fn new(report_interval_secs: u64, clear_interval_secs: u64, top_list_size: usize) -> Self {
        Self {
            report_interval_secs,
            clear_interval_secs,
            top_list_size,
            top_list_mode: TopListMode::default(),
            blank_separator: default_blank_separator(),
        }
    }

    pub fn with_top_list_mode(mut self, mode: TopListMode) -> Self {
        self.top_list_mode = mode;
        self
    }

    pub fn with_blank_separator(mut self, enabled: bool) -> Self {
        self.blank_separator = enabled;
        self
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, TrackerError> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.top_list_size < 1 {
            return Err(TrackerError::InvalidConfiguration(format!(
                "top_list_size must be at least 1, got {}",
                self.top_list_size
            )));
        }
        Ok(())
    }
}
