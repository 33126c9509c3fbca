//! Streaming word frequency tracker.
//!
//! `word-tally` counts word occurrences as they arrive, periodically publishes
//! a bounded top-N list to a [`sink::ReportSink`], and periodically resets the
//! running counts. Timers are checked inline on every recorded event; there is
//! no background thread.

pub mod counter;
pub mod sink;
pub mod tracker;
pub mod types;

pub use counter::TopListMode;
pub use sink::{ReportSink, TracingSink, WriterSink};
pub use tracker::{Acknowledge, Clock, FrequencyTracker, ManualClock, MonotonicClock, TrackerConfig, TrackerError};
pub use types::{OccurrenceEvent, RecordOutcome, Report, TopEntry, Word};
