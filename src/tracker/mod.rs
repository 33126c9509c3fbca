pub mod clock;
pub mod config;
pub mod tracker;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{TrackerConfig, TrackerError};
pub use tracker::{Acknowledge, FrequencyTracker};
pub use crate::counter::TopListMode;
