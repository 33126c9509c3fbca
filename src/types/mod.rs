pub mod word;
pub mod report;

pub use word::{OccurrenceEvent, Word};
pub use report::{RecordOutcome, Report, TopEntry};
