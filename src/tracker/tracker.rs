// Single owner, non-reentrant: every mutation happens inside one
// `record_occurrence` call. Hosts with several producers must serialize
// calls themselves.

use chrono::Utc;
use tracing::{debug, trace, warn};

use crate::counter::{select_top, WordCounter};
use crate::sink::ReportSink;
use crate::tracker::clock::{Clock, MonotonicClock};
use crate::tracker::config::{TrackerConfig, TrackerError};
use crate::types::{OccurrenceEvent, RecordOutcome, Report, Word};

/// Receipt signal sent back to the event source, exactly once per call.
pub trait Acknowledge {
    fn ack(&mut self);
}

impl<F: FnMut()> Acknowledge for F {
    fn ack(&mut self) {
        self()
    }
}

pub struct FrequencyTracker<S, C = MonotonicClock> {
    config: TrackerConfig,
    counter: WordCounter,
    last_report_ms: u64,
    last_clear_ms: u64,
    sink: S,
    clock: C,
}

impl<S: ReportSink> FrequencyTracker<S, MonotonicClock> {
    pub fn new(config: TrackerConfig, sink: S) -> Result<Self, TrackerError> {
        Self::with_clock(config, sink, MonotonicClock::new())
    }
}

impl<S, C> FrequencyTracker<S, C>
where
    S: ReportSink,
    C: Clock,
{
    /// Both timers start at the clock's current time.
    pub fn with_clock(config: TrackerConfig, sink: S, clock: C) -> Result<Self, TrackerError> {
        config.validate()?;
        let now = clock.now_millis();
        Ok(Self {
            config,
            counter: WordCounter::new(),
            last_report_ms: now,
            last_clear_ms: now,
            sink,
            clock,
        })
    }

    /// Count one occurrence of `word` and run a report cycle if one is due.
    ///
    /// An absent or empty word leaves all state untouched. `ack` fires exactly
    /// once either way, after any mutation has completed.
    pub fn record_occurrence<A: Acknowledge>(&mut self, word: Option<&str>, mut ack: A) -> RecordOutcome {
        let outcome = match word.and_then(Word::parse) {
            Some(word) => self.count(word),
            None => {
                trace!("event without a word, acknowledging only");
                RecordOutcome::ignored()
            }
        };
        ack.ack();
        outcome
    }

    pub fn record_event<A: Acknowledge>(&mut self, event: &OccurrenceEvent, ack: A) -> RecordOutcome {
        self.record_occurrence(event.word.as_deref(), ack)
    }

    fn count(&mut self, word: Word) -> RecordOutcome {
        self.counter.increment(word);

        let now = self.clock.now_millis();
        let elapsed_secs = now.saturating_sub(self.last_report_ms) / 1000;
        let report = if elapsed_secs > self.config.report_interval_secs {
            let report = self.run_report_cycle(now);
            self.last_report_ms = now;
            Some(report)
        } else {
            None
        };

        RecordOutcome {
            counted: true,
            report,
        }
    }

    fn run_report_cycle(&mut self, now: u64) -> Report {
        let mut report = Report {
            generated_at: Utc::now(),
            distinct_words: self.counter.len(),
            entries: select_top(
                &self.counter,
                self.config.top_list_size,
                self.config.top_list_mode,
            ),
            cleared: false,
        };
        debug!(
            distinct_words = report.distinct_words,
            entries = report.entries.len(),
            "publishing top list"
        );
        self.publish(&report);

        let clear_after_ms = self.config.clear_interval_secs.saturating_mul(1000);
        if now.saturating_sub(self.last_clear_ms) > clear_after_ms {
            debug!(distinct_words = self.counter.len(), "clearing word counts");
            self.counter.clear();
            self.last_clear_ms = now;
            report.cleared = true;
        }

        report
    }

    // Sink failures are logged and never undo counter or timer updates.
    fn publish(&mut self, report: &Report) {
        for line in report.lines(self.config.blank_separator) {
            if let Err(err) = self.sink.emit_line(&line) {
                warn!(error = %err, line = %line, "report sink rejected line");
            }
        }
        if let Err(err) = self.sink.flush() {
            warn!(error = %err, "report sink flush failed");
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn counter(&self) -> &WordCounter {
        &self.counter
    }

    /// Occurrences of `word` since the last clear, `None` if unseen.
    pub fn count_of(&self, word: &str) -> Option<u64> {
        self.counter.get(word)
    }

    pub fn distinct_words(&self) -> usize {
        self.counter.len()
    }

    pub fn last_report_millis(&self) -> u64 {
        self.last_report_ms
    }

    pub fn last_clear_millis(&self) -> u64 {
        self.last_clear_ms
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
