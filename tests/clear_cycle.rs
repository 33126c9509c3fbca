use word_tally::{FrequencyTracker, ManualClock, TrackerConfig};

fn tracker(report: u64, clear: u64) -> (FrequencyTracker<Vec<String>, ManualClock>, ManualClock) {
    let clock = ManualClock::at_secs(0);
    let tracker =
        FrequencyTracker::with_clock(TrackerConfig::new(report, clear, 5), Vec::new(), clock.clone()).unwrap();
    (tracker, clock)
}

#[test]
fn clear_follows_report_once_clear_interval_elapsed() {
    let (mut tracker, clock) = tracker(10, 10);

    tracker.record_occurrence(Some("a"), || {});
    tracker.record_occurrence(Some("b"), || {});
    clock.set_secs(11);
    let report = tracker.record_occurrence(Some("a"), || {}).report.unwrap();

    assert!(report.cleared);
    assert_eq!(report.distinct_words, 2);
    assert_eq!(tracker.distinct_words(), 0);
    assert_eq!(tracker.last_clear_millis(), 11_000);

    tracker.record_occurrence(Some("a"), || {});
    assert_eq!(tracker.count_of("a"), Some(1));
    assert_eq!(tracker.count_of("b"), None);
    assert_eq!(tracker.distinct_words(), 1);
}

#[test]
fn report_without_clear_keeps_counts() {
    let (mut tracker, clock) = tracker(10, 30);

    tracker.record_occurrence(Some("a"), || {});
    clock.set_secs(11);
    let report = tracker.record_occurrence(Some("a"), || {}).report.unwrap();

    assert!(!report.cleared);
    assert_eq!(tracker.count_of("a"), Some(2));
    assert_eq!(tracker.last_clear_millis(), 0);
}

#[test]
fn clear_waits_for_next_report_even_when_overdue() {
    let (mut tracker, clock) = tracker(10, 15);

    clock.set_secs(11);
    let first = tracker.record_occurrence(Some("a"), || {}).report.unwrap();
    assert!(!first.cleared);

    // clear interval has passed, report interval has not
    clock.set_secs(18);
    let outcome = tracker.record_occurrence(Some("a"), || {});
    assert!(outcome.report.is_none());
    assert_eq!(tracker.count_of("a"), Some(2));

    clock.set_secs(22);
    let second = tracker.record_occurrence(Some("a"), || {}).report.unwrap();
    assert!(second.cleared);
    assert_eq!(tracker.distinct_words(), 0);
    assert_eq!(tracker.last_clear_millis(), 22_000);
}

#[test]
fn clear_compares_milliseconds() {
    let (mut tracker, clock) = tracker(0, 10);

    clock.set_millis(10_000);
    let at_limit = tracker.record_occurrence(Some("a"), || {}).report.unwrap();
    assert!(!at_limit.cleared);

    clock.set_millis(11_001);
    let past_limit = tracker.record_occurrence(Some("a"), || {}).report.unwrap();
    assert!(past_limit.cleared);
}

#[test]
fn counts_match_recordings_since_last_clear() {
    let (mut tracker, clock) = tracker(10, 10);
    let words = ["red", "green", "red", "blue", "red", "green"];

    for w in words {
        tracker.record_occurrence(Some(w), || {});
    }
    assert_eq!(tracker.count_of("red"), Some(3));
    assert_eq!(tracker.count_of("green"), Some(2));
    assert_eq!(tracker.count_of("blue"), Some(1));
    assert_eq!(tracker.counter().total(), words.len() as u64);

    clock.set_secs(11);
    tracker.record_occurrence(Some("red"), || {});
    assert!(tracker.counter().is_empty());

    for w in words {
        tracker.record_occurrence(Some(w), || {});
    }
    assert_eq!(tracker.count_of("red"), Some(3));
    assert!(tracker.counter().iter().all(|(_, c)| c >= 1));
}
