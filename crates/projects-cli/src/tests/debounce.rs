use crate::debounce::{DEBOUNCE_QUIET, Debouncer};

use std::time::{Duration, Instant};

#[test]
fn test_nothing_pending_polls_none() {
    let mut debouncer = Debouncer::new();
    assert_eq!(debouncer.poll(Instant::now()), None);
    assert_eq!(debouncer.next_deadline(), None);
}

#[test]
fn test_no_dispatch_before_quiet_window_elapses() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new();

    debouncer.keystroke("rust", start);

    assert_eq!(debouncer.poll(start), None);
    assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
}

#[test]
fn test_dispatch_after_quiet_window() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new();

    debouncer.keystroke("rust", start);

    let dispatch = debouncer.poll(start + DEBOUNCE_QUIET).unwrap();
    assert_eq!(dispatch.query, "rust");

    // Consumed: nothing further until the next keystroke
    assert_eq!(debouncer.poll(start + DEBOUNCE_QUIET), None);
}

#[test]
fn test_keystroke_restarts_the_window() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new();

    debouncer.keystroke("ru", start);
    debouncer.keystroke("rust", start + Duration::from_millis(300));

    // The first window's deadline passes without a dispatch
    assert_eq!(debouncer.poll(start + DEBOUNCE_QUIET), None);

    // Only the latest query ever dispatches
    let dispatch = debouncer
        .poll(start + Duration::from_millis(300) + DEBOUNCE_QUIET)
        .unwrap();
    assert_eq!(dispatch.query, "rust");
}

#[test]
fn test_blank_input_without_prior_search_dispatches_nothing() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new();

    debouncer.keystroke("", start);
    debouncer.keystroke("   ", start + Duration::from_millis(100));

    assert_eq!(debouncer.next_deadline(), None);
    assert_eq!(debouncer.poll(start + Duration::from_secs(10)), None);
}

#[test]
fn test_clearing_cancels_a_pending_search() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new();

    // Typed then erased before the window elapsed; no search ever ran,
    // so there is nothing to undo
    debouncer.keystroke("rust", start);
    debouncer.keystroke("", start + Duration::from_millis(100));

    assert_eq!(debouncer.poll(start + Duration::from_secs(10)), None);
}

#[test]
fn test_cleared_input_dispatches_empty_query() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new();

    debouncer.keystroke("rust", start);
    let _ = debouncer.poll(start + DEBOUNCE_QUIET).unwrap();

    debouncer.keystroke("", start + Duration::from_secs(2));
    let dispatch = debouncer
        .poll(start + Duration::from_secs(2) + DEBOUNCE_QUIET)
        .unwrap();

    assert_eq!(dispatch.query, "");
}

#[test]
fn test_stale_generations_are_rejected() {
    let start = Instant::now();
    let mut debouncer = Debouncer::with_quiet(Duration::from_millis(10));

    debouncer.keystroke("first", start);
    let first = debouncer.poll(start + Duration::from_millis(10)).unwrap();
    assert!(debouncer.is_current(first.generation));

    debouncer.keystroke("second", start + Duration::from_millis(20));
    let second = debouncer.poll(start + Duration::from_millis(30)).unwrap();

    // The earlier dispatch's response must now be dropped
    assert!(!debouncer.is_current(first.generation));
    assert!(debouncer.is_current(second.generation));
}

#[test]
fn test_next_deadline_tracks_the_pending_search() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new();

    debouncer.keystroke("a", start);
    assert_eq!(debouncer.next_deadline(), Some(start + DEBOUNCE_QUIET));

    let _ = debouncer.poll(start + DEBOUNCE_QUIET);
    assert_eq!(debouncer.next_deadline(), None);
}
