//! Search debouncing.
//!
//! [`Debouncer`] is a clock-driven state machine with no timers of its
//! own: the caller reports keystrokes and polls with the current instant,
//! so its timing is testable synchronously. A search dispatches only
//! after the input has been quiet for the full window, which means a
//! burst of typing costs one request. Whitespace-only input never
//! dispatches a search; clearing the field after a non-empty search
//! dispatches an empty query, which the server answers with the full
//! list. Each dispatch carries a generation number, and responses for
//! anything but the latest generation are stale and must be dropped so
//! an earlier slow response cannot overwrite a later result.
//!
//! [`drive`] is the async side: it owns a debouncer, turns a stream of
//! keystrokes into requests against a [`Client`], and forwards only the
//! responses that are still current.

use crate::{CliClientResult, Client};

use projects_core::Project;

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

/// Quiet window between the last keystroke and the dispatched search
pub const DEBOUNCE_QUIET: Duration = Duration::from_millis(500);

/// A search the debouncer has decided to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDispatch {
    /// Query text as of the last keystroke; empty means "re-list everything"
    pub query: String,
    /// Monotonic dispatch counter, checked via [`Debouncer::is_current`]
    pub generation: u64,
}

pub struct Debouncer {
    quiet: Duration,
    pending: Option<Pending>,
    generation: u64,
    /// A non-empty search result is currently displayed
    active_query: bool,
}

struct Pending {
    query: String,
    due: Instant,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_quiet(DEBOUNCE_QUIET)
    }

    pub fn with_quiet(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            generation: 0,
            active_query: false,
        }
    }

    /// Record an input change. Any pending search is replaced and the
    /// quiet window restarts from `now`.
    ///
    /// Blank input cancels the pending search; it schedules an empty
    /// re-list dispatch only when a non-empty search is in effect,
    /// otherwise there is nothing to undo and nothing dispatches.
    pub fn keystroke(&mut self, query: impl Into<String>, now: Instant) {
        let query = query.into();

        if query.trim().is_empty() {
            self.pending = self.active_query.then(|| Pending {
                query: String::new(),
                due: now + self.quiet,
            });
        } else {
            self.pending = Some(Pending {
                query,
                due: now + self.quiet,
            });
        }
    }

    /// When the caller should poll next, if anything is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Take the pending search if its quiet window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<SearchDispatch> {
        if self.pending.as_ref().is_none_or(|p| now < p.due) {
            return None;
        }

        let pending = self.pending.take()?;
        self.generation += 1;
        self.active_query = !pending.query.is_empty();

        Some(SearchDispatch {
            query: pending.query,
            generation: self.generation,
        })
    }

    /// Whether a response for `generation` is still the latest dispatch
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive a debouncer against a live server.
///
/// Consumes keystrokes until the sender side closes. Requests run
/// concurrently with further input, so a response may come back after a
/// newer search has already dispatched; such stale responses are
/// discarded rather than forwarded.
pub async fn drive(
    client: Client,
    mut debouncer: Debouncer,
    mut keystrokes: mpsc::Receiver<String>,
    results: mpsc::Sender<CliClientResult<Vec<Project>>>,
) {
    let (response_tx, mut response_rx) = mpsc::channel::<(u64, CliClientResult<Vec<Project>>)>(8);

    loop {
        let deadline = debouncer
            .next_deadline()
            .map(tokio::time::Instant::from_std);

        tokio::select! {
            key = keystrokes.recv() => match key {
                Some(text) => debouncer.keystroke(text, Instant::now()),
                None => break,
            },
            Some((generation, outcome)) = response_rx.recv() => {
                if debouncer.is_current(generation)
                    && results.send(outcome).await.is_err()
                {
                    break;
                }
            },
            _ = async {
                match deadline {
                    Some(due) => tokio::time::sleep_until(due).await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(dispatch) = debouncer.poll(Instant::now()) {
                    let client = client.clone();
                    let response_tx = response_tx.clone();
                    tokio::spawn(async move {
                        let outcome = client.search_projects(&dispatch.query).await;
                        let _ = response_tx.send((dispatch.generation, outcome)).await;
                    });
                }
            },
        }
    }
}
