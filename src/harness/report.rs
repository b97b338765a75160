/*!
 * Result Reporting
 *
 * The boundary where a harness hands off `(name, elapsed)`. What happens to
 * the figure afterwards (logging, collection by a test runner) belongs to
 * the reporter, not the harness.
 */

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Receives one timing result per benchmark invocation
pub trait Reporter: Send + Sync {
    fn record(&self, name: &str, elapsed: Duration);
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn record(&self, name: &str, elapsed: Duration) {
        (**self).record(name, elapsed)
    }
}

/// A recorded timing result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub elapsed: Duration,
}

impl Record {
    /// Whole milliseconds, the resolution results are published at
    pub fn elapsed_ms(&self) -> u64 {
        saturate(self.elapsed.as_millis())
    }
}

/// Clamp a `Duration` unit count into a `u64` field
fn saturate(units: u128) -> u64 {
    u64::try_from(units).unwrap_or(u64::MAX)
}

/// Emits each result as a structured `tracing` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn record(&self, name: &str, elapsed: Duration) {
        let elapsed_ms = saturate(elapsed.as_millis());
        info!(
            benchmark = name,
            elapsed_ms,
            elapsed_us = saturate(elapsed.as_micros()),
            "{}: finished in {} ms",
            name,
            elapsed_ms
        );
    }
}

/// Keeps every result in memory, in arrival order
#[derive(Debug, Default)]
pub struct CollectingReporter {
    records: Mutex<Vec<Record>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Most recent record with the given name
    pub fn find(&self, name: &str) -> Option<Record> {
        self.records
            .lock()
            .iter()
            .rev()
            .find(|r| r.name == name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Reporter for CollectingReporter {
    fn record(&self, name: &str, elapsed: Duration) {
        self.records.lock().push(Record {
            name: name.to_string(),
            elapsed,
        });
    }
}
