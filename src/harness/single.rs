/*!
 * Single-Thread Harness
 *
 * Sequential accesses on the calling thread with no contention. Measures
 * the fast-path cost of each strategy in isolation.
 */

use super::report::Reporter;
use crate::core::clock::Clock;
use crate::core::config::SINGLE_THREAD_ITERATIONS;
use std::hint::black_box;
use std::time::Duration;
use tracing::debug;

/// Result of a single-thread run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleReport {
    pub name: String,
    pub iterations: u64,
    pub elapsed: Duration,
}

/// Drives one access operation a fixed number of times
#[derive(Debug, Clone, Copy)]
pub struct SingleThreadHarness {
    iterations: u64,
    clock: Clock,
}

impl SingleThreadHarness {
    pub fn new(iterations: u64, clock: Clock) -> Self {
        Self { iterations, clock }
    }

    /// 10,000,000 accesses timed by thread CPU time
    pub fn reference() -> Self {
        Self::new(SINGLE_THREAD_ITERATIONS, Clock::ThreadCpu)
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Run `op` sequentially and report the elapsed time under `name`
    pub fn run<F, R>(&self, name: &str, reporter: &dyn Reporter, mut op: F) -> SingleReport
    where
        F: FnMut() -> R,
    {
        debug!(benchmark = name, iterations = self.iterations, "single-thread run starting");

        let watch = self.clock.start();
        for _ in 0..self.iterations {
            black_box(op());
        }
        let elapsed = watch.elapsed();

        reporter.record(name, elapsed);

        SingleReport {
            name: name.to_string(),
            iterations: self.iterations,
            elapsed,
        }
    }
}

impl Default for SingleThreadHarness {
    fn default() -> Self {
        Self::reference()
    }
}
