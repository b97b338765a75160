/*!
 * Harness Configuration
 *
 * Fixed iteration and thread counts for the reference benchmark suite
 */

use super::clock::Clock;
use std::time::Duration;

/// Sequential accesses per single-thread benchmark
pub const SINGLE_THREAD_ITERATIONS: u64 = 10_000_000;

/// Accesses per worker in a parallel benchmark
pub const PARALLEL_ITERATIONS: u64 = 100_000;

/// Worker threads spawned by a parallel benchmark
pub const WORKER_THREADS: usize = 100;

/// How often a blocked controller re-checks the interrupt signal
pub const INTERRUPT_POLL: Duration = Duration::from_millis(5);

/// Parallel harness configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of worker threads
    pub threads: usize,
    /// Accesses per worker
    pub iterations: u64,
    /// Clock used for each worker's timed section
    pub clock: Clock,
    /// Poll interval for the interrupt signal while waiting on a latch
    pub interrupt_poll: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl HarnessConfig {
    /// The reference configuration: 100 threads x 100,000 accesses
    pub const fn reference() -> Self {
        Self {
            threads: WORKER_THREADS,
            iterations: PARALLEL_ITERATIONS,
            clock: Clock::ThreadCpu,
            interrupt_poll: INTERRUPT_POLL,
        }
    }

    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub const fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub const fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Total accesses across all workers
    pub const fn total_accesses(&self) -> u64 {
        self.threads as u64 * self.iterations
    }
}
