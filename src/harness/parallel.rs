/*!
 * Parallel Harness
 *
 * Fixed fan-out of OS threads hammering one access operation.
 *
 * # Two-Phase Start
 *
 * Thread creation and scheduling make workers come alive at different
 * times. Each worker counts down a ready latch and parks on a start gate;
 * the controller opens the gate only after every worker is ready, so all
 * timed sections begin within one wake-up of each other.
 *
 * # Accounting
 *
 * Workers time themselves and add the result to one atomic accumulator.
 * A lock here would serialize 100 threads on bookkeeping and pollute the
 * measurement.
 */

use super::report::Reporter;
use crate::core::clock::Clock;
use crate::core::config::HarnessConfig;
use crate::core::errors::{HarnessError, HarnessResult, WaitPhase};
use crate::core::sync::{CountDownLatch, InterruptSignal, Passage, StartGate};
use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, trace};

/// Timing captured by one worker
#[derive(Debug, Clone, Copy)]
pub struct WorkerSample {
    pub index: usize,
    /// Wall-clock instant the timed section began
    pub started: Instant,
    /// Elapsed time as measured by the configured clock
    pub elapsed: Duration,
}

/// Result of a parallel run
#[derive(Debug, Clone)]
pub struct ParallelReport {
    pub name: String,
    pub threads: usize,
    pub iterations: u64,
    /// Accumulated elapsed time across all workers
    pub total: Duration,
    /// Instant taken immediately before the start gate opened
    pub released_at: Instant,
    pub samples: Vec<WorkerSample>,
}

impl ParallelReport {
    /// Sum of the individually measured worker times
    pub fn sample_sum(&self) -> Duration {
        self.samples.iter().map(|s| s.elapsed).sum()
    }

    /// Earliest timed-section start across all workers
    pub fn earliest_start(&self) -> Option<Instant> {
        self.samples.iter().map(|s| s.started).min()
    }
}

/// Shared per-run state
struct RunState {
    ready: CountDownLatch,
    done: CountDownLatch,
    gate: StartGate,
    total_nanos: AtomicU64,
    /// Raised when one of this run's workers unwinds
    worker_failed: InterruptSignal,
}

impl RunState {
    fn new(threads: usize) -> Self {
        Self {
            ready: CountDownLatch::new(threads),
            done: CountDownLatch::new(threads),
            gate: StartGate::new(),
            total_nanos: AtomicU64::new(0),
            worker_failed: InterruptSignal::new(),
        }
    }
}

/// Raises the run's failure flag if a worker unwinds, so the controller
/// stops waiting for a done signal that will never come
struct UnwindGuard<'a> {
    state: &'a RunState,
}

impl Drop for UnwindGuard<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.state.worker_failed.raise();
        }
    }
}

/// Spawns a fixed pool of workers per run and aggregates their timings
pub struct ParallelHarness {
    config: HarnessConfig,
    signal: InterruptSignal,
}

impl ParallelHarness {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            signal: InterruptSignal::new(),
        }
    }

    /// 100 threads x 100,000 accesses timed by thread CPU time
    pub fn reference() -> Self {
        Self::new(HarnessConfig::reference())
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Handle that aborts the controller's current or next wait from any thread
    ///
    /// A raise stays pending until a run observes it; the harness clears the
    /// signal once it has aborted a run, so later runs start clean.
    pub fn interrupter(&self) -> InterruptSignal {
        self.signal.clone()
    }

    /// Run `op` on every worker and report the accumulated time under `name`
    ///
    /// Fails with [`HarnessError::InterruptedWait`] if the controller's wait
    /// for ready or done workers is interrupted; nothing is reported then.
    /// Workers already inside their timed section are left to finish.
    pub fn run<F, R>(
        &self,
        name: &str,
        reporter: &dyn Reporter,
        op: F,
    ) -> HarnessResult<ParallelReport>
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        let HarnessConfig {
            threads,
            iterations,
            clock,
            interrupt_poll,
        } = self.config;

        let state = Arc::new(RunState::new(threads));
        let op = Arc::new(op);

        debug!(benchmark = name, threads, iterations, "spawning workers");

        let mut handles = Vec::with_capacity(threads);
        for index in 0..threads {
            let worker_state = Arc::clone(&state);
            let op = Arc::clone(&op);

            let spawned = thread::Builder::new()
                .name(format!("bench-worker-{}", index))
                .spawn(move || run_worker(index, &worker_state, iterations, clock, &*op));

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    state.gate.abandon();
                    error!(benchmark = name, index, error = %source, "failed to spawn worker");
                    return Err(HarnessError::Spawn { index, source });
                }
            }
        }

        let signals = [&self.signal, &state.worker_failed];

        state
            .ready
            .wait(&signals, interrupt_poll)
            .map_err(|_| self.abort(name, &state, WaitPhase::Ready))?;

        let released_at = Instant::now();
        state.gate.open();
        trace!(benchmark = name, "start gate released");

        state
            .done
            .wait(&signals, interrupt_poll)
            .map_err(|_| self.abort(name, &state, WaitPhase::Done))?;

        // The done latch orders every worker's fetch_add before this load
        let total = Duration::from_nanos(state.total_nanos.load(Ordering::Relaxed));
        reporter.record(name, total);

        let samples = handles
            .into_iter()
            .filter_map(|handle| handle.join().ok().flatten())
            .collect();

        Ok(ParallelReport {
            name: name.to_string(),
            threads,
            iterations,
            total,
            released_at,
            samples,
        })
    }

    /// Wake parked workers and consume a pending external interrupt
    fn abort(&self, name: &str, state: &RunState, phase: WaitPhase) -> HarnessError {
        state.gate.abandon();
        if self.signal.is_raised() {
            self.signal.clear();
        }
        error!(benchmark = name, phase = %phase, "{} <<< interrupted", name);
        HarnessError::InterruptedWait { phase }
    }
}

impl Default for ParallelHarness {
    fn default() -> Self {
        Self::reference()
    }
}

fn run_worker<F, R>(
    index: usize,
    state: &RunState,
    iterations: u64,
    clock: Clock,
    op: &F,
) -> Option<WorkerSample>
where
    F: Fn() -> R,
{
    let _guard = UnwindGuard { state };

    state.ready.count_down();
    if state.gate.block() == Passage::Abandoned {
        trace!(index, "start gate abandoned, skipping timed section");
        return None;
    }

    let started = Instant::now();
    let watch = clock.start();
    for _ in 0..iterations {
        black_box(op());
    }
    let elapsed = watch.elapsed();

    state
        .total_nanos
        .fetch_add(clamped_nanos(elapsed), Ordering::Relaxed);
    state.done.count_down();

    Some(WorkerSample {
        index,
        started,
        elapsed,
    })
}

/// Nanoseconds as `u64`, saturating instead of wrapping
fn clamped_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}
