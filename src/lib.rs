/*!
 * Singleton Bench Library
 * Strategies for thread-safe singleton initialization and the harnesses that time them
 */

pub mod core;
pub mod harness;
pub mod monitoring;
pub mod singleton;
pub mod suite;

// Re-exports
pub use crate::core::{
    Clock, HarnessConfig, HarnessError, HarnessResult, WaitError, WaitPhase, PARALLEL_ITERATIONS,
    SINGLE_THREAD_ITERATIONS, WORKER_THREADS,
};
pub use harness::{
    CollectingReporter, ParallelHarness, ParallelReport, Record, Reporter, SingleReport,
    SingleThreadHarness, TracingReporter, WorkerSample,
};
pub use monitoring::{init_test_tracing, init_tracing};
pub use singleton::{
    CompareAndSwapRetry, DoubleChecked, EagerConstant, Instance, LockGuarded, OnceInitHolder,
    Resettable, Singleton, StatsSnapshot, Strategy,
};
pub use suite::{Benchmark, Mode, Outcome, Suite};
