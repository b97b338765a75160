/*!
 * Core Module
 * Configuration, clocks, errors and synchronization primitives
 */

pub mod clock;
pub mod config;
pub mod errors;
pub mod sync;

// Re-export for convenience
pub use clock::{Clock, Stopwatch};
pub use config::{HarnessConfig, PARALLEL_ITERATIONS, SINGLE_THREAD_ITERATIONS, WORKER_THREADS};
pub use errors::*;
