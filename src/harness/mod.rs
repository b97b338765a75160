/*!
 * Benchmark Harnesses
 *
 * - `SingleThreadHarness`: sequential accesses on the calling thread
 * - `ParallelHarness`: barrier-aligned fan-out across OS threads
 * - `Reporter`: where `(name, elapsed)` results go
 */

pub mod parallel;
pub mod report;
pub mod single;

pub use parallel::{ParallelHarness, ParallelReport, WorkerSample};
pub use report::{CollectingReporter, Record, Reporter, TracingReporter};
pub use single::{SingleReport, SingleThreadHarness};
