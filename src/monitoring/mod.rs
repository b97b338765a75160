/*!
 * Monitoring
 * Tracing subscriber setup for the benchmark binary and tests
 */

pub mod tracer;

pub use tracer::{init_test_tracing, init_tracing};
