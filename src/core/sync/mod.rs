/*!
 * Synchronization Primitives
 *
 * Building blocks for the two-phase start barrier used by the parallel
 * harness:
 * - `CountDownLatch` for ready/done rendezvous
 * - `StartGate` for the single simultaneous release
 * - `InterruptSignal` to abort a blocked controller
 */

mod gate;
mod interrupt;
mod latch;

pub use gate::{Passage, StartGate};
pub use interrupt::InterruptSignal;
pub use latch::CountDownLatch;
