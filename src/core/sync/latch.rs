/*!
 * Countdown Latch
 *
 * Blocks waiters until a fixed number of participants have counted down.
 * Waits can be interrupted through one or more [`InterruptSignal`]s.
 */

use super::interrupt::InterruptSignal;
use crate::core::errors::{WaitError, WaitResult};
use parking_lot::{Condvar, Mutex};
use std::time::Duration;

/// One-shot countdown latch
///
/// # Ordering
///
/// Every `count_down` happens-before a `wait` that returns `Ok`: the count
/// lives under a mutex, so writes made by a participant before counting down
/// are visible to the released waiter.
pub struct CountDownLatch {
    remaining: Mutex<usize>,
    zero: Condvar,
}

impl CountDownLatch {
    /// Create a latch that opens after `count` calls to [`count_down`](Self::count_down)
    pub fn new(count: usize) -> Self {
        Self {
            remaining: Mutex::new(count),
            zero: Condvar::new(),
        }
    }

    /// Decrement the count, releasing waiters when it reaches zero
    ///
    /// Extra calls after the latch opened are ignored.
    pub fn count_down(&self) {
        let mut remaining = self.remaining.lock();
        if *remaining == 0 {
            return;
        }
        *remaining -= 1;
        if *remaining == 0 {
            self.zero.notify_all();
        }
    }

    /// Participants that have not counted down yet
    pub fn count(&self) -> usize {
        *self.remaining.lock()
    }

    /// Block until the count reaches zero or any of `signals` is raised
    ///
    /// Signals are checked before the count and re-checked every `poll`
    /// while blocked, so a signal raised before the call fails the wait even
    /// if the latch is already open.
    pub fn wait(&self, signals: &[&InterruptSignal], poll: Duration) -> WaitResult<()> {
        let mut remaining = self.remaining.lock();
        loop {
            if signals.iter().any(|s| s.is_raised()) {
                return Err(WaitError::Interrupted);
            }
            if *remaining == 0 {
                return Ok(());
            }
            self.zero.wait_for(&mut remaining, poll);
        }
    }
}
