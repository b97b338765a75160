/*!
 * Interrupt Signal
 * Shared flag that aborts a blocked controller wait
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable interrupt flag; all clones observe the same state
#[derive(Debug, Clone, Default)]
pub struct InterruptSignal {
    raised: Arc<AtomicBool>,
}

impl InterruptSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interrupt any wait currently observing this signal
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Reset to the un-raised state
    pub fn clear(&self) {
        self.raised.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let signal = InterruptSignal::new();
        let remote = signal.clone();
        assert!(!signal.is_raised());

        remote.raise();
        assert!(signal.is_raised());

        signal.clear();
        assert!(!remote.is_raised());
    }
}
