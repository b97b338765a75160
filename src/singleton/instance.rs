/*!
 * Singleton Instance
 *
 * The object every strategy hands out, plus per-strategy construction counters.
 */

use std::ptr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide identity source. Serial 0 belongs to the compile-time constant.
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Shared instance produced by a strategy
///
/// `initialized` is written as the last step of construction, so any caller
/// that can see the instance through a correctly published slot sees it set.
#[derive(Debug)]
pub struct Instance {
    serial: u64,
    initialized: bool,
}

impl Instance {
    /// Build a fresh instance, counting it against `stats`
    pub(crate) fn construct(stats: &InitStats) -> Self {
        stats.constructed.fetch_add(1, Ordering::Relaxed);
        let mut instance = Self {
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
            initialized: false,
        };
        instance.initialized = true;
        instance
    }

    /// The instance bound before the program runs
    pub(crate) const fn constant() -> Self {
        Self {
            serial: 0,
            initialized: true,
        }
    }

    /// Process-unique identity
    #[inline]
    pub fn serial(&self) -> u64 {
        self.serial
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Same object, not merely equal fields
    #[inline]
    pub fn is_same(&self, other: &Instance) -> bool {
        ptr::eq(self, other)
    }
}

/// Construction counters for one strategy
///
/// Only touched off the fast path; relaxed ordering is enough because
/// readers synchronize through the harness latches or thread joins.
#[derive(Debug)]
pub struct InitStats {
    constructed: AtomicU64,
    discarded: AtomicU64,
    slow_path: AtomicU64,
}

/// Point-in-time copy of [`InitStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Instances built, including discarded candidates
    pub constructed: u64,
    /// Candidates dropped after losing a publish race
    pub discarded: u64,
    /// Lock acquisitions on a double-checked slow path
    pub slow_path: u64,
}

impl StatsSnapshot {
    /// Instances that were actually published
    pub fn published(&self) -> u64 {
        self.constructed - self.discarded
    }
}

impl InitStats {
    pub const fn new() -> Self {
        Self {
            constructed: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            slow_path: AtomicU64::new(0),
        }
    }

    /// Counters for a slot populated before startup
    pub(crate) const fn prebuilt() -> Self {
        Self {
            constructed: AtomicU64::new(1),
            discarded: AtomicU64::new(0),
            slow_path: AtomicU64::new(0),
        }
    }

    pub(crate) fn record_discard(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_slow_path(&self) {
        self.slow_path.fetch_add(1, Ordering::Relaxed);
    }

    /// Zero all counters for a fresh cold start
    pub(crate) fn clear(&self) {
        self.constructed.store(0, Ordering::Relaxed);
        self.discarded.store(0, Ordering::Relaxed);
        self.slow_path.store(0, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            constructed: self.constructed.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            slow_path: self.slow_path.load(Ordering::Relaxed),
        }
    }
}

impl Default for InitStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_assigns_unique_serials() {
        let stats = InitStats::new();
        let a = Instance::construct(&stats);
        let b = Instance::construct(&stats);

        assert!(a.is_initialized());
        assert!(b.is_initialized());
        assert_ne!(a.serial(), b.serial());
        assert_ne!(a.serial(), 0);
        assert!(!a.is_same(&b));
        assert_eq!(stats.snapshot().constructed, 2);
    }

    #[test]
    fn test_stats_clear() {
        let stats = InitStats::prebuilt();
        stats.record_discard();
        stats.record_slow_path();
        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                constructed: 1,
                discarded: 1,
                slow_path: 1
            }
        );

        stats.clear();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_constant_instance() {
        let constant = Instance::constant();
        assert_eq!(constant.serial(), 0);
        assert!(constant.is_initialized());
    }
}
