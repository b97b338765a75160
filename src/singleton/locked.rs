/*!
 * Lock-Guarded Singleton
 *
 * Every access takes the slot's mutex. Correct, but serializes pure reads
 * after initialization; the contention baseline.
 */

use super::instance::{InitStats, Instance};
use super::traits::{Resettable, Singleton};
use parking_lot::{const_mutex, Mutex};
use tracing::debug;

static SLOT: Mutex<Option<&'static Instance>> = const_mutex(None);
static STATS: InitStats = InitStats::new();

/// Mutex on every access
pub struct LockGuarded;

impl Singleton for LockGuarded {
    const NAME: &'static str = "LockGuarded";

    #[inline]
    fn instance() -> &'static Instance {
        let mut slot = SLOT.lock();
        *slot.get_or_insert_with(|| {
            let instance: &'static Instance = Box::leak(Box::new(Instance::construct(&STATS)));
            debug!(strategy = Self::NAME, serial = instance.serial(), "instance published");
            instance
        })
    }

    fn stats() -> &'static InitStats {
        &STATS
    }
}

impl Resettable for LockGuarded {
    fn reset() {
        let mut slot = SLOT.lock();
        if let Some(retired) = slot.take() {
            debug!(strategy = Self::NAME, serial = retired.serial(), "instance retired");
        }
        STATS.clear();
    }
}
