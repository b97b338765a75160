/*!
 * Double-Checked Singleton
 *
 * Fast path is a single acquire load with no locking. The slow path takes a
 * mutex, re-checks, and publishes a fully constructed instance with one
 * release store, so a reader that sees the pointer also sees every write
 * made during construction.
 */

use super::instance::{InitStats, Instance};
use super::traits::{Resettable, Singleton};
use parking_lot::{const_mutex, Mutex};
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use tracing::debug;

/// Null until published. Non-null values come from `Box::into_raw` and are never freed.
static SLOT: AtomicPtr<Instance> = AtomicPtr::new(ptr::null_mut());
static LOCK: Mutex<()> = const_mutex(());
static STATS: InitStats = InitStats::new();

/// Acquire-load fast path, locked slow path with a second check
pub struct DoubleChecked;

impl DoubleChecked {
    #[cold]
    #[inline(never)]
    fn slow_path() -> &'static Instance {
        let _guard = LOCK.lock();
        STATS.record_slow_path();

        // Another thread may have published while we waited for the lock
        let current = SLOT.load(Ordering::Acquire);
        if !current.is_null() {
            // SAFETY: non-null SLOT values point to fully constructed, never-freed instances.
            return unsafe { &*current };
        }

        let fresh = Box::into_raw(Box::new(Instance::construct(&STATS)));
        SLOT.store(fresh, Ordering::Release);

        // SAFETY: `fresh` was just leaked from a Box and is never freed.
        let instance = unsafe { &*fresh };
        debug!(strategy = Self::NAME, serial = instance.serial(), "instance published");
        instance
    }
}

impl Singleton for DoubleChecked {
    const NAME: &'static str = "DoubleChecked";

    #[inline]
    fn instance() -> &'static Instance {
        let current = SLOT.load(Ordering::Acquire);
        if current.is_null() {
            return Self::slow_path();
        }
        // SAFETY: the acquire load pairs with the release store in `slow_path`,
        // and published instances are never freed.
        unsafe { &*current }
    }

    fn stats() -> &'static InitStats {
        &STATS
    }
}

impl Resettable for DoubleChecked {
    fn reset() {
        let _guard = LOCK.lock();
        let retired = SLOT.swap(ptr::null_mut(), Ordering::AcqRel);
        if !retired.is_null() {
            debug!(strategy = Self::NAME, "instance retired");
        }
        STATS.clear();
    }
}
