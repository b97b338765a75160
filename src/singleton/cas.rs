/*!
 * Compare-and-Swap Singleton
 *
 * Lock-free: a caller that finds the slot empty builds a complete candidate
 * and tries to install it with one compare-exchange. Losers free their
 * candidate, which nobody else has seen, and start over.
 */

use super::instance::{InitStats, Instance};
use super::traits::{Resettable, Singleton};
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use tracing::{debug, trace};

/// Null until published. Published values are never freed.
static SLOT: AtomicPtr<Instance> = AtomicPtr::new(ptr::null_mut());
static STATS: InitStats = InitStats::new();

/// Speculative construction with compare-exchange publication
pub struct CompareAndSwapRetry;

impl Singleton for CompareAndSwapRetry {
    const NAME: &'static str = "CompareAndSwapRetry";

    #[inline]
    fn instance() -> &'static Instance {
        loop {
            let current = SLOT.load(Ordering::Acquire);
            if !current.is_null() {
                // SAFETY: the acquire load pairs with the release half of the
                // winning compare-exchange; published instances are never freed.
                return unsafe { &*current };
            }

            let candidate = Box::into_raw(Box::new(Instance::construct(&STATS)));
            match SLOT.compare_exchange(
                ptr::null_mut(),
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    // SAFETY: `candidate` is now the published instance and is never freed.
                    let instance = unsafe { &*candidate };
                    debug!(strategy = Self::NAME, serial = instance.serial(), "instance published");
                    return instance;
                }
                Err(_) => {
                    // SAFETY: the exchange failed, so `candidate` was never shared
                    // and we still own the allocation from `Box::into_raw` above.
                    drop(unsafe { Box::from_raw(candidate) });
                    STATS.record_discard();
                    trace!(strategy = Self::NAME, "lost publish race, candidate discarded");
                }
            }
        }
    }

    fn stats() -> &'static InitStats {
        &STATS
    }
}

impl Resettable for CompareAndSwapRetry {
    fn reset() {
        let retired = SLOT.swap(ptr::null_mut(), Ordering::AcqRel);
        if !retired.is_null() {
            debug!(strategy = Self::NAME, "instance retired");
        }
        STATS.clear();
    }
}
