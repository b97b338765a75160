/*!
 * Once-Init Holder Singleton
 *
 * Uses an explicit run-once gate: the initializer runs at most once, callers
 * arriving during initialization block until it completes, and everyone
 * sees the finished value afterwards.
 */

use super::instance::{InitStats, Instance};
use super::traits::Singleton;
use std::sync::OnceLock;

static HOLDER: OnceLock<Instance> = OnceLock::new();
static STATS: InitStats = InitStats::new();

/// Run-once gate; no reset
pub struct OnceInitHolder;

impl Singleton for OnceInitHolder {
    const NAME: &'static str = "OnceInitHolder";

    #[inline]
    fn instance() -> &'static Instance {
        HOLDER.get_or_init(|| Instance::construct(&STATS))
    }

    fn stats() -> &'static InitStats {
        &STATS
    }
}
