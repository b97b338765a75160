/*!
 * Eager Constant Singleton
 * Bound at compile time; access is a plain reference with no synchronization
 */

use super::instance::{InitStats, Instance};
use super::traits::Singleton;

static INSTANCE: Instance = Instance::constant();
static STATS: InitStats = InitStats::prebuilt();

/// Constant bound before the program runs; no reset
pub struct EagerConstant;

impl Singleton for EagerConstant {
    const NAME: &'static str = "EagerConstant";

    #[inline(always)]
    fn instance() -> &'static Instance {
        &INSTANCE
    }

    fn stats() -> &'static InitStats {
        &STATS
    }
}
