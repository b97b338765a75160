/*!
 * Singleton Traits
 *
 * Each strategy is a zero-sized marker type owning one process-wide slot.
 * The traits expose that slot through associated functions so harness code
 * can be monomorphized per strategy with no dispatch on the hot path.
 */

use super::instance::{InitStats, Instance};

/// Lazily or eagerly produce the one shared instance
///
/// Implementations must guarantee:
/// - once the slot is populated, every call returns the same instance
/// - no caller observes an instance whose construction has not completed
pub trait Singleton: 'static {
    /// Human-readable strategy name
    const NAME: &'static str;

    /// Get or create the shared instance
    fn instance() -> &'static Instance;

    /// Construction counters for this strategy's slot
    fn stats() -> &'static InitStats;
}

/// Strategies whose initialization can be re-run from a cold state
///
/// Only strategies that publish through their own slot discipline implement
/// this. Run-once gates and compile-time constants cannot be reset.
pub trait Resettable: Singleton {
    /// Empty the slot and zero its counters
    ///
    /// The previous instance is retired, not freed: references handed out
    /// before the reset remain valid for the life of the process. Must not
    /// race with concurrent `instance()` calls.
    fn reset();
}
