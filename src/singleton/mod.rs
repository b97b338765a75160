/*!
 * Singleton Strategies
 *
 * Five ways to produce one shared, process-wide instance:
 * - `LockGuarded`: mutex on every access
 * - `DoubleChecked`: acquire-load fast path, locked slow path
 * - `CompareAndSwapRetry`: lock-free speculative construction
 * - `OnceInitHolder`: explicit run-once gate
 * - `EagerConstant`: bound before the program runs
 *
 * The first three can be reset to a cold state between benchmark runs.
 */

mod cas;
mod double_checked;
mod eager;
mod holder;
mod instance;
mod locked;
mod traits;

pub use cas::CompareAndSwapRetry;
pub use double_checked::DoubleChecked;
pub use eager::EagerConstant;
pub use holder::OnceInitHolder;
pub use instance::{InitStats, Instance, StatsSnapshot};
pub use locked::LockGuarded;
pub use traits::{Resettable, Singleton};

use std::fmt;

/// Runtime selector over the strategy marker types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    LockGuarded,
    DoubleChecked,
    CompareAndSwap,
    Holder,
    Eager,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::LockGuarded,
        Strategy::DoubleChecked,
        Strategy::CompareAndSwap,
        Strategy::Holder,
        Strategy::Eager,
    ];

    /// Strategy type name
    pub fn name(self) -> &'static str {
        match self {
            Strategy::LockGuarded => LockGuarded::NAME,
            Strategy::DoubleChecked => DoubleChecked::NAME,
            Strategy::CompareAndSwap => CompareAndSwapRetry::NAME,
            Strategy::Holder => OnceInitHolder::NAME,
            Strategy::Eager => EagerConstant::NAME,
        }
    }

    /// Short identifier used in benchmark names
    pub fn slug(self) -> &'static str {
        match self {
            Strategy::LockGuarded => "synchronized",
            Strategy::DoubleChecked => "dcl",
            Strategy::CompareAndSwap => "cas",
            Strategy::Holder => "holder",
            Strategy::Eager => "eager",
        }
    }

    /// Get or create the strategy's shared instance
    pub fn access(self) -> &'static Instance {
        match self {
            Strategy::LockGuarded => LockGuarded::instance(),
            Strategy::DoubleChecked => DoubleChecked::instance(),
            Strategy::CompareAndSwap => CompareAndSwapRetry::instance(),
            Strategy::Holder => OnceInitHolder::instance(),
            Strategy::Eager => EagerConstant::instance(),
        }
    }

    pub fn is_resettable(self) -> bool {
        matches!(
            self,
            Strategy::LockGuarded | Strategy::DoubleChecked | Strategy::CompareAndSwap
        )
    }

    /// Reset to a cold state; returns `false` for strategies without a reset
    pub fn reset(self) -> bool {
        match self {
            Strategy::LockGuarded => LockGuarded::reset(),
            Strategy::DoubleChecked => DoubleChecked::reset(),
            Strategy::CompareAndSwap => CompareAndSwapRetry::reset(),
            Strategy::Holder | Strategy::Eager => return false,
        }
        true
    }

    pub fn stats(self) -> StatsSnapshot {
        match self {
            Strategy::LockGuarded => LockGuarded::stats(),
            Strategy::DoubleChecked => DoubleChecked::stats(),
            Strategy::CompareAndSwap => CompareAndSwapRetry::stats(),
            Strategy::Holder => OnceInitHolder::stats(),
            Strategy::Eager => EagerConstant::stats(),
        }
        .snapshot()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
