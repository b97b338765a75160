/*!
 * Benchmark Suite
 *
 * The ten named entry points: one single-thread and one parallel benchmark
 * per strategy. Resettable strategies are returned to a cold state before
 * each run so every benchmark includes exactly one initialization.
 */

use crate::core::errors::{HarnessError, HarnessResult};
use crate::core::sync::InterruptSignal;
use crate::harness::{ParallelHarness, ParallelReport, Reporter, SingleReport, SingleThreadHarness};
use crate::singleton::{
    CompareAndSwapRetry, DoubleChecked, EagerConstant, LockGuarded, OnceInitHolder, Singleton,
    Strategy,
};
use std::time::Duration;
use tracing::{debug, info_span};

/// Load profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SingleThread,
    Parallel,
}

/// A named benchmark entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    pub name: &'static str,
    pub strategy: Strategy,
    pub mode: Mode,
}

impl Benchmark {
    const fn new(name: &'static str, strategy: Strategy, mode: Mode) -> Self {
        Self {
            name,
            strategy,
            mode,
        }
    }
}

const BENCHMARKS: [Benchmark; 10] = [
    Benchmark::new("single_thread_dcl", Strategy::DoubleChecked, Mode::SingleThread),
    Benchmark::new("single_thread_cas", Strategy::CompareAndSwap, Mode::SingleThread),
    Benchmark::new("single_thread_holder", Strategy::Holder, Mode::SingleThread),
    Benchmark::new("single_thread_eager", Strategy::Eager, Mode::SingleThread),
    Benchmark::new("single_thread_synchronized", Strategy::LockGuarded, Mode::SingleThread),
    Benchmark::new("parallel_dcl", Strategy::DoubleChecked, Mode::Parallel),
    Benchmark::new("parallel_cas", Strategy::CompareAndSwap, Mode::Parallel),
    Benchmark::new("parallel_holder", Strategy::Holder, Mode::Parallel),
    Benchmark::new("parallel_eager", Strategy::Eager, Mode::Parallel),
    Benchmark::new("parallel_synchronized", Strategy::LockGuarded, Mode::Parallel),
];

/// Result of one benchmark invocation
#[derive(Debug, Clone)]
pub enum Outcome {
    Single(SingleReport),
    Parallel(ParallelReport),
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Outcome::Single(r) => &r.name,
            Outcome::Parallel(r) => &r.name,
        }
    }

    /// The figure handed to the reporter
    pub fn elapsed(&self) -> Duration {
        match self {
            Outcome::Single(r) => r.elapsed,
            Outcome::Parallel(r) => r.total,
        }
    }
}

/// Runs benchmarks by name against a pair of harnesses
pub struct Suite {
    single: SingleThreadHarness,
    parallel: ParallelHarness,
}

impl Suite {
    pub fn new(single: SingleThreadHarness, parallel: ParallelHarness) -> Self {
        Self { single, parallel }
    }

    /// Reference iteration and thread counts
    pub fn reference() -> Self {
        Self::new(SingleThreadHarness::reference(), ParallelHarness::reference())
    }

    pub fn benchmarks() -> &'static [Benchmark] {
        &BENCHMARKS
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        BENCHMARKS.iter().map(|b| b.name)
    }

    pub fn find(name: &str) -> Option<&'static Benchmark> {
        BENCHMARKS.iter().find(|b| b.name == name)
    }

    /// Interrupt handle for the parallel harness
    pub fn interrupter(&self) -> InterruptSignal {
        self.parallel.interrupter()
    }

    /// Invoke the benchmark called `name`
    pub fn run(&self, name: &str, reporter: &dyn Reporter) -> HarnessResult<Outcome> {
        let bench =
            Self::find(name).ok_or_else(|| HarnessError::UnknownBenchmark(name.to_string()))?;
        self.run_benchmark(bench, reporter)
    }

    pub fn run_benchmark(
        &self,
        bench: &Benchmark,
        reporter: &dyn Reporter,
    ) -> HarnessResult<Outcome> {
        let _span =
            info_span!("benchmark", name = bench.name, strategy = %bench.strategy).entered();

        if bench.strategy.reset() {
            debug!("strategy reset to cold state");
        }

        let outcome = match bench.strategy {
            Strategy::LockGuarded => self.drive::<LockGuarded>(bench, reporter),
            Strategy::DoubleChecked => self.drive::<DoubleChecked>(bench, reporter),
            Strategy::CompareAndSwap => self.drive::<CompareAndSwapRetry>(bench, reporter),
            Strategy::Holder => self.drive::<OnceInitHolder>(bench, reporter),
            Strategy::Eager => self.drive::<EagerConstant>(bench, reporter),
        }?;

        let stats = bench.strategy.stats();
        debug!(
            constructed = stats.constructed,
            discarded = stats.discarded,
            slow_path = stats.slow_path,
            "initialization stats"
        );

        Ok(outcome)
    }

    /// Run every benchmark in order, continuing past failures
    pub fn run_all(&self, reporter: &dyn Reporter) -> Vec<(&'static str, HarnessResult<Outcome>)> {
        BENCHMARKS
            .iter()
            .map(|bench| (bench.name, self.run_benchmark(bench, reporter)))
            .collect()
    }

    fn drive<S: Singleton>(
        &self,
        bench: &Benchmark,
        reporter: &dyn Reporter,
    ) -> HarnessResult<Outcome> {
        match bench.mode {
            Mode::SingleThread => Ok(Outcome::Single(self.single.run(
                bench.name,
                reporter,
                S::instance,
            ))),
            Mode::Parallel => self
                .parallel
                .run(bench.name, reporter, S::instance)
                .map(Outcome::Parallel),
        }
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ten_unique_names() {
        let names: HashSet<_> = Suite::names().collect();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_each_strategy_has_both_modes() {
        for strategy in Strategy::ALL {
            for mode in [Mode::SingleThread, Mode::Parallel] {
                let count = Suite::benchmarks()
                    .iter()
                    .filter(|b| b.strategy == strategy && b.mode == mode)
                    .count();
                assert_eq!(count, 1, "{:?} {:?}", strategy, mode);
            }
        }
    }

    #[test]
    fn test_names_follow_mode_and_slug() {
        for bench in Suite::benchmarks() {
            let prefix = match bench.mode {
                Mode::SingleThread => "single_thread_",
                Mode::Parallel => "parallel_",
            };
            assert_eq!(bench.name, format!("{}{}", prefix, bench.strategy.slug()));
        }
    }

    #[test]
    fn test_find() {
        let bench = Suite::find("parallel_cas").unwrap();
        assert_eq!(bench.strategy, Strategy::CompareAndSwap);
        assert_eq!(bench.mode, Mode::Parallel);
        assert!(Suite::find("parallel_spinlock").is_none());
    }
}
