/*!
 * Benchmark Suite Tests
 * Named entry points, reset-before-run and pass/fail reporting
 */

use pretty_assertions::assert_eq;
use serial_test::serial;
use singleton_bench::{
    Clock, CollectingReporter, HarnessConfig, HarnessError, Mode, Outcome, ParallelHarness,
    SingleThreadHarness, Strategy, Suite,
};

fn quick_suite() -> Suite {
    Suite::new(
        SingleThreadHarness::new(10_000, Clock::Wall),
        ParallelHarness::new(
            HarnessConfig::reference()
                .with_threads(8)
                .with_iterations(1_000)
                .with_clock(Clock::Wall),
        ),
    )
}

#[test]
fn test_unknown_benchmark_is_rejected() {
    let reporter = CollectingReporter::new();
    let result = quick_suite().run("parallel_spinlock", &reporter);

    assert!(matches!(
        result,
        Err(HarnessError::UnknownBenchmark(ref name)) if name == "parallel_spinlock"
    ));
    assert!(reporter.is_empty());
}

#[test]
#[serial]
fn test_run_all_reports_every_benchmark() {
    let reporter = CollectingReporter::new();
    let results = quick_suite().run_all(&reporter);

    assert_eq!(results.len(), 10);
    assert!(results.iter().all(|(_, r)| r.is_ok()));

    let recorded: Vec<_> = reporter.records().into_iter().map(|r| r.name).collect();
    let expected: Vec<_> = Suite::names().map(String::from).collect();
    assert_eq!(recorded, expected);
}

#[test]
#[serial]
fn test_resettable_benchmarks_start_cold() {
    let reporter = CollectingReporter::new();
    let suite = quick_suite();

    for bench in Suite::benchmarks().iter().filter(|b| b.strategy.is_resettable()) {
        let before = bench.strategy.access();
        let outcome = suite.run(bench.name, &reporter).unwrap();
        let after = bench.strategy.access();

        assert!(!after.is_same(before), "{} was not reset", bench.name);
        assert_eq!(bench.strategy.stats().published(), 1);
        assert_eq!(outcome.name(), bench.name);
    }
}

#[test]
#[serial]
fn test_outcome_matches_mode() {
    let reporter = CollectingReporter::new();
    let suite = quick_suite();

    match suite.run("single_thread_eager", &reporter).unwrap() {
        Outcome::Single(report) => assert_eq!(report.iterations, 10_000),
        other => panic!("unexpected outcome {:?}", other.name()),
    }

    match suite.run("parallel_holder", &reporter).unwrap() {
        Outcome::Parallel(report) => {
            assert_eq!(report.threads, 8);
            assert_eq!(report.total, report.sample_sum());
        }
        other => panic!("unexpected outcome {:?}", other.name()),
    }

    let bench = Suite::find("parallel_synchronized").unwrap();
    assert_eq!(bench.strategy, Strategy::LockGuarded);
    assert_eq!(bench.mode, Mode::Parallel);
    assert_eq!(reporter.len(), 2);
}
