/*!
 * Singleton Strategy Property Tests
 *
 * Identity, publication and reset behaviour for every strategy. Tests that
 * touch a process-wide slot run serially.
 */

use parking_lot::Mutex;
use serial_test::serial;
use singleton_bench::{
    Clock, CollectingReporter, CompareAndSwapRetry, DoubleChecked, EagerConstant, HarnessConfig,
    Instance, LockGuarded, OnceInitHolder, ParallelHarness, Resettable, Singleton, Strategy,
    WORKER_THREADS,
};
use std::sync::Arc;

/// Release `threads` workers together and collect what each one got back
fn race_for_instance<S: Singleton>(threads: usize) -> Vec<&'static Instance> {
    let seen = Arc::new(Mutex::new(Vec::with_capacity(threads)));
    let sink = seen.clone();

    let harness = ParallelHarness::new(
        HarnessConfig::reference()
            .with_threads(threads)
            .with_iterations(1)
            .with_clock(Clock::Wall),
    );
    harness
        .run("identity_race", &CollectingReporter::new(), move || {
            sink.lock().push(S::instance());
        })
        .unwrap();

    let seen = seen.lock().clone();
    seen
}

fn assert_single_identity(instances: &[&'static Instance]) {
    assert!(!instances.is_empty());
    let first = instances[0];
    for instance in instances {
        assert!(instance.is_initialized(), "observed a partially constructed instance");
        assert!(
            instance.is_same(first),
            "serial {} differs from {}",
            instance.serial(),
            first.serial()
        );
    }
}

fn cold_race<S: Resettable>() -> Vec<&'static Instance> {
    S::reset();
    let instances = race_for_instance::<S>(WORKER_THREADS);
    assert_eq!(instances.len(), WORKER_THREADS);
    assert_single_identity(&instances);
    instances
}

#[test]
#[serial]
fn test_lock_guarded_single_identity() {
    cold_race::<LockGuarded>();
    let stats = LockGuarded::stats().snapshot();
    assert_eq!(stats.constructed, 1);
}

#[test]
#[serial]
fn test_double_checked_single_identity() {
    cold_race::<DoubleChecked>();
    let stats = DoubleChecked::stats().snapshot();
    assert_eq!(stats.constructed, 1);
    assert!(stats.slow_path >= 1);
    assert!(stats.slow_path <= WORKER_THREADS as u64);
}

#[test]
#[serial]
fn test_cas_single_identity_discards_losers() {
    cold_race::<CompareAndSwapRetry>();
    let stats = CompareAndSwapRetry::stats().snapshot();
    assert_eq!(stats.published(), 1);
    assert_eq!(stats.constructed, stats.discarded + 1);
}

#[test]
#[serial]
fn test_holder_single_identity() {
    let instances = race_for_instance::<OnceInitHolder>(WORKER_THREADS);
    assert_single_identity(&instances);
    assert_eq!(OnceInitHolder::stats().snapshot().constructed, 1);
}

#[test]
fn test_eager_single_identity() {
    let instances = race_for_instance::<EagerConstant>(WORKER_THREADS);
    assert_single_identity(&instances);
    assert_eq!(instances[0].serial(), 0);
}

#[test]
#[serial]
fn test_no_partial_construction_across_cold_starts() {
    for _ in 0..20 {
        for strategy in [Strategy::LockGuarded, Strategy::DoubleChecked, Strategy::CompareAndSwap] {
            assert!(strategy.reset());
            let seen = Arc::new(Mutex::new(Vec::new()));
            let sink = seen.clone();

            let harness = ParallelHarness::new(
                HarnessConfig::reference()
                    .with_threads(8)
                    .with_iterations(50)
                    .with_clock(Clock::Wall),
            );
            harness
                .run("partial_construction", &CollectingReporter::new(), move || {
                    let instance = strategy.access();
                    if !instance.is_initialized() {
                        sink.lock().push(instance.serial());
                    }
                })
                .unwrap();

            assert!(seen.lock().is_empty(), "{} leaked an uninitialized instance", strategy);
        }
    }
}

fn assert_reset_yields_new_identity<S: Resettable>() {
    let before = S::instance();
    S::reset();
    assert_eq!(S::stats().snapshot().constructed, 0);

    let after = S::instance();
    assert!(!after.is_same(before));
    assert_ne!(after.serial(), before.serial());
    assert!(after.is_same(S::instance()));

    // Retired instances stay readable
    assert!(before.is_initialized());
}

#[test]
#[serial]
fn test_reset_lock_guarded() {
    assert_reset_yields_new_identity::<LockGuarded>();
}

#[test]
#[serial]
fn test_reset_double_checked() {
    assert_reset_yields_new_identity::<DoubleChecked>();
}

#[test]
#[serial]
fn test_reset_cas() {
    assert_reset_yields_new_identity::<CompareAndSwapRetry>();
}

#[test]
#[serial]
fn test_holder_and_eager_identity_is_stable() {
    let holder = OnceInitHolder::instance();
    let eager = EagerConstant::instance();

    // Resetting the other strategies must not disturb these
    for strategy in Strategy::ALL {
        strategy.reset();
    }

    for _ in 0..1_000 {
        assert!(OnceInitHolder::instance().is_same(holder));
        assert!(EagerConstant::instance().is_same(eager));
    }
    assert!(!Strategy::Holder.reset());
    assert!(!Strategy::Eager.reset());
    assert_eq!(OnceInitHolder::stats().snapshot().constructed, 1);
    assert_eq!(EagerConstant::stats().snapshot().constructed, 1);
}
