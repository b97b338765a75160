/*!
 * Singleton Bench - Main Entry Point
 *
 * Runs the named benchmarks (all of them when none are given) and logs one
 * timing result per benchmark.
 *
 * Usage: singleton-bench [--list] [NAME...]
 */

use singleton_bench::{init_tracing, Suite, TracingReporter};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--list") {
        for name in Suite::names() {
            println!("{}", name);
        }
        return ExitCode::SUCCESS;
    }

    init_tracing();

    let suite = Suite::reference();
    let reporter = TracingReporter;

    let results: Vec<_> = if args.is_empty() {
        suite.run_all(&reporter)
    } else {
        args.iter()
            .map(|name| {
                let label = Suite::find(name).map(|b| b.name).unwrap_or("unknown");
                (label, suite.run(name, &reporter))
            })
            .collect()
    };

    let mut failed = 0usize;
    for (name, result) in &results {
        if let Err(e) = result {
            failed += 1;
            error!(benchmark = *name, error = %e, "benchmark failed");
        }
    }

    info!(
        total = results.len(),
        passed = results.len() - failed,
        failed,
        "benchmark run complete"
    );

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
