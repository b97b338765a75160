/*!
 * Error Types
 * Harness failures with thiserror and miette diagnostics
 */

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Result type for latch waits
pub type WaitResult<T> = Result<T, WaitError>;

/// Latch wait errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Diagnostic)]
pub enum WaitError {
    #[error("Wait was interrupted")]
    #[diagnostic(code(sync::interrupted))]
    Interrupted,
}

/// Which controller wait failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPhase {
    /// Waiting for every worker to signal ready
    Ready,
    /// Waiting for every worker to signal done
    Done,
}

impl fmt::Display for WaitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitPhase::Ready => f.write_str("ready"),
            WaitPhase::Done => f.write_str("done"),
        }
    }
}

/// Benchmark harness errors
#[derive(Error, Debug, Diagnostic)]
pub enum HarnessError {
    #[error("Interrupted while waiting for workers to signal {phase}")]
    #[diagnostic(
        code(harness::interrupted_wait),
        help("The run was aborted; no timing result was recorded.")
    )]
    InterruptedWait { phase: WaitPhase },

    #[error("Failed to spawn worker thread {index}")]
    #[diagnostic(
        code(harness::spawn_failed),
        help(
            "The OS refused to create another thread. \
             Lower the worker count or raise the thread limit."
        )
    )]
    Spawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown benchmark: {0}")]
    #[diagnostic(
        code(suite::unknown_benchmark),
        help("Run with --list to see the available benchmark names.")
    )]
    UnknownBenchmark(String),
}

impl HarnessError {
    /// Whether the run was aborted through the interrupt signal
    pub fn is_interrupted(&self) -> bool {
        matches!(self, HarnessError::InterruptedWait { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HarnessError::InterruptedWait {
            phase: WaitPhase::Ready,
        };
        assert_eq!(
            err.to_string(),
            "Interrupted while waiting for workers to signal ready"
        );
        assert!(err.is_interrupted());

        let err = HarnessError::UnknownBenchmark("parallel_nope".into());
        assert_eq!(err.to_string(), "Unknown benchmark: parallel_nope");
        assert!(!err.is_interrupted());
    }
}
