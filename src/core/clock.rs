/*!
 * Benchmark Clocks
 *
 * Elapsed-time measurement for timed sections. The default clock reads the
 * calling thread's CPU time so that time spent descheduled under contention
 * is not charged to the strategy being measured.
 */

use std::time::{Duration, Instant};

/// Clock used to time a benchmark section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// CPU time consumed by the calling thread (wall time where unsupported)
    #[default]
    ThreadCpu,
    /// Monotonic wall-clock time
    Wall,
}

#[derive(Debug, Clone, Copy)]
enum Mark {
    Cpu(Duration),
    Wall(Instant),
}

/// Running measurement started by [`Clock::start`]
///
/// Must be read on the thread that started it when using [`Clock::ThreadCpu`].
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    mark: Mark,
}

impl Clock {
    /// Start measuring on the calling thread
    #[inline]
    pub fn start(self) -> Stopwatch {
        let mark = match self {
            Clock::ThreadCpu => match thread_cpu_time() {
                Some(now) => Mark::Cpu(now),
                None => Mark::Wall(Instant::now()),
            },
            Clock::Wall => Mark::Wall(Instant::now()),
        };
        Stopwatch { mark }
    }

    /// Whether this clock is backed by a per-thread CPU counter on this platform
    pub fn is_cpu_backed(self) -> bool {
        matches!(self, Clock::ThreadCpu) && thread_cpu_time().is_some()
    }
}

impl Stopwatch {
    /// Time elapsed since the stopwatch started
    #[inline]
    pub fn elapsed(&self) -> Duration {
        match self.mark {
            Mark::Cpu(start) => thread_cpu_time()
                .map(|now| now.saturating_sub(start))
                .unwrap_or(Duration::ZERO),
            Mark::Wall(start) => start.elapsed(),
        }
    }
}

/// CPU time consumed so far by the calling thread
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn thread_cpu_time() -> Option<Duration> {
    use nix::time::{clock_gettime, ClockId};

    clock_gettime(ClockId::CLOCK_THREAD_CPUTIME_ID)
        .map(|ts| Duration::new(ts.tv_sec() as u64, ts.tv_nsec() as u32))
        .ok()
}

/// CPU time consumed so far by the calling thread
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn thread_cpu_time() -> Option<Duration> {
    None
}
