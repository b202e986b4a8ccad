//! Pacing: the deadline-sleep rate limiter shared by the tick and render
//! loops.
//!
//! The contract is "at most one invocation per configured interval, never
//! early, no catch-up": the next deadline is computed from the moment the
//! callback *returns*, so an overrunning callback delays the next invocation
//! instead of queueing replays of the missed intervals.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Sleep granularity while waiting on a deadline. Short slices keep the
/// shutdown flag responsive without busy-waiting.
const SLEEP_SLICE: Duration = Duration::from_millis(1);

/// Deadline-based rate limiter for one loop.
///
/// The rate lives in a shared atomic so it can be changed at runtime; the
/// new interval takes effect on the next wait, not retroactively.
pub(crate) struct Pacer {
    rate: Arc<AtomicU32>,
    next_deadline: Instant,
}

impl Pacer {
    /// Create a pacer whose first invocation is due immediately.
    pub fn new(rate: Arc<AtomicU32>) -> Self {
        Self {
            rate,
            next_deadline: Instant::now(),
        }
    }

    /// The current interval: `1000 / rate` milliseconds. A rate of zero is
    /// clamped to one invocation per second.
    fn interval(&self) -> Duration {
        let rate = self.rate.load(Ordering::Relaxed).max(1);
        Duration::from_millis(u64::from(1000 / rate.min(1000)).max(1))
    }

    /// Block until the next invocation is due, or until `shutdown` is set.
    ///
    /// Returns `true` when an invocation should run, `false` on shutdown.
    pub fn wait(&mut self, shutdown: &AtomicBool) -> bool {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                return false;
            }
            let now = Instant::now();
            if now >= self.next_deadline {
                return true;
            }
            thread::sleep((self.next_deadline - now).min(SLEEP_SLICE));
        }
    }

    /// Record that the callback has returned: schedule the next invocation
    /// one interval from now. Missed intervals are never replayed.
    pub fn mark(&mut self) {
        self.next_deadline = Instant::now() + self.interval();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_wait_is_immediate() {
        let rate = Arc::new(AtomicU32::new(15));
        let shutdown = AtomicBool::new(false);
        let mut pacer = Pacer::new(rate);
        let start = Instant::now();
        assert!(pacer.wait(&shutdown));
        assert!(start.elapsed() < Duration::from_millis(10));
    }

    #[test]
    fn test_wait_respects_interval() {
        let rate = Arc::new(AtomicU32::new(50)); // 20ms interval
        let shutdown = AtomicBool::new(false);
        let mut pacer = Pacer::new(rate);
        assert!(pacer.wait(&shutdown));
        pacer.mark();
        let start = Instant::now();
        assert!(pacer.wait(&shutdown));
        // Never early.
        assert!(start.elapsed() >= Duration::from_millis(19));
    }

    #[test]
    fn test_shutdown_breaks_wait() {
        let rate = Arc::new(AtomicU32::new(1)); // 1s interval
        let shutdown = Arc::new(AtomicBool::new(false));
        let mut pacer = Pacer::new(rate);
        assert!(pacer.wait(&shutdown));
        pacer.mark();

        let flag = shutdown.clone();
        let setter = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            flag.store(true, Ordering::Relaxed);
        });
        let start = Instant::now();
        assert!(!pacer.wait(&shutdown));
        assert!(start.elapsed() < Duration::from_millis(500));
        setter.join().unwrap();
    }

    #[test]
    fn test_rate_change_takes_effect_next_wait() {
        let rate = Arc::new(AtomicU32::new(1));
        let shutdown = AtomicBool::new(false);
        let mut pacer = Pacer::new(rate.clone());
        assert!(pacer.wait(&shutdown));
        // Raise the rate before marking: the new interval applies to the
        // deadline computed by the next mark.
        rate.store(200, Ordering::Relaxed);
        pacer.mark();
        let start = Instant::now();
        assert!(pacer.wait(&shutdown));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_zero_rate_is_clamped() {
        let rate = Arc::new(AtomicU32::new(0));
        let pacer = Pacer::new(rate);
        assert_eq!(pacer.interval(), Duration::from_millis(1000));
    }
}
