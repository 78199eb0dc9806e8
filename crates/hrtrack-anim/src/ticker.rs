//! Fixed-interval frame ticker.
//!
//! Accumulates elapsed wall-clock time and reports when a frame is due. A
//! slow poll never produces a burst of catch-up frames: at most one tick is
//! reported per poll and any backlog beyond one interval is dropped.

use std::time::{Duration, Instant};
use tracing::trace;

/// Frame interval used when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Fixed-interval tick source.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    previous_time: Instant,
    accumulator: Duration,
    tick_count: u64,
}

impl Ticker {
    /// A ticker that fires every `interval`, starting from now. A zero
    /// interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            previous_time: Instant::now(),
            accumulator: Duration::ZERO,
            tick_count: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks reported so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Measure time since the previous poll and report whether a tick is due.
    pub fn poll(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.previous_time);
        self.previous_time = now;
        self.advance(elapsed)
    }

    /// Advance by an explicit `elapsed` duration and report whether a tick is
    /// due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulator += elapsed;
        if self.accumulator < self.interval {
            return false;
        }

        let late = self.accumulator - self.interval;
        if late >= self.interval {
            trace!(late_ms = late.as_millis() as u64, "Dropping missed ticks");
        }
        // Keep the sub-interval remainder so the cadence stays steady.
        self.accumulator = late.min(self.interval - Duration::from_nanos(1));
        self.tick_count += 1;
        true
    }

    /// Time left before the next tick is due.
    pub fn time_until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulator)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_no_tick_before_interval() {
        let mut ticker = Ticker::new(ms(100));
        assert!(!ticker.advance(ms(50)));
        assert!(!ticker.advance(ms(49)));
        assert_eq!(ticker.tick_count(), 0);
    }

    #[test]
    fn test_tick_on_interval() {
        let mut ticker = Ticker::new(ms(100));
        assert!(ticker.advance(ms(100)));
        assert_eq!(ticker.tick_count(), 1);
        assert_eq!(ticker.time_until_next(), ms(100));
    }

    #[test]
    fn test_accumulates_across_polls() {
        let mut ticker = Ticker::new(ms(100));
        assert!(!ticker.advance(ms(60)));
        assert!(ticker.advance(ms(60)));
        // 20 ms carried over.
        assert_eq!(ticker.time_until_next(), ms(80));
        assert!(ticker.advance(ms(80)));
    }

    #[test]
    fn test_long_stall_yields_single_tick() {
        let mut ticker = Ticker::new(ms(100));
        assert!(ticker.advance(ms(1_000)));
        assert_eq!(ticker.tick_count(), 1);
        // The backlog is capped just below one interval.
        assert!(ticker.advance(ms(1)));
        assert!(!ticker.advance(ms(1)));
        assert_eq!(ticker.tick_count(), 2);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.interval(), ms(1));
        assert_eq!(Ticker::default().interval(), DEFAULT_INTERVAL);
    }
}
