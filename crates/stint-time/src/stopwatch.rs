//! Stopwatch state machine
//!
//! Two states, Stopped and Running, with a single toggle transition.
//! INVARIANT: accumulated time never decreases; there is no reset.

use std::time::{Duration, Instant};

/// Stopwatch state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StopwatchState {
    #[default]
    Stopped,
    Running,
}

/// Pause/resume elapsed-time accumulator
///
/// Created at zero, stopped. The caller supplies every timestamp, which
/// keeps the state machine deterministic under test.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    /// Time accumulated across completed running intervals
    accumulated: Duration,
    /// Start of the current running interval, if running
    running_since: Option<Instant>,
}

impl Stopwatch {
    /// Create a stopwatch at zero, stopped
    pub fn new() -> Self {
        Stopwatch {
            accumulated: Duration::ZERO,
            running_since: None,
        }
    }

    /// Start if stopped, stop if running
    ///
    /// Stopping folds `now - running_since` into the accumulated total.
    /// Returns the state entered by this toggle.
    pub fn toggle(&mut self, now: Instant) -> StopwatchState {
        match self.running_since.take() {
            None => {
                self.running_since = Some(now);
                StopwatchState::Running
            }
            Some(since) => {
                self.accumulated += now.saturating_duration_since(since);
                StopwatchState::Stopped
            }
        }
    }

    /// Total running time as of `now`. Pure query, no mutation.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            None => self.accumulated,
            Some(since) => self.accumulated + now.saturating_duration_since(since),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    #[inline]
    pub fn state(&self) -> StopwatchState {
        if self.is_running() {
            StopwatchState::Running
        } else {
            StopwatchState::Stopped
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Format an elapsed duration the way the display shows it: seconds with
/// exactly three decimal places
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_stopped_at_zero() {
        let watch = Stopwatch::new();
        let now = Instant::now();

        assert!(!watch.is_running());
        assert_eq!(watch.state(), StopwatchState::Stopped);
        assert_eq!(watch.elapsed(now), Duration::ZERO);
    }

    #[test]
    fn test_elapsed_tracks_running_interval() {
        let mut watch = Stopwatch::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(250);

        assert_eq!(watch.toggle(t0), StopwatchState::Running);
        assert_eq!(watch.elapsed(t1), Duration::from_millis(250));
    }

    #[test]
    fn test_elapsed_frozen_while_stopped() {
        let mut watch = Stopwatch::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(250);
        let much_later = t0 + Duration::from_secs(3600);

        watch.toggle(t0);
        assert_eq!(watch.toggle(t1), StopwatchState::Stopped);

        assert_eq!(watch.elapsed(t1), Duration::from_millis(250));
        assert_eq!(watch.elapsed(much_later), Duration::from_millis(250));
    }

    #[test]
    fn test_accumulates_across_restarts() {
        let mut watch = Stopwatch::new();
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(250);
        let t2 = t0 + Duration::from_secs(10);
        let t3 = t2 + Duration::from_millis(125);

        watch.toggle(t0);
        watch.toggle(t1); // stopped at 250ms
        watch.toggle(t2); // running again; the 10s gap does not count
        assert_eq!(watch.elapsed(t3), Duration::from_millis(375));
    }

    #[test]
    fn test_backwards_timestamp_saturates() {
        let mut watch = Stopwatch::new();
        let t0 = Instant::now() + Duration::from_secs(1);
        let before = t0 - Duration::from_millis(500);

        watch.toggle(t0);
        assert_eq!(watch.elapsed(before), Duration::ZERO);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "0.000");
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500");
        assert_eq!(format_elapsed(Duration::from_micros(1_234_567)), "1.235");
        assert_eq!(format_elapsed(Duration::from_secs(90)), "90.000");
    }

    proptest::proptest! {
        #[test]
        fn prop_accumulates_exactly_the_running_intervals(
            intervals in proptest::collection::vec(0u64..10_000, 1..8),
        ) {
            let mut watch = Stopwatch::new();
            let mut now = Instant::now();
            let mut expected = Duration::ZERO;

            for millis in intervals {
                let dt = Duration::from_millis(millis);
                watch.toggle(now);
                now += dt;
                watch.toggle(now);
                expected += dt;
                // Paused gaps never count.
                now += Duration::from_millis(7);
            }

            proptest::prop_assert_eq!(watch.elapsed(now), expected);
        }
    }
}
