//! Display refresh cadence
//!
//! The original display refreshed itself from inside its own redraw
//! callback. Here the cadence is an explicit interval value that the run
//! loop awaits, so re-arm policy lives in one place and the stopwatch
//! component never sees it.

use std::time::Duration;

use tokio::time::{self, Interval, MissedTickBehavior};

/// Redraw cadence configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshCadence {
    /// Interval between redraw ticks
    pub period: Duration,
}

impl Default for RefreshCadence {
    /// Matches the original display's millisecond update step
    fn default() -> Self {
        RefreshCadence {
            period: Duration::from_millis(1),
        }
    }
}

impl RefreshCadence {
    /// Cadence with the given period in milliseconds
    ///
    /// Tokio intervals reject a zero period, so it clamps to 1 ms.
    pub fn from_millis(millis: u64) -> Self {
        RefreshCadence {
            period: Duration::from_millis(millis.max(1)),
        }
    }

    /// Coarser cadence for battery-friendly operation (~60 Hz)
    pub fn low_power() -> Self {
        RefreshCadence {
            period: Duration::from_millis(16),
        }
    }

    /// Build the re-arming interval timer
    ///
    /// Missed ticks are skipped rather than replayed: only the newest
    /// frame matters, a redraw that fell behind has nothing to show.
    pub fn interval(self) -> Interval {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_period_is_one_millisecond() {
        assert_eq!(RefreshCadence::default().period, Duration::from_millis(1));
    }

    #[test]
    fn test_zero_period_clamps() {
        assert_eq!(
            RefreshCadence::from_millis(0).period,
            Duration::from_millis(1)
        );
    }

    #[tokio::test]
    async fn test_interval_rearms() {
        let mut interval = RefreshCadence::from_millis(1).interval();

        // First tick completes immediately; the rest re-arm on their own.
        interval.tick().await;
        interval.tick().await;
        interval.tick().await;
    }
}
