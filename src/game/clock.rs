//! Elapsed-time tracking
//!
//! Records the instant a game becomes ready and produces a human-readable
//! completion time at the terminal transition. All methods take the current
//! instant explicitly, so event processing stays deterministic and testable.

use std::fmt;
use std::time::{Duration, Instant};

/// Records the start instant of one game instance
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    started: Instant,
}

impl GameClock {
    /// Start the clock at the instant the game became ready
    #[must_use]
    pub const fn start(now: Instant) -> Self {
        Self { started: now }
    }

    /// Time elapsed since the clock started
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }
}

/// Duration between game start and the terminal transition
///
/// Captured once when the game ends and never recomputed afterwards.
/// Displays as the familiar `"1m 5s"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionTime(Duration);

impl CompletionTime {
    #[must_use]
    pub const fn duration(self) -> Duration {
        self.0
    }
}

impl From<Duration> for CompletionTime {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl fmt::Display for CompletionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs();
        write!(f, "{}m {}s", total / 60, total % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_measures_from_start() {
        let t0 = Instant::now();
        let clock = GameClock::start(t0);

        assert_eq!(clock.elapsed(t0), Duration::ZERO);
        assert_eq!(
            clock.elapsed(t0 + Duration::from_secs(65)),
            Duration::from_secs(65)
        );
    }

    #[test]
    fn elapsed_saturates_before_start() {
        let t0 = Instant::now() + Duration::from_secs(10);
        let clock = GameClock::start(t0);
        assert_eq!(clock.elapsed(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn completion_time_display() {
        assert_eq!(
            CompletionTime::from(Duration::from_secs(65)).to_string(),
            "1m 5s"
        );
        assert_eq!(
            CompletionTime::from(Duration::from_secs(9)).to_string(),
            "0m 9s"
        );
        assert_eq!(
            CompletionTime::from(Duration::from_secs(600)).to_string(),
            "10m 0s"
        );
    }

    #[test]
    fn completion_time_keeps_duration() {
        let time = CompletionTime::from(Duration::from_millis(1500));
        assert_eq!(time.duration(), Duration::from_millis(1500));
    }
}
