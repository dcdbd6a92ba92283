//! Invalid-attempt notification throttle
//!
//! Every invalid submission shakes the board, but the "not a valid word"
//! notification is held back on the first miss: a single mistype is common
//! and should not interrupt with a toast. From the second consecutive
//! invalid submission the player is likely stuck, so the notification
//! fires and the counter starts over.

/// Counts consecutive invalid-word submissions
#[derive(Debug, Clone, Default)]
pub struct InvalidAttemptThrottle {
    consecutive: u32,
}

impl InvalidAttemptThrottle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an invalid submission
    ///
    /// Returns `true` when the notification should be shown this time.
    /// The caller shakes the board on every invalid submission regardless.
    pub fn record_invalid(&mut self) -> bool {
        if self.consecutive >= 1 {
            self.consecutive = 0;
            true
        } else {
            self.consecutive += 1;
            false
        }
    }

    /// Record an accepted submission, resetting the streak
    pub fn record_valid(&mut self) {
        self.consecutive = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_invalid_is_silent() {
        let mut throttle = InvalidAttemptThrottle::new();
        assert!(!throttle.record_invalid());
    }

    #[test]
    fn second_invalid_notifies_and_resets() {
        let mut throttle = InvalidAttemptThrottle::new();
        assert!(!throttle.record_invalid());
        assert!(throttle.record_invalid());
        // Counter reset: the next miss is silent again
        assert!(!throttle.record_invalid());
        assert!(throttle.record_invalid());
    }

    #[test]
    fn valid_submission_resets_streak() {
        let mut throttle = InvalidAttemptThrottle::new();
        assert!(!throttle.record_invalid());
        throttle.record_valid();
        // Streak broken: back to the silent first miss
        assert!(!throttle.record_invalid());
    }

    #[test]
    fn notifications_fire_every_other_invalid() {
        // Across N consecutive invalid submissions, floor(N/2) notifications
        let mut throttle = InvalidAttemptThrottle::new();
        for n in 1..=20 {
            let mut notified = 0;
            for _ in 0..n {
                if throttle.record_invalid() {
                    notified += 1;
                }
            }
            assert_eq!(notified, n / 2, "run of {n} invalid submissions");
            throttle.record_valid();
        }
    }
}
