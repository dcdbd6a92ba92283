//! Registration-gate controller
//!
//! Decides when play pauses for the registration interstitial. The gate
//! opens when the attempt threshold is reached mid-game, immediately on a
//! loss, and after a short delay on a win so the win feedback can play
//! first. It closes only through the external registration-completed
//! signal; once satisfied it never reopens for the rest of the game.
//!
//! The delayed win-side opening is a deadline owned by this struct and
//! advanced by [`RegistrationGate::tick`]; a discarded game instance takes
//! its deadline with it.

use super::progression::GameOutcome;
use std::time::{Duration, Instant};

/// Tunables for the registration gate
#[derive(Debug, Clone, Copy)]
pub struct GateConfig {
    /// Open once this many attempts are recorded while the game is still
    /// in progress. A threshold above the attempt limit never fires.
    pub attempt_threshold: usize,
    /// How long after a win before the gate opens
    pub win_open_delay: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            attempt_threshold: 3,
            win_open_delay: Duration::from_secs(3),
        }
    }
}

/// Pauses play for registration until the player completes it
#[derive(Debug, Clone)]
pub struct RegistrationGate {
    config: GateConfig,
    open: bool,
    satisfied: bool,
    scheduled_open: Option<Instant>,
}

impl RegistrationGate {
    #[must_use]
    pub const fn new(config: GateConfig) -> Self {
        Self {
            config,
            open: false,
            satisfied: false,
            scheduled_open: None,
        }
    }

    /// React to an accepted attempt while the game is in progress
    ///
    /// Returns `true` when this call opened the gate.
    pub fn on_attempt_recorded(&mut self, attempts_used: usize) -> bool {
        if !self.satisfied && !self.open && attempts_used >= self.config.attempt_threshold {
            self.open = true;
            true
        } else {
            false
        }
    }

    /// React to the terminal transition
    ///
    /// A loss opens the gate immediately; a win schedules the opening
    /// after the configured delay. Returns `true` when this call opened
    /// the gate right away.
    pub fn on_terminal(&mut self, outcome: GameOutcome, now: Instant) -> bool {
        if self.satisfied || self.open {
            return false;
        }

        if outcome.won() {
            self.scheduled_open = Some(now + self.config.win_open_delay);
            false
        } else {
            self.open = true;
            true
        }
    }

    /// Fire the scheduled opening once its deadline passes
    ///
    /// Returns `true` when this call opened the gate. Registration in the
    /// meantime cancels the pending opening.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.satisfied {
            self.scheduled_open = None;
            return false;
        }

        if let Some(at) = self.scheduled_open
            && now >= at
        {
            self.scheduled_open = None;
            if !self.open {
                self.open = true;
                return true;
            }
        }

        false
    }

    /// Deliver the external registration-completed signal
    ///
    /// Cancels any pending opening; the gate never reopens afterwards.
    pub fn complete_registration(&mut self) {
        self.satisfied = true;
        self.scheduled_open = None;
    }

    /// Whether the registration interstitial should be showing
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open && !self.satisfied
    }

    /// Whether the gate currently suppresses letter and attempt input
    #[inline]
    #[must_use]
    pub const fn blocks_input(&self) -> bool {
        self.is_open()
    }

    /// Whether the player has completed registration
    #[inline]
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.satisfied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> RegistrationGate {
        RegistrationGate::new(GateConfig::default())
    }

    #[test]
    fn starts_closed_and_allowing_input() {
        let gate = gate();
        assert!(!gate.is_open());
        assert!(!gate.blocks_input());
        assert!(!gate.is_satisfied());
    }

    #[test]
    fn opens_at_attempt_threshold() {
        let mut gate = gate();
        assert!(!gate.on_attempt_recorded(1));
        assert!(!gate.on_attempt_recorded(2));
        assert!(gate.on_attempt_recorded(3));
        assert!(gate.is_open());
        assert!(gate.blocks_input());

        // Already open: no second opening
        assert!(!gate.on_attempt_recorded(4));
    }

    #[test]
    fn threshold_ignored_once_satisfied() {
        let mut gate = gate();
        gate.complete_registration();
        assert!(!gate.on_attempt_recorded(3));
        assert!(!gate.is_open());
    }

    #[test]
    fn loss_opens_immediately() {
        let mut gate = gate();
        let now = Instant::now();
        assert!(gate.on_terminal(GameOutcome::Lost, now));
        assert!(gate.is_open());
    }

    #[test]
    fn win_opens_after_delay() {
        let mut gate = gate();
        let now = Instant::now();
        assert!(!gate.on_terminal(GameOutcome::Won, now));
        assert!(!gate.is_open());

        // Before the deadline nothing happens
        assert!(!gate.tick(now + Duration::from_secs(1)));
        assert!(!gate.is_open());

        // At the deadline the gate opens
        assert!(gate.tick(now + Duration::from_secs(3)));
        assert!(gate.is_open());

        // Further ticks are quiet
        assert!(!gate.tick(now + Duration::from_secs(10)));
    }

    #[test]
    fn registration_cancels_scheduled_open() {
        let mut gate = gate();
        let now = Instant::now();
        gate.on_terminal(GameOutcome::Won, now);
        gate.complete_registration();

        assert!(!gate.tick(now + Duration::from_secs(10)));
        assert!(!gate.is_open());
        assert!(gate.is_satisfied());
    }

    #[test]
    fn registration_closes_open_gate_for_good() {
        let mut gate = gate();
        gate.on_attempt_recorded(3);
        assert!(gate.blocks_input());

        gate.complete_registration();
        assert!(!gate.is_open());
        assert!(!gate.blocks_input());

        // Nothing reopens it afterwards
        assert!(!gate.on_attempt_recorded(5));
        assert!(!gate.on_terminal(GameOutcome::Lost, Instant::now()));
        assert!(!gate.is_open());
    }

    #[test]
    fn open_gate_has_no_dismiss() {
        // The only way out is registration
        let mut gate = gate();
        gate.on_terminal(GameOutcome::Lost, Instant::now());
        assert!(gate.is_open());
        assert!(!gate.tick(Instant::now() + Duration::from_secs(60)));
        assert!(gate.is_open());
    }

    #[test]
    fn custom_threshold() {
        let mut gate = RegistrationGate::new(GateConfig {
            attempt_threshold: 5,
            win_open_delay: Duration::ZERO,
        });
        assert!(!gate.on_attempt_recorded(4));
        assert!(gate.on_attempt_recorded(5));
    }
}
