//! Game session
//!
//! Wires the ledger, progression machine, clock, throttle, and registration
//! gate into one event-driven instance. All state transitions happen
//! synchronously inside the method that receives the event; timer-driven
//! work (shake auto-clear, delayed gate opening) runs through explicit
//! deadlines advanced by [`GameSession::tick`].
//!
//! The session starts "not ready" and accepts no input until a target word
//! is provided. Input gating has a single authority,
//! [`GameSession::input_allowed`]: letter entry and submission while it is
//! `false` are silent no-ops, never errors.

use super::clock::{CompletionTime, GameClock};
use super::gate::{GateConfig, RegistrationGate};
use super::ledger::{AttemptLedger, SubmitError};
use super::progression::{GameOutcome, GameStatus, Progression};
use super::score::RecordedScore;
use super::throttle::InvalidAttemptThrottle;
use crate::core::{FeedbackRow, KeyboardState, Word};
use crate::words::WordLookup;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Session tunables
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub gate: GateConfig,
    /// Player already has an account; the gate starts satisfied
    pub registered: bool,
    /// How long the shake indicator stays up after an invalid submission
    pub shake_duration: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gate: GateConfig::default(),
            registered: false,
            shake_duration: Duration::from_millis(500),
        }
    }
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Input is not currently accepted; nothing happened
    Ignored,
    /// Buffer holds fewer than 5 letters; nothing changed
    Incomplete { len: usize },
    /// Buffer is not an accepted word; the board shakes, and `notify`
    /// says whether to show the "not a valid word" message this time
    Invalid { notify: bool },
    /// Attempt recorded; `outcome` is set when this submission ended the game
    Accepted {
        feedback: FeedbackRow,
        outcome: Option<GameOutcome>,
    },
}

/// Asynchronous happenings the frontend should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The registration interstitial just opened
    GateOpened,
    /// The game is over and the player is registered; forward to the score sink
    ResultReady(RecordedScore),
}

/// One playthrough of the daily game
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    lookup: WordLookup,
    target: Option<Word>,
    ledger: AttemptLedger,
    progression: Progression,
    clock: Option<GameClock>,
    completion: Option<CompletionTime>,
    throttle: InvalidAttemptThrottle,
    gate: RegistrationGate,
    shake_until: Option<Instant>,
    events: VecDeque<SessionEvent>,
    result_emitted: bool,
}

impl GameSession {
    #[must_use]
    pub fn new(lookup: WordLookup, config: SessionConfig) -> Self {
        let mut gate = RegistrationGate::new(config.gate);
        if config.registered {
            gate.complete_registration();
        }

        Self {
            config,
            lookup,
            target: None,
            ledger: AttemptLedger::new(),
            progression: Progression::new(),
            clock: None,
            completion: None,
            throttle: InvalidAttemptThrottle::new(),
            gate,
            shake_until: None,
            events: VecDeque::new(),
            result_emitted: false,
        }
    }

    /// Deliver the daily target word, making the session ready
    ///
    /// Starts the game clock. The target is immutable for the lifetime of
    /// the session; a second delivery is ignored.
    pub fn provide_target(&mut self, target: Word, now: Instant) {
        if self.target.is_none() {
            self.target = Some(target);
            self.clock = Some(GameClock::start(now));
        }
    }

    /// Whether a target word is available
    #[inline]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.target.is_some()
    }

    /// Single authority for whether letter and attempt input is accepted
    ///
    /// `true` only while the session is ready, the game is in progress, and
    /// the registration gate is not blocking.
    #[must_use]
    pub fn input_allowed(&self) -> bool {
        self.is_ready()
            && self.progression.status() == GameStatus::InProgress
            && !self.gate.blocks_input()
    }

    /// Append a letter to the attempt buffer
    ///
    /// Silent no-op while input is not allowed or the buffer is full.
    pub fn append_letter(&mut self, ch: char) {
        if self.input_allowed() {
            self.ledger.append_letter(ch);
        }
    }

    /// Remove the last buffered letter
    ///
    /// Silent no-op while input is not allowed or the buffer is empty.
    pub fn delete_letter(&mut self) {
        if self.input_allowed() {
            self.ledger.delete_letter();
        }
    }

    /// Submit the buffered attempt
    ///
    /// Validation failures are returned as values and leave the ledger
    /// unchanged; an accepted attempt advances the progression machine and
    /// may end the game.
    pub fn submit(&mut self, now: Instant) -> SubmitResult {
        if !self.input_allowed() {
            return SubmitResult::Ignored;
        }
        let Some(target) = self.target.clone() else {
            return SubmitResult::Ignored;
        };

        match self.ledger.submit(&target, &self.lookup) {
            Err(SubmitError::Incomplete(len)) => SubmitResult::Incomplete { len },
            Err(SubmitError::InvalidWord) => {
                self.shake_until = Some(now + self.config.shake_duration);
                let notify = self.throttle.record_invalid();
                SubmitResult::Invalid { notify }
            }
            Ok(accepted) => {
                self.throttle.record_valid();

                let outcome =
                    self.progression
                        .advance(&accepted.word, &target, self.ledger.attempts_used());

                if let Some(outcome) = outcome {
                    self.on_terminal(outcome, now);
                } else if self.gate.on_attempt_recorded(self.ledger.attempts_used()) {
                    self.events.push_back(SessionEvent::GateOpened);
                }

                SubmitResult::Accepted {
                    feedback: accepted.feedback,
                    outcome,
                }
            }
        }
    }

    fn on_terminal(&mut self, outcome: GameOutcome, now: Instant) {
        // Freeze the completion time exactly once
        if self.completion.is_none()
            && let Some(clock) = &self.clock
        {
            self.completion = Some(CompletionTime::from(clock.elapsed(now)));
        }

        if self.gate.on_terminal(outcome, now) {
            self.events.push_back(SessionEvent::GateOpened);
        }

        self.maybe_emit_result();
    }

    /// Advance deadline-driven state: shake auto-clear and the delayed
    /// gate opening after a win
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.shake_until
            && now >= until
        {
            self.shake_until = None;
        }

        if self.gate.tick(now) {
            self.events.push_back(SessionEvent::GateOpened);
        }
    }

    /// Deliver the external registration-completed signal
    pub fn registration_completed(&mut self) {
        self.gate.complete_registration();
        self.maybe_emit_result();
    }

    fn maybe_emit_result(&mut self) {
        if self.result_emitted || !self.gate.is_satisfied() {
            return;
        }
        let won = match self.progression.status() {
            GameStatus::Won => true,
            GameStatus::Lost => false,
            GameStatus::InProgress => return,
        };
        if let Some(time) = self.completion {
            self.result_emitted = true;
            self.events.push_back(SessionEvent::ResultReady(RecordedScore {
                attempts: self.ledger.attempts_used(),
                time,
                won,
            }));
        }
    }

    /// Next pending event, if any
    pub fn poll_event(&mut self) -> Option<SessionEvent> {
        self.events.pop_front()
    }

    /// Whether the shake indicator is currently up
    #[inline]
    #[must_use]
    pub const fn is_shaking(&self) -> bool {
        self.shake_until.is_some()
    }

    /// The in-progress attempt buffer
    #[must_use]
    pub fn current_buffer(&self) -> &str {
        self.ledger.buffer()
    }

    /// Accepted attempts, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Word] {
        self.ledger.attempts()
    }

    /// Feedback rows, parallel to [`Self::attempts`]
    #[must_use]
    pub fn feedback(&self) -> &[FeedbackRow] {
        self.ledger.feedback()
    }

    /// Attempts left before the game is lost
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.ledger.attempts_remaining()
    }

    /// Best classification observed per letter
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        self.ledger.keyboard()
    }

    /// Overall game status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.progression.status()
    }

    /// Time the game took; `None` while in progress
    #[must_use]
    pub const fn completion_time(&self) -> Option<CompletionTime> {
        self.completion
    }

    /// Whether the registration interstitial should be showing
    #[must_use]
    pub const fn gate_open(&self) -> bool {
        self.gate.is_open()
    }

    /// Whether the player has completed registration
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.gate.is_satisfied()
    }

    /// The target word; revealed by frontends once the game is over
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    /// Whether the accepted-word dictionary is loaded
    #[must_use]
    pub const fn dictionary_available(&self) -> bool {
        self.lookup.is_available()
    }
}
