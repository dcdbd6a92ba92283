//! Attempt ledger
//!
//! The ordered history of accepted attempts, the in-progress letter buffer,
//! and the keyboard state derived from submissions. The ledger validates and
//! records attempts; it does not decide win or loss, and it does not know
//! whether input is currently allowed - that gating lives with the caller.

use crate::core::{FeedbackRow, KeyboardState, Word, classify};
use crate::words::WordLookup;
use std::fmt;

/// Maximum number of accepted attempts per game
pub const MAX_ATTEMPTS: usize = 6;

/// Letters per attempt
pub const WORD_LENGTH: usize = 5;

/// Why a submission was rejected
///
/// Both variants are user-correctable and leave the ledger unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Buffer holds fewer than 5 letters
    Incomplete(usize),
    /// Buffer is not an accepted word
    InvalidWord,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete(len) => write!(f, "Word must be 5 letters, got {len}"),
            Self::InvalidWord => write!(f, "Not a valid word"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// An attempt that passed validation, with its per-letter feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedAttempt {
    pub word: Word,
    pub feedback: FeedbackRow,
}

/// Ordered record of submitted attempts plus the in-progress buffer
#[derive(Debug, Clone, Default)]
pub struct AttemptLedger {
    attempts: Vec<Word>,
    feedback: Vec<FeedbackRow>,
    buffer: String,
    keyboard: KeyboardState,
}

impl AttemptLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one letter to the buffer
    ///
    /// Ignored when the buffer already holds 5 letters, when all attempts
    /// are used, or when the character is not an ASCII letter. Letters are
    /// stored uppercase.
    pub fn append_letter(&mut self, ch: char) {
        if self.buffer.len() < WORD_LENGTH
            && self.attempts.len() < MAX_ATTEMPTS
            && ch.is_ascii_alphabetic()
        {
            self.buffer.push(ch.to_ascii_uppercase());
        }
    }

    /// Remove the last buffer letter, if any
    pub fn delete_letter(&mut self) {
        self.buffer.pop();
    }

    /// Validate and record the buffered attempt
    ///
    /// Checks run in order: buffer length, then dictionary membership. On
    /// acceptance the buffer becomes an attempt, the buffer is cleared, and
    /// the feedback is folded into the keyboard state.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Incomplete`] when the buffer is not 5 letters
    /// - [`SubmitError::InvalidWord`] when the lookup rejects the buffer
    ///
    /// Either way the buffer is left untouched so the player can edit and
    /// resubmit.
    ///
    /// # Panics
    /// Will not panic - the buffer only ever holds validated ASCII letters.
    pub fn submit(
        &mut self,
        target: &Word,
        lookup: &WordLookup,
    ) -> Result<AcceptedAttempt, SubmitError> {
        if self.buffer.len() != WORD_LENGTH {
            return Err(SubmitError::Incomplete(self.buffer.len()));
        }

        if !lookup.is_accepted(&self.buffer) {
            return Err(SubmitError::InvalidWord);
        }

        let word = Word::new(self.buffer.as_str()).expect("buffer holds 5 ASCII letters");
        self.buffer.clear();

        let feedback = classify(&word, target);
        self.keyboard.absorb(&word, &feedback);
        self.attempts.push(word.clone());
        self.feedback.push(feedback);

        Ok(AcceptedAttempt { word, feedback })
    }

    /// The in-progress attempt buffer
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Accepted attempts, oldest first
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Word] {
        &self.attempts
    }

    /// Feedback rows, parallel to [`Self::attempts`]
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[FeedbackRow] {
        &self.feedback
    }

    /// Number of attempts used
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.attempts.len()
    }

    /// Number of attempts left
    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Whether all attempts are used
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.attempts.len() >= MAX_ATTEMPTS
    }

    /// Best classification observed per letter
    #[inline]
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    fn target() -> Word {
        Word::new("HOUSE").unwrap()
    }

    fn type_word(ledger: &mut AttemptLedger, word: &str) {
        for ch in word.chars() {
            ledger.append_letter(ch);
        }
    }

    #[test]
    fn append_letter_uppercases() {
        let mut ledger = AttemptLedger::new();
        ledger.append_letter('h');
        ledger.append_letter('O');
        assert_eq!(ledger.buffer(), "HO");
    }

    #[test]
    fn append_letter_rejects_non_letters() {
        let mut ledger = AttemptLedger::new();
        ledger.append_letter('3');
        ledger.append_letter(' ');
        ledger.append_letter('!');
        assert_eq!(ledger.buffer(), "");
    }

    #[test]
    fn append_letter_stops_at_five() {
        let mut ledger = AttemptLedger::new();
        type_word(&mut ledger, "HOUSES");
        assert_eq!(ledger.buffer(), "HOUSE");
    }

    #[test]
    fn delete_letter_removes_last() {
        let mut ledger = AttemptLedger::new();
        type_word(&mut ledger, "HOU");
        ledger.delete_letter();
        assert_eq!(ledger.buffer(), "HO");

        ledger.delete_letter();
        ledger.delete_letter();
        ledger.delete_letter(); // No-op on empty buffer
        assert_eq!(ledger.buffer(), "");
    }

    #[test]
    fn submit_incomplete_leaves_state_unchanged() {
        let mut ledger = AttemptLedger::new();
        let lookup = WordLookup::unavailable();
        type_word(&mut ledger, "HOUS");

        let result = ledger.submit(&target(), &lookup);
        assert_eq!(result, Err(SubmitError::Incomplete(4)));
        assert_eq!(ledger.buffer(), "HOUS");
        assert_eq!(ledger.attempts_used(), 0);
    }

    #[test]
    fn submit_invalid_word_leaves_state_unchanged() {
        let mut ledger = AttemptLedger::new();
        let lookup = WordLookup::from_words(["HOUSE", "MANOR"]);
        type_word(&mut ledger, "ZZZZZ");

        let result = ledger.submit(&target(), &lookup);
        assert_eq!(result, Err(SubmitError::InvalidWord));
        // Buffer kept so the player can edit and resubmit
        assert_eq!(ledger.buffer(), "ZZZZZ");
        assert_eq!(ledger.attempts_used(), 0);
        assert_eq!(ledger.keyboard().known_letters(), 0);
    }

    #[test]
    fn submit_accepted_records_attempt_and_clears_buffer() {
        let mut ledger = AttemptLedger::new();
        let lookup = WordLookup::unavailable();
        type_word(&mut ledger, "HORSE");

        let accepted = ledger.submit(&target(), &lookup).unwrap();
        assert_eq!(accepted.word.text(), "HORSE");
        assert_eq!(
            accepted.feedback,
            [Correct, Correct, Absent, Present, Correct]
        );

        assert_eq!(ledger.buffer(), "");
        assert_eq!(ledger.attempts_used(), 1);
        assert_eq!(ledger.attempts_remaining(), 5);
        assert_eq!(ledger.attempts()[0].text(), "HORSE");
        assert_eq!(ledger.feedback()[0], accepted.feedback);
        assert_eq!(ledger.keyboard().classification(b'H'), Some(Correct));
    }

    #[test]
    fn submit_is_case_insensitive_against_lookup() {
        let mut ledger = AttemptLedger::new();
        let lookup = WordLookup::from_words(["horse"]);
        type_word(&mut ledger, "horse");

        assert!(ledger.submit(&target(), &lookup).is_ok());
    }

    #[test]
    fn ledger_caps_at_six_attempts() {
        let mut ledger = AttemptLedger::new();
        let lookup = WordLookup::unavailable();

        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut ledger, "MANOR");
            ledger.submit(&target(), &lookup).unwrap();
        }
        assert!(ledger.is_full());
        assert_eq!(ledger.attempts_remaining(), 0);

        // Letters no longer accumulate once the ledger is full
        ledger.append_letter('A');
        assert_eq!(ledger.buffer(), "");
    }
}
