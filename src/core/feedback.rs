//! Per-letter feedback calculation and keyboard tracking
//!
//! Feedback for an attempt is a per-position classification:
//! - `Correct` - letter occupies the same position in the target
//! - `Present` - letter occurs somewhere else in the target
//! - `Absent` - letter does not occur in the target
//!
//! Classification uses simple membership: a letter is marked `Present`
//! whenever the target contains it anywhere, without consuming occurrence
//! counts. An attempt with two copies of a letter the target holds once
//! marks both copies, and that behavior is relied upon by the keyboard fold.

use super::Word;
use rustc_hash::FxHashMap;

/// Classification of a single attempt letter
///
/// Variants are declared in rank order so `Ord` gives the dominance
/// relation used by [`KeyboardState`]: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    /// Letter does not occur in the target
    Absent,
    /// Letter occurs in the target at a different position
    Present,
    /// Letter is in the correct position
    Correct,
}

/// Feedback for all five positions of one attempt
pub type FeedbackRow = [LetterFeedback; 5];

/// Classify every position of `attempt` against `target`
///
/// # Examples
/// ```
/// use property_wordle::core::{LetterFeedback, Word, classify};
///
/// let attempt = Word::new("HORSE").unwrap();
/// let target = Word::new("HOUSE").unwrap();
/// let row = classify(&attempt, &target);
///
/// // H and O and E match positions, R is missing, S is elsewhere
/// assert_eq!(row[0], LetterFeedback::Correct);
/// assert_eq!(row[2], LetterFeedback::Absent);
/// assert_eq!(row[3], LetterFeedback::Present);
/// ```
#[must_use]
pub fn classify(attempt: &Word, target: &Word) -> FeedbackRow {
    let mut row = [LetterFeedback::Absent; 5];

    // Allow: Index needed to compare attempt[i] with target[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..5 {
        let letter = attempt.char_at(i);
        row[i] = if letter == target.char_at(i) {
            LetterFeedback::Correct
        } else if target.has_letter(letter) {
            LetterFeedback::Present
        } else {
            LetterFeedback::Absent
        };
    }

    row
}

/// Check whether a feedback row is a full match
#[inline]
#[must_use]
pub fn is_winning_row(row: &FeedbackRow) -> bool {
    row.iter().all(|&f| f == LetterFeedback::Correct)
}

/// Best classification observed per letter across all submitted attempts
///
/// Each letter holds the highest-ranked feedback ever seen for it. Folding
/// is upgrade-only: once a letter reaches `Correct` it never moves again,
/// and `Present` never drops back to `Absent`.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    keys: FxHashMap<u8, LetterFeedback>,
}

impl KeyboardState {
    /// Create an empty keyboard state (all letters unknown)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best classification observed for a letter, or `None` if unseen
    #[inline]
    #[must_use]
    pub fn classification(&self, letter: u8) -> Option<LetterFeedback> {
        self.keys.get(&letter).copied()
    }

    /// Fold one attempt's feedback into the keyboard
    ///
    /// Upgrades only: an entry changes when the new classification outranks
    /// the stored one under `Absent < Present < Correct` (unknown ranks
    /// below `Absent`).
    pub fn absorb(&mut self, attempt: &Word, row: &FeedbackRow) {
        for (i, &feedback) in row.iter().enumerate() {
            let letter = attempt.char_at(i);
            let entry = self.keys.entry(letter).or_insert(feedback);
            if feedback > *entry {
                *entry = feedback;
            }
        }
    }

    /// Number of letters with a known classification
    #[must_use]
    pub fn known_letters(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn classify_exact_match_is_all_correct() {
        for text in ["HOUSE", "LEASE", "AAAAA"] {
            let w = word(text);
            let row = classify(&w, &w);
            assert!(is_winning_row(&row));
        }
    }

    #[test]
    fn classify_disjoint_words() {
        // No letters of DEEDS occur in MANOR
        let row = classify(&word("DEEDS"), &word("MANOR"));
        assert_eq!(row, [Absent, Absent, Absent, Absent, Absent]);

        // Only the R of BRICK occurs in MANOR, at a different position
        let row = classify(&word("BRICK"), &word("MANOR"));
        assert_eq!(row, [Absent, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn classify_horse_against_house() {
        // H and O line up, R is missing entirely, S occurs at another
        // position, E lines up
        let row = classify(&word("HORSE"), &word("HOUSE"));
        assert_eq!(row, [Correct, Correct, Absent, Present, Correct]);
    }

    #[test]
    fn classify_correct_iff_position_matches() {
        let attempt = word("STORE");
        let target = word("STONE");
        let row = classify(&attempt, &target);

        for i in 0..5 {
            assert_eq!(
                row[i] == Correct,
                attempt.char_at(i) == target.char_at(i),
                "position {i}"
            );
        }
    }

    #[test]
    fn classify_duplicate_letters_not_consumed() {
        // HOUSE holds a single E, yet both E's of ERASE are marked:
        // membership is checked per position without count accounting
        let row = classify(&word("ERASE"), &word("HOUSE"));
        assert_eq!(row, [Present, Absent, Absent, Correct, Correct]);
    }

    #[test]
    fn classify_duplicate_attempt_letters_both_present() {
        // Target GRAND has one A; ATTIC's single A is present, and a
        // double-A attempt keeps both marks
        let row = classify(&word("AROMA"), &word("GRAND"));
        assert_eq!(row[0], Present);
        assert_eq!(row[4], Present);
    }

    #[test]
    fn keyboard_starts_unknown() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.classification(b'A'), None);
        assert_eq!(keyboard.known_letters(), 0);
    }

    #[test]
    fn keyboard_absorbs_feedback() {
        let mut keyboard = KeyboardState::new();
        let attempt = word("HORSE");
        let row = classify(&attempt, &word("HOUSE"));
        keyboard.absorb(&attempt, &row);

        assert_eq!(keyboard.classification(b'H'), Some(Correct));
        assert_eq!(keyboard.classification(b'O'), Some(Correct));
        assert_eq!(keyboard.classification(b'R'), Some(Absent));
        assert_eq!(keyboard.classification(b'S'), Some(Present));
        assert_eq!(keyboard.classification(b'E'), Some(Correct));
        assert_eq!(keyboard.classification(b'Z'), None);
    }

    #[test]
    fn keyboard_upgrades_but_never_downgrades() {
        let mut keyboard = KeyboardState::new();
        let target = word("HOUSE");

        // STORE puts S in position 0 (present) and E in position 4 (correct)
        let attempt = word("STORE");
        keyboard.absorb(&attempt, &classify(&attempt, &target));
        assert_eq!(keyboard.classification(b'S'), Some(Present));
        assert_eq!(keyboard.classification(b'E'), Some(Correct));

        // ROAST lands an S in position 3 (correct): upgrade
        let attempt = word("ROAST");
        keyboard.absorb(&attempt, &classify(&attempt, &target));
        assert_eq!(keyboard.classification(b'S'), Some(Correct));

        // A later present-only sighting must not downgrade the S or E
        let attempt = word("ERASE");
        keyboard.absorb(&attempt, &classify(&attempt, &target));
        assert_eq!(keyboard.classification(b'S'), Some(Correct));
        assert_eq!(keyboard.classification(b'E'), Some(Correct));
    }

    #[test]
    fn keyboard_rank_is_monotone_across_folds() {
        let mut keyboard = KeyboardState::new();
        let target = word("HOUSE");
        let attempts = ["ERASE", "STORE", "ROAST", "HORSE", "HOUSE"];

        let mut previous: FxHashMap<u8, LetterFeedback> = FxHashMap::default();
        for text in attempts {
            let attempt = word(text);
            keyboard.absorb(&attempt, &classify(&attempt, &target));

            for (&letter, &before) in &previous {
                let now = keyboard.classification(letter).unwrap();
                assert!(now >= before, "letter {} downgraded", letter as char);
            }
            for letter in b'A'..=b'Z' {
                if let Some(f) = keyboard.classification(letter) {
                    previous.insert(letter, f);
                }
            }
        }
    }

    #[test]
    fn feedback_dominance_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
