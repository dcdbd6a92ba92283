//! Word data for the daily game
//!
//! Provides the embedded answer list, the accepted-word lookup, and the
//! daily target word sources.

mod embedded;
pub mod loader;
mod lookup;
mod source;

pub use embedded::{DAILY_WORD_COUNT, DAILY_WORDS};
pub use lookup::WordLookup;
pub use source::{DailyList, FixedWord, RandomPick, WordSource, word_for_date};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_count_matches_const() {
        assert_eq!(DAILY_WORDS.len(), DAILY_WORD_COUNT);
    }

    #[test]
    fn daily_words_are_valid() {
        // All answers should be 5 letters, uppercase
        for &word in &DAILY_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn daily_words_are_unique() {
        let set: std::collections::HashSet<_> = DAILY_WORDS.iter().collect();
        assert_eq!(set.len(), DAILY_WORDS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(DAILY_WORD_COUNT, 80, "Expected 80 daily answer words");
    }
}
