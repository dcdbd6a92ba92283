//! Daily target word selection
//!
//! The game consumes the target through the [`WordSource`] trait so an
//! unavailable word (remote store down, no word scheduled for today) is
//! representable; the session stays in its not-ready state until a source
//! yields a word.

use super::embedded::DAILY_WORDS;
use crate::core::Word;
use chrono::{Datelike, Local, NaiveDate};
use rand::prelude::IndexedRandom;

/// Supplies the target word for the current game instance
pub trait WordSource {
    /// Today's target word, or `None` when unavailable
    fn today(&self) -> Option<Word>;
}

/// Pick the daily word for a given date from the embedded list
///
/// Uses the day-of-month index rule, so the word changes each day and
/// every player sees the same word on the same date.
///
/// # Panics
/// Will not panic - every embedded word is a valid 5-letter word.
#[must_use]
pub fn word_for_date(date: NaiveDate) -> Word {
    let index = date.day() as usize % DAILY_WORDS.len();
    Word::new(DAILY_WORDS[index]).expect("embedded words are valid")
}

/// Embedded daily list with the day-of-month selection rule
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyList;

impl WordSource for DailyList {
    fn today(&self) -> Option<Word> {
        Some(word_for_date(Local::now().date_naive()))
    }
}

/// Random pick from the embedded list
///
/// Used for practice games; a fresh word every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPick;

impl WordSource for RandomPick {
    fn today(&self) -> Option<Word> {
        DAILY_WORDS
            .choose(&mut rand::rng())
            .map(|&s| Word::new(s).expect("embedded words are valid"))
    }
}

/// A fixed target word, for practice against a chosen word
#[derive(Debug, Clone)]
pub struct FixedWord(pub Word);

impl WordSource for FixedWord {
    fn today(&self) -> Option<Word> {
        Some(self.0.clone())
    }
}
