//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{FeedbackRow, KeyboardState, LetterFeedback, classify, is_winning_row};
pub use word::{Word, WordError};
