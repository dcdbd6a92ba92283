//! Property Wordle
//!
//! A daily word-guessing game: six attempts to find the property word of the
//! day, with per-letter feedback after each attempt and a registration gate
//! that pauses play for unregistered players.
//!
//! # Quick Start
//!
//! ```rust
//! use property_wordle::core::Word;
//! use property_wordle::game::{GameSession, SessionConfig, SubmitResult};
//! use property_wordle::words::WordLookup;
//! use std::time::Instant;
//!
//! let mut session = GameSession::new(WordLookup::unavailable(), SessionConfig::default());
//! session.provide_target(Word::new("HOUSE").unwrap(), Instant::now());
//!
//! for ch in "HORSE".chars() {
//!     session.append_letter(ch);
//! }
//! let result = session.submit(Instant::now());
//! assert!(matches!(result, SubmitResult::Accepted { .. }));
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists and lookup
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
