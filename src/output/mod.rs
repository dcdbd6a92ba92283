//! Terminal output formatting

pub mod formatters;

pub use formatters::{buffer_row, feedback_to_emoji, keyboard_summary, tile_row};
