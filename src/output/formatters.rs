//! Formatting utilities for terminal output

use crate::core::{FeedbackRow, KeyboardState, LetterFeedback, Word};
use crate::game::WORD_LENGTH;
use colored::{ColoredString, Colorize};

/// Format a feedback row as emoji string
#[must_use]
pub fn feedback_to_emoji(row: &FeedbackRow) -> String {
    row.iter()
        .map(|f| match f {
            LetterFeedback::Correct => '🟩',
            LetterFeedback::Present => '🟨',
            LetterFeedback::Absent => '⬜',
        })
        .collect()
}

fn tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let cell = format!(" {letter} ");
    match feedback {
        LetterFeedback::Correct => cell.bold().white().on_green(),
        LetterFeedback::Present => cell.bold().white().on_yellow(),
        LetterFeedback::Absent => cell.bold().white().on_bright_black(),
    }
}

/// Render an accepted attempt as a row of colored tiles
#[must_use]
pub fn tile_row(word: &Word, row: &FeedbackRow) -> String {
    word.text()
        .chars()
        .zip(row.iter())
        .map(|(letter, &feedback)| format!("{} ", tile(letter, feedback)))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Render the in-progress buffer as a row of open tiles
///
/// Unfilled positions show as dots.
#[must_use]
pub fn buffer_row(buffer: &str) -> String {
    let mut cells: Vec<String> = buffer.chars().map(|c| format!("[{c}]")).collect();
    while cells.len() < WORD_LENGTH {
        cells.push("[.]".to_string());
    }
    cells.join(" ")
}

/// One-line keyboard summary: every tried letter with its best classification
#[must_use]
pub fn keyboard_summary(keyboard: &KeyboardState) -> String {
    let mut parts = Vec::new();
    for letter in b'A'..=b'Z' {
        if let Some(feedback) = keyboard.classification(letter) {
            let styled = match feedback {
                LetterFeedback::Correct => (letter as char).to_string().green().bold(),
                LetterFeedback::Present => (letter as char).to_string().yellow().bold(),
                LetterFeedback::Absent => (letter as char).to_string().bright_black(),
            };
            parts.push(styled.to_string());
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn emoji_for_mixed_row() {
        let row = classify(&word("HORSE"), &word("HOUSE"));
        assert_eq!(feedback_to_emoji(&row), "🟩🟩⬜🟨🟩");
    }

    #[test]
    fn emoji_for_perfect_row() {
        let target = word("HOUSE");
        let row = classify(&target, &target);
        assert_eq!(feedback_to_emoji(&row), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn buffer_row_pads_with_dots() {
        assert_eq!(buffer_row(""), "[.] [.] [.] [.] [.]");
        assert_eq!(buffer_row("HO"), "[H] [O] [.] [.] [.]");
        assert_eq!(buffer_row("HOUSE"), "[H] [O] [U] [S] [E]");
    }

    #[test]
    fn tile_row_covers_all_letters() {
        colored::control::set_override(false);
        let target = word("HOUSE");
        let row = classify(&word("HORSE"), &target);
        let rendered = tile_row(&word("HORSE"), &row);

        for letter in ["H", "O", "R", "S", "E"] {
            assert!(rendered.contains(letter), "missing {letter}");
        }
        colored::control::unset_override();
    }

    #[test]
    fn keyboard_summary_lists_tried_letters() {
        colored::control::set_override(false);
        let mut keyboard = KeyboardState::new();
        let attempt = word("HORSE");
        let row = classify(&attempt, &word("HOUSE"));
        keyboard.absorb(&attempt, &row);

        let summary = keyboard_summary(&keyboard);
        assert!(summary.contains('H'));
        assert!(summary.contains('R'));
        assert!(!summary.contains('Z'));
        colored::control::unset_override();
    }
}
