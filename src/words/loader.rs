//! Word list loading utilities
//!
//! Loads the accepted-word dictionary from a file and converts embedded
//! constants into domain words.

use super::WordLookup;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load the accepted-word dictionary from a file, one word per line
///
/// Lines that are not valid 5-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened. Callers that
/// want the fail-open behavior should fall back to
/// [`WordLookup::unavailable`] on error.
pub fn load_accepted_words<P: AsRef<Path>>(path: P) -> io::Result<WordLookup> {
    let content = fs::read_to_string(path)?;
    Ok(WordLookup::from_words(content.lines()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use property_wordle::words::loader::words_from_slice;
/// use property_wordle::words::DAILY_WORDS;
///
/// let words = words_from_slice(&DAILY_WORDS);
/// assert_eq!(words.len(), DAILY_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
