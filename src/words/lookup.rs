//! Accepted-word lookup
//!
//! Answers whether a candidate string is an accepted attempt word. Backed by
//! a set loaded once at startup. When the backing set is unavailable the
//! lookup fails open and accepts every candidate, so play is never blocked
//! on a missing dictionary.

use rustc_hash::FxHashSet;

/// Set-backed accepted-word check with fail-open fallback
#[derive(Debug, Clone, Default)]
pub struct WordLookup {
    accepted: Option<FxHashSet<String>>,
}

impl WordLookup {
    /// Create a lookup with no backing set
    ///
    /// Every candidate is accepted until a real set is available.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { accepted: None }
    }

    /// Create a lookup from an iterator of accepted words
    ///
    /// Words are normalized to uppercase; entries that are not exactly
    /// 5 ASCII letters are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted = words
            .into_iter()
            .filter_map(|w| {
                let upper = w.as_ref().trim().to_uppercase();
                (upper.len() == 5 && upper.bytes().all(|b| b.is_ascii_uppercase()))
                    .then_some(upper)
            })
            .collect();

        Self {
            accepted: Some(accepted),
        }
    }

    /// Check whether a candidate is an accepted attempt word
    ///
    /// Case-insensitive. Returns `true` for everything while the backing
    /// set is unavailable.
    #[must_use]
    pub fn is_accepted(&self, candidate: &str) -> bool {
        match &self.accepted {
            Some(set) => set.contains(&candidate.to_uppercase()),
            None => true,
        }
    }

    /// Whether a backing set is loaded
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.accepted.is_some()
    }

    /// Number of accepted words, or `None` while unavailable
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.accepted.as_ref().map(FxHashSet::len)
    }

    /// Whether the backing set is loaded but empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}
