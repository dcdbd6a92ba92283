//! Score recording interface
//!
//! The session emits one result per completed, registered game; frontends
//! forward it to a [`ScoreSink`]. Real persistence lives behind this trait
//! in an external service.

use super::clock::CompletionTime;

/// A finished game's result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedScore {
    pub attempts: usize,
    pub time: CompletionTime,
    pub won: bool,
}

/// Receives the result of a completed, registered game
pub trait ScoreSink {
    fn record_result(&mut self, score: RecordedScore);
}

/// Collects scores in memory
///
/// Useful as a test double and for frontends that only need the last score.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub recorded: Vec<RecordedScore>,
}

impl ScoreSink for MemorySink {
    fn record_result(&mut self, score: RecordedScore) {
        self.recorded.push(score);
    }
}
