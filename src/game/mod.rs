//! Game engine
//!
//! The guess-evaluation and game-progression machinery: attempt ledger,
//! progression state machine, elapsed-time tracking, invalid-attempt
//! throttle, registration gate, and the session that wires them together.

mod clock;
mod gate;
mod ledger;
mod progression;
mod score;
mod session;
mod throttle;

pub use clock::{CompletionTime, GameClock};
pub use gate::{GateConfig, RegistrationGate};
pub use ledger::{AcceptedAttempt, AttemptLedger, MAX_ATTEMPTS, SubmitError, WORD_LENGTH};
pub use progression::{GameOutcome, GameStatus, Progression};
pub use score::{MemorySink, RecordedScore, ScoreSink};
pub use session::{GameSession, SessionConfig, SessionEvent, SubmitResult};
pub use throttle::InvalidAttemptThrottle;
