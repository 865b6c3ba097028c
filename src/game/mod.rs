//! Game layer
//!
//! Dictionary validation, round configuration, the session state machine and
//! best-time scoring.

mod config;
mod scoring;
mod session;
mod validator;

pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig};
pub use scoring::{RoundTimer, ScoreSnapshot, Scoreboard, format_clock};
pub use session::{Attempt, GameSession, GameStatus, SessionError, SubmitOutcome};
pub use validator::{ValidationError, WordValidator};
