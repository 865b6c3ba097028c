//! Feedback check command
//!
//! Plays a fixed list of guesses against a chosen target and reports the rows.

use super::enter_word;
use crate::core::Word;
use crate::game::{Attempt, GameConfig, GameSession, GameStatus, Scoreboard, WordValidator};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Configuration for a check run
pub struct CheckConfig {
    pub target: String,
    pub guesses: Vec<String>,
    pub game: GameConfig,
}

impl CheckConfig {
    #[must_use]
    pub fn new(target: String, guesses: Vec<String>) -> Self {
        Self {
            target,
            guesses,
            game: GameConfig::default(),
        }
    }
}

/// A guess that was refused, with the reason
pub struct RejectedGuess {
    pub guess: String,
    pub reason: String,
}

/// Result of a check run
pub struct CheckResult {
    pub target: String,
    pub attempts: Vec<Attempt>,
    pub rejected: Vec<RejectedGuess>,
    /// Guesses never tried because the round had already ended
    pub unused: Vec<String>,
    pub status: GameStatus,
}

/// Play `config.guesses` in order against `config.target`
///
/// Guesses that are not permitted words are recorded as rejected and do not use
/// up an attempt, exactly as in interactive play.
///
/// # Errors
///
/// Returns an error if the target is not a well-formed word of the configured
/// length.
pub fn run_check(config: CheckConfig, validator: Arc<WordValidator>) -> Result<CheckResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    let mut session = GameSession::new(config.game, validator, Arc::new(Scoreboard::new()), target)
        .context("Cannot start a round for this target")?;

    let mut rejected = Vec::new();
    let mut unused = Vec::new();

    for guess in config.guesses {
        if session.status().is_terminal() {
            unused.push(guess);
            continue;
        }

        if let Err(err) = enter_word(&mut session, &guess) {
            rejected.push(RejectedGuess {
                guess,
                reason: err.to_string(),
            });
        }
    }

    Ok(CheckResult {
        target: session.target().text().to_string(),
        attempts: session.attempts().to_vec(),
        rejected,
        unused,
        status: session.status(),
    })
}
