//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckConfig, CheckResult, run_check};
pub use simple::run_simple;

use crate::game::{GameSession, SessionError, SubmitOutcome};

/// Type a whole word into the session and submit it
///
/// Line-based front ends use this instead of driving the cursor letter by
/// letter. On any rejection the guess buffer is left empty.
///
/// # Errors
/// Whatever the underlying `append_letter` or `submit` call rejects with.
pub fn enter_word(session: &mut GameSession, text: &str) -> Result<SubmitOutcome, SessionError> {
    session.clear_buffer()?;

    let result = text
        .chars()
        .try_for_each(|ch| session.append_letter(ch))
        .and_then(|()| session.submit());

    if result.is_err() && !session.status().is_terminal() {
        session.clear_buffer()?;
    }
    result
}
