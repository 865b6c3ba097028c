//! Core domain types for the game
//!
//! Words, per-letter feedback and the evaluation algorithm. Everything here is
//! pure and has no knowledge of sessions, dictionaries or terminals.

mod evaluator;
mod feedback;
mod word;

pub use evaluator::{EvaluateError, evaluate};
pub use feedback::{Feedback, LetterVerdict};
pub use word::{Word, WordError};
