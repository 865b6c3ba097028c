//! Word Guess
//!
//! A Wordle-style word guessing game. The library holds the rules; the binary
//! adds a terminal board, a line-based mode and a feedback checker.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_game::core::{LetterVerdict, Word, evaluate};
//! use wordle_game::game::{GameConfig, GameSession, GameStatus, Scoreboard, WordValidator};
//!
//! // Feedback for a single guess
//! let target = Word::new("speed").unwrap();
//! let guess = Word::new("erase").unwrap();
//! let feedback = evaluate(&target, &guess).unwrap();
//! assert_eq!(feedback.verdicts()[1], LetterVerdict::Absent);
//!
//! // A full round
//! let validator = Arc::new(WordValidator::from_strs(5, &["speed", "erase"]));
//! let mut session = GameSession::new(
//!     GameConfig::default(),
//!     validator,
//!     Arc::new(Scoreboard::new()),
//!     target,
//! )
//! .unwrap();
//!
//! for ch in "speed".chars() {
//!     session.append_letter(ch).unwrap();
//! }
//! assert_eq!(session.submit().unwrap().status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Validation, sessions and scoring
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic logging
pub mod logging;
