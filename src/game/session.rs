//! Round state machine
//!
//! A `GameSession` owns one round: the target, the completed attempts, the
//! in-progress guess buffer and the terminal status. Front ends drive it with
//! direct method calls and read back state through the accessors.
//!
//! Every rejected operation leaves the session exactly as it was.

use super::config::GameConfig;
use super::scoring::{RoundTimer, Scoreboard};
use super::validator::{ValidationError, WordValidator};
use crate::core::{EvaluateError, Feedback, LetterVerdict, Word, WordError, evaluate};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Terminal flag of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A completed, immutable guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    word: Word,
    feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// (letter, verdict) pairs in position order
    pub fn tiles(&self) -> impl Iterator<Item = (char, LetterVerdict)> + '_ {
        self.word
            .letters()
            .iter()
            .map(|&b| char::from(b))
            .zip(self.feedback.verdicts().iter().copied())
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }
}

/// Errors returned by session transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("'{0}' is not in the word list")]
    InvalidWord(String),
    #[error("the round is over; start a new game")]
    SessionTerminated,
    #[error("the round was given up; start a new game")]
    RoundAbandoned,
    #[error("the guess already has {0} letters")]
    BufferFull(usize),
    #[error("there is no letter to remove")]
    BufferEmpty,
    #[error("not enough letters: {len} of {expected}")]
    IncompleteGuess { len: usize, expected: usize },
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("target must have {expected} letters, got {actual}")]
    TargetLength { expected: usize, actual: usize },
    #[error("word list holds {actual}-letter words but the round uses {expected}")]
    ValidatorLength { expected: usize, actual: usize },
    #[error(transparent)]
    MalformedGuess(#[from] WordError),
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub status: GameStatus,
    /// 1-based row number of the attempt just added
    pub attempt_number: usize,
    /// Set when the round was won faster than any earlier round
    pub new_best: bool,
}

/// One round of the game
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    validator: Arc<WordValidator>,
    scoreboard: Arc<Scoreboard>,
    target: Word,
    attempts: Vec<Attempt>,
    buffer: String,
    status: GameStatus,
    /// Set by `give_up`; an abandoned round cannot be retried
    abandoned: bool,
    timer: RoundTimer,
}

impl GameSession {
    /// Start a round against `target`
    ///
    /// # Errors
    /// `TargetLength` if the target does not match the configured word length,
    /// `ValidatorLength` if the word list was built for another length.
    pub fn new(
        config: GameConfig,
        validator: Arc<WordValidator>,
        scoreboard: Arc<Scoreboard>,
        target: Word,
    ) -> Result<Self, SessionError> {
        check_target_length(&config, &target)?;
        if validator.word_length() != config.word_length() {
            return Err(SessionError::ValidatorLength {
                expected: config.word_length(),
                actual: validator.word_length(),
            });
        }

        tracing::debug!(
            word_length = config.word_length(),
            max_attempts = config.max_attempts(),
            "round started"
        );

        Ok(Self {
            config,
            validator,
            scoreboard,
            target,
            attempts: Vec::with_capacity(config.max_attempts()),
            buffer: String::with_capacity(config.word_length()),
            status: GameStatus::InProgress,
            abandoned: false,
            timer: RoundTimer::start(),
        })
    }

    /// Add a letter at the cursor
    ///
    /// # Errors
    /// `SessionTerminated`, `InvalidLetter` for non-ASCII-letters, or
    /// `BufferFull` when the row already has N letters.
    pub fn append_letter(&mut self, ch: char) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        if !ch.is_ascii_alphabetic() {
            return Err(SessionError::InvalidLetter(ch));
        }
        if self.buffer.len() >= self.config.word_length() {
            return Err(SessionError::BufferFull(self.buffer.len()));
        }
        self.buffer.push(ch.to_ascii_lowercase());
        Ok(())
    }

    /// Remove the letter before the cursor
    ///
    /// # Errors
    /// `SessionTerminated`, or `BufferEmpty` at column 0.
    pub fn remove_letter(&mut self) -> Result<char, SessionError> {
        self.ensure_in_progress()?;
        self.buffer.pop().ok_or(SessionError::BufferEmpty)
    }

    /// Discard the whole in-progress row
    ///
    /// # Errors
    /// `SessionTerminated` once the round is over.
    pub fn clear_buffer(&mut self) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        self.buffer.clear();
        Ok(())
    }

    /// Submit the buffered guess
    ///
    /// # Errors
    /// `SessionTerminated`, `IncompleteGuess` when fewer than N letters are
    /// buffered, or `InvalidWord` when the guess is not a permitted word. None
    /// of these change the session.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        self.ensure_in_progress()?;

        let expected = self.config.word_length();
        if self.buffer.len() < expected {
            return Err(SessionError::IncompleteGuess {
                len: self.buffer.len(),
                expected,
            });
        }

        let guess = Word::new(self.buffer.as_str())?;
        match self.validator.validate(&guess) {
            Ok(()) => {}
            Err(ValidationError::NotInWordList(word)) => {
                tracing::debug!(%word, "rejected guess");
                return Err(SessionError::InvalidWord(word));
            }
            Err(ValidationError::LengthMismatch { expected, actual }) => {
                return Err(SessionError::ValidatorLength { expected, actual });
            }
        }

        let feedback = evaluate(&self.target, &guess)?;
        let solved = feedback.is_solved();
        tracing::debug!(guess = %guess, feedback = %feedback, "guess evaluated");

        self.attempts.push(Attempt {
            word: guess,
            feedback,
        });
        self.buffer.clear();

        let attempt_number = self.attempts.len();
        let mut new_best = false;

        if solved {
            self.status = GameStatus::Won;
            self.timer.stop();
            new_best = self.scoreboard.record_win(self.timer.elapsed(), attempt_number);
            tracing::info!(attempts = attempt_number, "round won");
        } else if attempt_number >= self.config.max_attempts() {
            self.status = GameStatus::Lost;
            self.timer.stop();
            self.scoreboard.record_loss();
            tracing::info!(answer = %self.target, "round lost");
        }

        Ok(SubmitOutcome {
            status: self.status,
            attempt_number,
            new_best,
        })
    }

    /// Start a fresh round against `new_target`; allowed from any state
    ///
    /// # Errors
    /// `TargetLength` if the new target has the wrong length; the session is
    /// left untouched in that case.
    pub fn reset(&mut self, new_target: Word) -> Result<(), SessionError> {
        check_target_length(&self.config, &new_target)?;
        self.target = new_target;
        self.clear_grid();
        self.timer = RoundTimer::start();
        tracing::debug!("round reset");
        Ok(())
    }

    /// Clear the board and play the same target again
    ///
    /// Allowed while the round is running or after it was lost by running out
    /// of attempts. The round clock keeps counting from where it was.
    ///
    /// # Errors
    /// `SessionTerminated` after a win, `RoundAbandoned` after `give_up`.
    pub fn retry(&mut self) -> Result<(), SessionError> {
        match self.status {
            GameStatus::Won => return Err(SessionError::SessionTerminated),
            GameStatus::Lost if self.abandoned => return Err(SessionError::RoundAbandoned),
            GameStatus::InProgress | GameStatus::Lost => {}
        }
        self.clear_grid();
        self.timer.resume();
        tracing::debug!("round retried");
        Ok(())
    }

    /// Abandon the round as lost and reveal the target
    ///
    /// # Errors
    /// `SessionTerminated` if the round is already over.
    pub fn give_up(&mut self) -> Result<&Word, SessionError> {
        self.ensure_in_progress()?;
        self.status = GameStatus::Lost;
        self.abandoned = true;
        self.timer.stop();
        self.scoreboard.record_loss();
        tracing::info!(answer = %self.target, "round abandoned");
        Ok(&self.target)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The hidden word; front ends reveal it only once the round is over
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// (row, column) of the cursor on the board
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.attempts.len(), self.buffer.len())
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts() - self.attempts.len()
    }

    /// Time spent on this round so far
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Best verdict seen for each guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, LetterVerdict> {
        let mut hints: FxHashMap<u8, LetterVerdict> = FxHashMap::default();
        for attempt in &self.attempts {
            for (&letter, &verdict) in attempt
                .word
                .letters()
                .iter()
                .zip(attempt.feedback.verdicts())
            {
                hints
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(verdict))
                    .or_insert(verdict);
            }
        }
        hints
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::SessionTerminated);
        }
        Ok(())
    }

    fn clear_grid(&mut self) {
        self.attempts.clear();
        self.buffer.clear();
        self.status = GameStatus::InProgress;
        self.abandoned = false;
    }
}

fn check_target_length(config: &GameConfig, target: &Word) -> Result<(), SessionError> {
    if target.len() == config.word_length() {
        Ok(())
    } else {
        Err(SessionError::TargetLength {
            expected: config.word_length(),
            actual: target.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(target: &str) -> GameSession {
        let validator = Arc::new(WordValidator::from_strs(
            5,
            &["crane", "slate", "speed", "erase", "allow"],
        ));
        GameSession::new(
            GameConfig::default(),
            validator,
            Arc::new(Scoreboard::new()),
            Word::new(target).unwrap(),
        )
        .unwrap()
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for ch in word.chars() {
            session.append_letter(ch).unwrap();
        }
    }

    #[test]
    fn cursor_tracks_buffer_and_rows() {
        let mut s = session("speed");
        assert_eq!(s.cursor(), (0, 0));
        type_word(&mut s, "cra");
        assert_eq!(s.cursor(), (0, 3));
        assert_eq!(s.remove_letter(), Ok('a'));
        assert_eq!(s.buffer(), "cr");
    }

    #[test]
    fn letters_are_lowercased() {
        let mut s = session("speed");
        s.append_letter('C').unwrap();
        assert_eq!(s.buffer(), "c");
    }

    #[test]
    fn non_letters_rejected() {
        let mut s = session("speed");
        assert_eq!(s.append_letter('3'), Err(SessionError::InvalidLetter('3')));
        assert_eq!(s.append_letter('é'), Err(SessionError::InvalidLetter('é')));
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn full_buffer_rejects_more_letters() {
        let mut s = session("speed");
        type_word(&mut s, "crane");
        assert_eq!(s.append_letter('x'), Err(SessionError::BufferFull(5)));
        assert_eq!(s.buffer(), "crane");
    }

    #[test]
    fn remove_on_empty_buffer_rejected() {
        let mut s = session("speed");
        assert_eq!(s.remove_letter(), Err(SessionError::BufferEmpty));
    }

    #[test]
    fn incomplete_guess_rejected() {
        let mut s = session("speed");
        type_word(&mut s, "cra");
        assert_eq!(
            s.submit(),
            Err(SessionError::IncompleteGuess {
                len: 3,
                expected: 5
            })
        );
        assert_eq!(s.buffer(), "cra");
    }

    #[test]
    fn letter_hints_keep_best_verdict() {
        let mut s = session("speed");
        type_word(&mut s, "erase");
        s.submit().unwrap();
        type_word(&mut s, "slate");
        s.submit().unwrap();

        let hints = s.letter_hints();
        assert_eq!(hints.get(&b's'), Some(&LetterVerdict::Correct));
        assert_eq!(hints.get(&b'e'), Some(&LetterVerdict::Present));
        assert_eq!(hints.get(&b'r'), Some(&LetterVerdict::Absent));
        assert_eq!(hints.get(&b'z'), None);
    }

    #[test]
    fn attempt_tiles_pair_letters_and_verdicts() {
        let mut s = session("speed");
        type_word(&mut s, "erase");
        s.submit().unwrap();

        let tiles: Vec<_> = s.attempts()[0].tiles().collect();
        assert_eq!(tiles[0], ('e', LetterVerdict::Present));
        assert_eq!(tiles[1], ('r', LetterVerdict::Absent));
        assert_eq!(tiles.len(), 5);
    }

    #[test]
    fn retry_rejected_after_win() {
        let mut s = session("allow");
        type_word(&mut s, "allow");
        s.submit().unwrap();

        assert_eq!(s.retry(), Err(SessionError::SessionTerminated));
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.attempts().len(), 1);
    }

    #[test]
    fn retry_rejected_after_give_up() {
        let mut s = session("allow");
        s.give_up().unwrap();

        assert_eq!(s.retry(), Err(SessionError::RoundAbandoned));
        assert_eq!(s.status(), GameStatus::Lost);
    }

    #[test]
    fn reset_clears_abandoned_round() {
        let mut s = session("allow");
        s.give_up().unwrap();
        s.reset(Word::new("crane").unwrap()).unwrap();

        type_word(&mut s, "slate");
        s.submit().unwrap();
        assert_eq!(s.retry(), Ok(()));
    }

    #[test]
    fn mismatched_validator_rejected() {
        let validator = Arc::new(WordValidator::from_strs(4, &["cats"]));
        let result = GameSession::new(
            GameConfig::default(),
            validator,
            Arc::new(Scoreboard::new()),
            Word::new("crane").unwrap(),
        );
        assert!(matches!(
            result,
            Err(SessionError::ValidatorLength {
                expected: 5,
                actual: 4
            })
        ));
    }
}
