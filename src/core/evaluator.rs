//! Guess evaluation
//!
//! Computes the per-letter feedback for a guess against a target, crediting
//! each target letter at most once.
//!
//! # Algorithm
//! 1. First pass: mark exact matches `Correct`. Those target positions are consumed.
//! 2. Collect the unconsumed target letters into a letter -> remaining count pool.
//! 3. Second pass, left to right over the remaining positions: a letter still in
//!    the pool is `Present` and takes one count from it, anything else is `Absent`.
//!
//! For every letter L this guarantees
//! `#Correct(L) + #Present(L) <= occurrences of L in the target`.

use super::{Feedback, LetterVerdict, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error returned when target and guess lengths differ
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("length mismatch: target has {target} letters, guess has {guess}")]
    LengthMismatch { target: usize, guess: usize },
}

/// Evaluate `guess` against `target`
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, LetterVerdict::*, Word};
///
/// let target = Word::new("crane").unwrap();
/// let guess = Word::new("caner").unwrap();
/// let feedback = evaluate(&target, &guess).unwrap();
///
/// assert_eq!(feedback.verdicts(), &[Correct, Present, Present, Present, Present]);
/// ```
pub fn evaluate(target: &Word, guess: &Word) -> Result<Feedback, EvaluateError> {
    if target.len() != guess.len() {
        return Err(EvaluateError::LengthMismatch {
            target: target.len(),
            guess: guess.len(),
        });
    }

    let target_letters = target.letters();
    let guess_letters = guess.letters();
    let mut verdicts = vec![LetterVerdict::Absent; guess_letters.len()];
    let mut remaining: FxHashMap<u8, usize> = FxHashMap::default();

    // First pass: exact matches, everything else goes into the pool
    for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
        if g == t {
            verdicts[i] = LetterVerdict::Correct;
        } else {
            *remaining.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: misplaced letters, consumed in index order
    for (i, &g) in guess_letters.iter().enumerate() {
        if verdicts[i] == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            verdicts[i] = LetterVerdict::Present;
            *count -= 1;
        }
    }

    Ok(Feedback::new(verdicts))
}
