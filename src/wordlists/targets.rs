//! Random target selection

use crate::core::Word;
use rand::Rng;
use thiserror::Error;

/// Error type for an unusable target list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("no {0}-letter target words available")]
    NoTargets(usize),
}

/// Curated list of words a round may be played against
#[derive(Debug, Clone)]
pub struct TargetPicker {
    targets: Vec<Word>,
}

impl TargetPicker {
    /// Keep the words of `word_length` letters
    ///
    /// # Errors
    /// Returns `TargetError::NoTargets` if nothing of that length remains.
    pub fn new(word_length: usize, words: Vec<Word>) -> Result<Self, TargetError> {
        let targets: Vec<Word> = words
            .into_iter()
            .filter(|w| w.len() == word_length)
            .collect();

        if targets.is_empty() {
            return Err(TargetError::NoTargets(word_length));
        }

        Ok(Self { targets })
    }

    /// Pick one target uniformly at random
    #[must_use]
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        // `new` refuses an empty list, so the range is never empty
        let index = rng.random_range(0..self.targets.len());
        self.targets[index].clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
