//! Dictionary membership check
//!
//! Holds the permitted guesses for one word length in a hash set. Shared
//! read-only between sessions behind an `Arc`.

use crate::core::Word;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Why a candidate was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected a {expected}-letter word, got {actual} letters")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("'{0}' is not in the word list")]
    NotInWordList(String),
}

/// Set of permitted guess words of a fixed length
#[derive(Debug, Clone)]
pub struct WordValidator {
    word_length: usize,
    words: FxHashSet<Word>,
}

impl WordValidator {
    /// Build a validator, keeping only words of `word_length` letters
    pub fn new<I>(word_length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut skipped = 0usize;
        let words: FxHashSet<Word> = words
            .into_iter()
            .filter(|w| {
                let keep = w.len() == word_length;
                if !keep {
                    skipped += 1;
                }
                keep
            })
            .collect();

        tracing::debug!(
            word_length,
            accepted = words.len(),
            skipped,
            "built word validator"
        );

        Self { word_length, words }
    }

    /// Convenience constructor from string slices; malformed entries are dropped
    #[must_use]
    pub fn from_strs(word_length: usize, words: &[&str]) -> Self {
        Self::new(word_length, words.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// True iff `candidate` is a permitted guess
    ///
    /// A candidate of the wrong length is simply not in the set, so this returns
    /// `false`. Use [`validate`](Self::validate) to tell the two cases apart.
    #[must_use]
    pub fn is_valid(&self, candidate: &Word) -> bool {
        candidate.len() == self.word_length && self.words.contains(candidate)
    }

    /// Check a candidate, reporting a length mismatch separately from a miss
    ///
    /// # Errors
    /// `LengthMismatch` if the candidate has the wrong length, `NotInWordList`
    /// if it is the right length but not permitted.
    pub fn validate(&self, candidate: &Word) -> Result<(), ValidationError> {
        if candidate.len() != self.word_length {
            return Err(ValidationError::LengthMismatch {
                expected: self.word_length,
                actual: candidate.len(),
            });
        }
        if !self.words.contains(candidate) {
            return Err(ValidationError::NotInWordList(candidate.text().to_string()));
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> WordValidator {
        WordValidator::from_strs(5, &["crane", "slate", "speed", "cat", "planet"])
    }

    #[test]
    fn keeps_only_configured_length() {
        let v = validator();
        assert_eq!(v.len(), 3);
        assert_eq!(v.word_length(), 5);
    }

    #[test]
    fn accepts_members() {
        let v = validator();
        assert!(v.is_valid(&Word::new("crane").unwrap()));
        assert!(v.is_valid(&Word::new("SLATE").unwrap()));
    }

    #[test]
    fn rejects_non_members() {
        let v = validator();
        assert!(!v.is_valid(&Word::new("zzzzz").unwrap()));
        assert_eq!(
            v.validate(&Word::new("zzzzz").unwrap()),
            Err(ValidationError::NotInWordList("zzzzz".to_string()))
        );
    }

    #[test]
    fn wrong_length_is_false_but_reported_distinctly() {
        let v = validator();
        let short = Word::new("cat").unwrap();
        assert!(!v.is_valid(&short));
        assert_eq!(
            v.validate(&short),
            Err(ValidationError::LengthMismatch {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn validate_ok_for_member() {
        assert_eq!(validator().validate(&Word::new("speed").unwrap()), Ok(()));
    }

    #[test]
    fn empty_validator() {
        let v = WordValidator::from_strs(5, &[]);
        assert!(v.is_empty());
        assert!(!v.is_valid(&Word::new("crane").unwrap()));
    }
}
