//! Per-letter feedback for a guess
//!
//! Each guess position receives one verdict:
//! - `Correct`: right letter, right position (green)
//! - `Present`: letter is in the target elsewhere (yellow)
//! - `Absent`: letter is not available in the target (gray)

use std::fmt;

/// Verdict for a single guess position
///
/// Ordered by strength so the best verdict seen for a letter is `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Emoji square used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Verdicts for every position of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterVerdict>);

impl Feedback {
    #[must_use]
    pub fn new(verdicts: Vec<LetterVerdict>) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Number of positions carrying `verdict`
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterVerdict::*};
    ///
    /// let feedback = Feedback::new(vec![Correct, Present, Absent, Correct, Present]);
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterVerdict::{Absent, Correct, Present};

    #[test]
    fn solved_feedback() {
        let feedback = Feedback::new(vec![Correct; 5]);
        assert!(feedback.is_solved());
        assert_eq!(feedback.count(Correct), 5);
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn one_miss_is_not_solved() {
        let feedback = Feedback::new(vec![Correct, Correct, Absent]);
        assert!(!feedback.is_solved());
        assert_eq!(feedback.to_emoji(), "🟩🟩⬜");
    }

    #[test]
    fn empty_feedback_is_not_solved() {
        assert!(!Feedback::new(Vec::new()).is_solved());
    }

    #[test]
    fn display_uses_codes() {
        let feedback = Feedback::new(vec![Present, Absent, Correct]);
        assert_eq!(feedback.to_string(), "Y-G");
        assert_eq!(feedback.count(Present), 1);
        assert_eq!(feedback.count(Absent), 1);
    }

    #[test]
    fn verdict_ordering_reflects_strength() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!([Absent, Correct, Present].into_iter().max(), Some(Correct));
    }
}
