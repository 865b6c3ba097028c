//! Round configuration

use thiserror::Error;

/// Default word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of attempts per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Configuration for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_attempts: usize,
}

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be at least 1")]
    ZeroWordLength,
    #[error("a round needs at least one attempt")]
    ZeroAttempts,
}

impl GameConfig {
    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    pub const fn new(word_length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.word_length(), 5);
        assert_eq!(config.max_attempts(), 6);
    }

    #[test]
    fn zero_values_rejected() {
        assert_eq!(GameConfig::new(0, 6), Err(ConfigError::ZeroWordLength));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::ZeroAttempts));
    }

    #[test]
    fn custom_values_kept() {
        let config = GameConfig::new(4, 8).unwrap();
        assert_eq!(config.word_length(), 4);
        assert_eq!(config.max_attempts(), 8);
    }
}
