//! Game configuration

use crate::engine::HangmanError;

/// Default secret word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of wrong guesses allowed
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Parameters for starting a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_guesses: usize) -> Self {
        Self {
            word_length,
            max_guesses,
        }
    }

    /// Check the parameters a game can be built from
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::InvalidLength` if the word length is zero.
    pub const fn validate(&self) -> Result<(), HangmanError> {
        if self.word_length < 1 {
            return Err(HangmanError::InvalidLength);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH, DEFAULT_MAX_GUESSES)
    }
}
