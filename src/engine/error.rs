//! Engine error types

use thiserror::Error;

/// Broad category of a [`HangmanError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a bad parameter
    InvalidArgument,
    /// The game is in a state where the call makes no sense
    InvalidState,
}

/// Contract violations reported by the game engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangmanError {
    #[error("word length must be at least 1")]
    InvalidLength,
    #[error("the letter '{0}' has already been guessed")]
    AlreadyGuessed(char),
    #[error("no guesses remain")]
    NoGuessesLeft,
    #[error("no candidate words remain")]
    NoCandidates,
}

impl HangmanError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength | Self::AlreadyGuessed(_) => ErrorKind::InvalidArgument,
            Self::NoGuessesLeft | Self::NoCandidates => ErrorKind::InvalidState,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(HangmanError::InvalidLength.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            HangmanError::AlreadyGuessed('e').kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(HangmanError::NoGuessesLeft.kind(), ErrorKind::InvalidState);
        assert_eq!(HangmanError::NoCandidates.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn messages() {
        assert_eq!(
            HangmanError::AlreadyGuessed('e').to_string(),
            "the letter 'e' has already been guessed"
        );
    }
}
