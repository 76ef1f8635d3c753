//! Dictionary word representation
//!
//! A Word is a non-empty token kept exactly as the dictionary spells it. Its
//! length is the number of characters.

use std::fmt;
use thiserror::Error;

/// A candidate secret word
///
/// Ordering and equality are lexicographic on the text, which gives the
/// candidate pool a deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is stored unchanged; `"Fit"` and `"fit"` are different words.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the text is empty.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("Fan").unwrap();
    /// assert_eq!(word.text(), "Fan");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert_ne!(word, Word::new("fan").unwrap());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; words have at least one character
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters of the word in order
    #[inline]
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.text.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
