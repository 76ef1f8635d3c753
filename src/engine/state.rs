//! Game state and the guess-recording state machine

use super::error::HangmanError;
use super::partition;
use crate::config::GameConfig;
use crate::core::{CandidatePool, Pattern, Word};
use std::collections::BTreeSet;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Candidates remain and the player still has guesses
    Active,
    /// Every slot of the pattern is revealed
    Won,
    /// Out of guesses while the word is still ambiguous
    Lost,
    /// No candidate word is left
    Exhausted,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// A single evil hangman game
///
/// Owns the candidate pool, the revealed pattern, the guessed letters and the
/// wrong-guess counter. `record_guess` is the only operation that mutates it.
#[derive(Debug, Clone)]
pub struct GameState {
    pool: CandidatePool,
    pattern: Pattern,
    guessed: BTreeSet<char>,
    wrong_guesses: usize,
    max_guesses: usize,
}

impl GameState {
    /// Start a game over the words of `dictionary` with `word_length` letters
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::InvalidLength` if `word_length` is zero.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::GameState;
    ///
    /// let mut game = GameState::new(["boy", "fit", "fat", "fan"], 3, 5).unwrap();
    /// assert_eq!(game.current_pattern().unwrap().to_string(), "- - -");
    ///
    /// let revealed = game.record_guess('a').unwrap();
    /// assert_eq!(revealed, 0);
    /// assert_eq!(game.guesses_left(), 4);
    /// ```
    pub fn new<I, S>(
        dictionary: I,
        word_length: usize,
        max_guesses: usize,
    ) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_config(dictionary, GameConfig::new(word_length, max_guesses))
    }

    /// Start a game from a [`GameConfig`]
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config`.
    pub fn from_config<I, S>(dictionary: I, config: GameConfig) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;

        let pool = CandidatePool::from_dictionary(dictionary, config.word_length);
        log::info!(
            "new game: {} candidates of length {}, {} guesses",
            pool.len(),
            config.word_length,
            config.max_guesses
        );

        Ok(Self {
            pool,
            pattern: Pattern::hidden(config.word_length),
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            max_guesses: config.max_guesses,
        })
    }

    /// Current candidate words
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<Word> {
        self.pool.words()
    }

    /// Current candidate pool
    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.pool.length()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    /// Wrong guesses the player may still make
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.max_guesses - self.wrong_guesses
    }

    /// Letters guessed so far, ascending
    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// The revealed pattern
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::NoCandidates` when the pool is empty, since no
    /// word backs any pattern.
    pub fn current_pattern(&self) -> Result<&Pattern, HangmanError> {
        if self.pool.is_empty() {
            return Err(HangmanError::NoCandidates);
        }
        Ok(&self.pattern)
    }

    /// The word the engine owns up to when the game ends
    ///
    /// Candidates are indistinguishable to the player, so the engine names the
    /// lexicographically first one.
    #[must_use]
    pub fn reveal_answer(&self) -> Option<&Word> {
        self.pool.iter().next()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.pool.is_empty() {
            GameStatus::Exhausted
        } else if self.pattern.is_complete() {
            GameStatus::Won
        } else if self.guesses_left() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    /// Record a guessed letter and return how many slots now show it
    ///
    /// The letter is lowercased. The engine keeps the largest group of candidates
    /// consistent with the guess; when that group reveals nothing the guess counts
    /// as wrong.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - `NoGuessesLeft` when no guesses remain
    /// - `NoCandidates` when the pool is empty
    /// - `AlreadyGuessed` when the letter was guessed before
    pub fn record_guess(&mut self, guess: char) -> Result<usize, HangmanError> {
        if self.guesses_left() < 1 {
            return Err(HangmanError::NoGuessesLeft);
        }
        if self.pool.is_empty() {
            return Err(HangmanError::NoCandidates);
        }

        let guess = guess.to_ascii_lowercase();
        if self.guessed.contains(&guess) {
            return Err(HangmanError::AlreadyGuessed(guess));
        }

        let before = self.pool.len();
        let winner = partition::select_from(self.pool.take(), guess, &self.pattern)
            .ok_or(HangmanError::NoCandidates)?;

        self.guessed.insert(guess);
        self.pattern = winner.pattern;
        self.pool.replace(winner.words);

        let revealed = self.pattern.count_of(guess);
        if revealed == 0 {
            self.wrong_guesses += 1;
        }

        log::debug!(
            "guess '{guess}': {before} -> {} candidates, pattern {}, {revealed} revealed",
            self.pool.len(),
            self.pattern
        );

        Ok(revealed)
    }
}
