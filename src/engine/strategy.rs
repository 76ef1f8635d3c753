//! Letter guessing strategies
//!
//! Automated players used to exercise the engine. They see the same public
//! state a human would, plus the remaining candidate words.

use super::GameState;

/// Letters a player may guess
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Pick an unguessed letter, or `None` if every letter has been tried
    fn next_letter(&self, game: &GameState) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among the remaining candidates
    Frequency(FrequencyStrategy),
    /// Uniformly random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn next_letter(&self, game: &GameState) -> Option<char> {
        match self {
            Self::Frequency(s) => s.next_letter(game),
            Self::Random(s) => s.next_letter(game),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

fn unguessed(game: &GameState) -> impl Iterator<Item = char> + '_ {
    ALPHABET
        .chars()
        .filter(|c| !game.guessed_letters().contains(c))
}

/// Guess the letter contained in the most remaining candidates
///
/// Ties go to the alphabetically first letter.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_letter(&self, game: &GameState) -> Option<char> {
        let mut best: Option<(char, usize)> = None;

        for letter in unguessed(game) {
            let count = game.words().iter().filter(|w| w.has_letter(letter)).count();
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((letter, count));
            }
        }

        best.map(|(letter, _)| letter)
    }
}

/// Guess a random letter that has not been tried
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_letter(&self, game: &GameState) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let letters: Vec<char> = unguessed(game).collect();
        letters.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameState {
        GameState::new(["deal", "teal", "real", "lamb", "tall"], 4, 10).unwrap()
    }

    #[test]
    fn frequency_picks_most_common_letter() {
        // 'a' and 'l' are in all five words; 'a' comes first
        let strategy = FrequencyStrategy;
        assert_eq!(strategy.next_letter(&game()), Some('a'));
    }

    #[test]
    fn frequency_skips_guessed_letters() {
        let mut game = game();
        game.record_guess('a').unwrap();

        // Engine keeps {deal, real, teal}; 'e' and 'l' tie, 'e' comes first
        let strategy = FrequencyStrategy;
        assert_eq!(strategy.next_letter(&game), Some('e'));
    }

    #[test]
    fn random_returns_unguessed_letter() {
        let mut game = game();
        game.record_guess('e').unwrap();

        let strategy = RandomStrategy;
        for _ in 0..20 {
            let letter = strategy.next_letter(&game).unwrap();
            assert!(letter.is_ascii_lowercase());
            assert_ne!(letter, 'e');
        }
    }

    #[test]
    fn exhausted_alphabet_yields_none() {
        let mut game = GameState::new(["zz"], 2, 26).unwrap();
        for letter in ALPHABET.chars().take(25) {
            game.record_guess(letter).unwrap();
        }
        game.record_guess('z').unwrap();

        assert_eq!(FrequencyStrategy.next_letter(&game), None);
        assert_eq!(RandomStrategy.next_letter(&game), None);
    }

    #[test]
    fn from_name_defaults_to_frequency() {
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("frequency").name(), "frequency");
        assert_eq!(StrategyType::from_name("bogus").name(), "frequency");
    }
}
