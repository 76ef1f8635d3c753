//! Revealed-letter pattern calculation and representation
//!
//! A pattern holds one slot per letter of the secret word. Each slot is either
//! hidden or reveals a letter. Patterns double as the grouping key when the
//! candidate pool is partitioned, so they are totally ordered: slots compare
//! position by position and a hidden slot sorts before any revealed letter.

use super::Word;
use std::fmt;

/// Glyph used for a hidden slot in the display form
pub const HIDDEN_GLYPH: char = '-';

/// Separator placed between slots in the display form
pub const SLOT_DELIMITER: char = ' ';

/// A single position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// Not revealed yet
    Hidden,
    /// Revealed letter
    Revealed(char),
}

impl Slot {
    #[inline]
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Sequence of slots describing what the player can see
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<Slot>);

impl Pattern {
    /// A pattern of `length` hidden slots
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self(vec![Slot::Hidden; length])
    }

    /// The pattern `word` would display after `guess`, given the pattern revealed so far
    ///
    /// Slots already revealed in `current` keep their letter. Remaining slots reveal
    /// `guess` where the word has it and stay hidden otherwise. Only the word's own
    /// letters and the pre-guess pattern are consulted.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Pattern, Word};
    ///
    /// let word = Word::new("fat").unwrap();
    /// let start = Pattern::hidden(3);
    ///
    /// let pattern = Pattern::for_word(&word, 'a', &start);
    /// assert_eq!(pattern.to_string(), "- a -");
    ///
    /// let pattern = Pattern::for_word(&word, 't', &pattern);
    /// assert_eq!(pattern.to_string(), "- a t");
    /// ```
    #[must_use]
    pub fn for_word(word: &Word, guess: char, current: &Self) -> Self {
        debug_assert_eq!(word.len(), current.len(), "word and pattern lengths differ");

        let slots = word
            .letters()
            .zip(&current.0)
            .map(|(letter, &slot)| match slot {
                Slot::Revealed(_) => slot,
                Slot::Hidden if letter == guess => Slot::Revealed(guess),
                Slot::Hidden => Slot::Hidden,
            })
            .collect();

        Self(slots)
    }

    /// Number of slots
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

    /// The slots in order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// True once no slot is hidden
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|slot| !slot.is_hidden())
    }

    /// Count of slots revealing `letter`
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.0
            .iter()
            .filter(|&&slot| slot == Slot::Revealed(letter))
            .count()
    }

    /// Count of hidden slots
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_hidden()).count()
    }

    /// Parse the display form, e.g. `"- a -"` or the compact `"-a-"`
    ///
    /// `-` and `_` denote hidden slots; whitespace between slots is ignored.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let spaced = Pattern::parse("- a -").unwrap();
    /// let compact = Pattern::parse("_a_").unwrap();
    /// assert_eq!(spaced, compact);
    /// assert_eq!(spaced.len(), 3);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut slots = Vec::new();

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let slot = match ch {
                '-' | '_' => Slot::Hidden,
                c if c.is_ascii_alphabetic() => Slot::Revealed(c.to_ascii_lowercase()),
                _ => return None,
            };
            slots.push(slot);
        }

        if slots.is_empty() {
            None
        } else {
            Some(Self(slots))
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{SLOT_DELIMITER}")?;
            }
            match slot {
                Slot::Hidden => write!(f, "{HIDDEN_GLYPH}")?,
                Slot::Revealed(letter) => write!(f, "{letter}")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn hidden_pattern_has_no_reveals() {
        let pattern = Pattern::hidden(4);
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.hidden_count(), 4);
        assert!(!pattern.is_complete());
        assert_eq!(pattern.to_string(), "- - - -");
    }

    #[test]
    fn reveals_every_occurrence_of_guess() {
        let pattern = Pattern::for_word(&word("banana"), 'a', &Pattern::hidden(6));
        assert_eq!(pattern.to_string(), "- a - a - a");
        assert_eq!(pattern.count_of('a'), 3);
    }

    #[test]
    fn miss_keeps_pattern_unchanged() {
        let current = Pattern::parse("- a -").unwrap();
        let pattern = Pattern::for_word(&word("fat"), 'z', &current);
        assert_eq!(pattern, current);
        assert_eq!(pattern.count_of('z'), 0);
    }

    #[test]
    fn revealed_slots_never_revert() {
        // The current pattern wins over the word's own letter in a revealed slot
        let current = Pattern::parse("f - -").unwrap();
        let pattern = Pattern::for_word(&word("fit"), 't', &current);
        assert_eq!(pattern.to_string(), "f - t");
        assert_eq!(pattern.slots()[0], Slot::Revealed('f'));
    }

    #[test]
    fn completes_when_last_slot_revealed() {
        let current = Pattern::parse("b o -").unwrap();
        let pattern = Pattern::for_word(&word("boy"), 'y', &current);
        assert!(pattern.is_complete());
        assert_eq!(pattern.hidden_count(), 0);
    }

    #[test]
    fn hidden_sorts_before_letters() {
        let blank = Pattern::parse("- - -").unwrap();
        let middle = Pattern::parse("- a -").unwrap();
        let first = Pattern::parse("a - -").unwrap();

        assert!(blank < middle);
        assert!(middle < first);
        assert!(Slot::Hidden < Slot::Revealed('a'));
        assert!(Slot::Revealed('a') < Slot::Revealed('b'));
    }

    #[test]
    fn parse_valid() {
        let p1 = Pattern::parse("- a -").unwrap();
        let p2 = Pattern::parse("_A_").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(
            p1.slots(),
            &[Slot::Hidden, Slot::Revealed('a'), Slot::Hidden]
        );
    }

    #[test]
    fn parse_invalid() {
        assert!(Pattern::parse("").is_none());
        assert!(Pattern::parse("   ").is_none());
        assert!(Pattern::parse("- 4 -").is_none());
        assert!("a*b".parse::<Pattern>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let pattern = Pattern::for_word(&word("letter"), 't', &Pattern::hidden(6));
        let text = pattern.to_string();
        assert_eq!(text, "- - t t - -");
        assert_eq!(text.parse::<Pattern>().unwrap(), pattern);
    }
}
