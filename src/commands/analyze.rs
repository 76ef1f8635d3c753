//! Partition analysis command
//!
//! Shows every group a guessed letter would split the candidates into, and
//! which group the engine would keep.

use crate::core::{Pattern, Word};
use crate::engine::{GameState, rank_partitions};
use anyhow::{Context, Result, bail};

/// Number of example words shown per group
const SAMPLE_SIZE: usize = 5;

/// One group of the partition
pub struct PartitionSummary {
    pub pattern: Pattern,
    pub size: usize,
    pub revealed: usize,
    pub sample: Vec<String>,
}

/// Result of analyzing a letter
pub struct AnalysisResult {
    pub letter: char,
    pub current_pattern: Pattern,
    pub total_candidates: usize,
    pub partitions: Vec<PartitionSummary>,
}

impl AnalysisResult {
    /// The group the engine keeps
    #[must_use]
    pub fn winner(&self) -> Option<&PartitionSummary> {
        self.partitions.first()
    }
}

/// Apply each letter of `letters` as a guess, in order
///
/// # Errors
///
/// Returns an error if any guess is rejected by the engine.
pub fn apply_guesses(game: &mut GameState, letters: &str) -> Result<()> {
    for letter in letters.chars().filter(|c| !c.is_whitespace()) {
        game.record_guess(letter)
            .with_context(|| format!("could not apply guess '{letter}'"))?;
    }
    Ok(())
}

/// Rank the partitions `letter` would create in `game`
///
/// # Errors
///
/// Returns an error if the letter is not alphabetic, was already guessed, or
/// the game has no candidates.
pub fn analyze_letter(game: &GameState, letter: char) -> Result<AnalysisResult> {
    if !letter.is_ascii_alphabetic() {
        bail!("'{letter}' is not a letter");
    }
    let letter = letter.to_ascii_lowercase();
    if game.guessed_letters().contains(&letter) {
        bail!("'{letter}' has already been guessed");
    }

    let current_pattern = game.current_pattern()?.clone();
    let partitions = rank_partitions(game.pool(), letter, &current_pattern)
        .into_iter()
        .map(|partition| PartitionSummary {
            revealed: partition.pattern.count_of(letter),
            size: partition.len(),
            sample: partition
                .words
                .iter()
                .take(SAMPLE_SIZE)
                .map(Word::to_string)
                .collect(),
            pattern: partition.pattern,
        })
        .collect();

    Ok(AnalysisResult {
        letter,
        current_pattern,
        total_candidates: game.words().len(),
        partitions,
    })
}
