//! Partition-and-select for the adversarial guess response
//!
//! Every candidate is keyed by the pattern it would show for the guessed letter.
//! The engine then keeps the biggest group, which leaves the player the largest
//! number of words still to rule out.

use crate::core::{CandidatePool, Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A group of candidates that all produce the same pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub pattern: Pattern,
    pub words: BTreeSet<Word>,
}

impl Partition {
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

/// Ranking between two groups: larger groups rank higher, and between groups
/// of equal size the smaller pattern ranks higher.
///
/// `Ordering::Greater` means `a` is preferred over `b`.
#[must_use]
pub fn compare_groups(a: (&Pattern, usize), b: (&Pattern, usize)) -> Ordering {
    a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0))
}

/// Group `words` by the pattern each would produce after `guess`
///
/// Patterns are computed in parallel; grouping consumes the words so no
/// candidate is cloned.
fn group_by_pattern(
    words: BTreeSet<Word>,
    guess: char,
    current: &Pattern,
) -> FxHashMap<Pattern, BTreeSet<Word>> {
    let words: Vec<Word> = words.into_iter().collect();
    let patterns: Vec<Pattern> = words
        .par_iter()
        .map(|word| Pattern::for_word(word, guess, current))
        .collect();

    let mut groups: FxHashMap<Pattern, BTreeSet<Word>> = FxHashMap::default();
    for (word, pattern) in words.into_iter().zip(patterns) {
        groups.entry(pattern).or_default().insert(word);
    }

    groups
}

/// Pick the winning group out of `words`
///
/// Returns `None` only when `words` is empty.
pub(crate) fn select_from(
    words: BTreeSet<Word>,
    guess: char,
    current: &Pattern,
) -> Option<Partition> {
    let groups = group_by_pattern(words, guess, current);
    log::trace!("guess '{guess}' split candidates into {} groups", groups.len());

    groups
        .into_iter()
        .max_by(|(pa, wa), (pb, wb)| compare_groups((pa, wa.len()), (pb, wb.len())))
        .map(|(pattern, words)| Partition { pattern, words })
}

/// Select the group the engine commits to for `guess`
///
/// The pool itself is left untouched; the returned partition holds copies of
/// the winning words.
///
/// # Examples
/// ```
/// use evil_hangman::core::{CandidatePool, Pattern};
/// use evil_hangman::engine::select_partition;
///
/// let pool = CandidatePool::from_dictionary(["boy", "fit", "fat", "fan"], 3);
/// let winner = select_partition(&pool, 'a', &Pattern::hidden(3)).unwrap();
///
/// // Two groups of two; the all-hidden pattern sorts first and wins the tie
/// assert_eq!(winner.pattern.to_string(), "- - -");
/// assert_eq!(winner.len(), 2);
/// ```
#[must_use]
pub fn select_partition(
    pool: &CandidatePool,
    guess: char,
    current: &Pattern,
) -> Option<Partition> {
    select_from(pool.words().clone(), guess, current)
}

/// Every group `guess` would create, best ranked first
///
/// The first entry is the partition [`select_partition`] returns.
#[must_use]
pub fn rank_partitions(pool: &CandidatePool, guess: char, current: &Pattern) -> Vec<Partition> {
    let mut ranked: Vec<Partition> = group_by_pattern(pool.words().clone(), guess, current)
        .into_iter()
        .map(|(pattern, words)| Partition { pattern, words })
        .collect();

    ranked.sort_by(|a, b| compare_groups((&b.pattern, b.len()), (&a.pattern, a.len())));
    ranked
}
