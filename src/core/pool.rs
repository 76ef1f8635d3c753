//! Candidate pool of still-possible secret words

use super::Word;
use std::collections::BTreeSet;

/// Working set of words that are still consistent with every guess so far
///
/// All words share the pool's length. Iteration is lexicographic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    length: usize,
    words: BTreeSet<Word>,
}

impl CandidatePool {
    /// Keep exactly the dictionary entries of `length` characters
    ///
    /// Entries are kept as given and only exact duplicates collapse. An empty
    /// result is a valid pool.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::CandidatePool;
    ///
    /// let pool = CandidatePool::from_dictionary(["boy", "Fit", "fit", "fit", "ox"], 3);
    /// assert_eq!(pool.len(), 3);
    /// ```
    pub fn from_dictionary<I, S>(dictionary: I, length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        let words: BTreeSet<Word> = dictionary
            .into_iter()
            .inspect(|_| seen += 1)
            .filter(|entry| entry.as_ref().chars().count() == length)
            .filter_map(|entry| Word::new(entry.as_ref()).ok())
            .collect();

        log::debug!(
            "candidate pool: kept {} of {seen} dictionary entries with length {length}",
            words.len()
        );

        Self { length, words }
    }

    /// Length every word in the pool has
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Read-only view of the current words
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<Word> {
        &self.words
    }

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

    /// Iterate words in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Replace the contents with a narrowed subset
    pub(crate) fn replace(&mut self, words: BTreeSet<Word>) {
        debug_assert!(words.iter().all(|w| w.len() == self.length));
        self.words = words;
    }

    /// Move the words out, leaving the pool empty
    pub(crate) fn take(&mut self) -> BTreeSet<Word> {
        std::mem::take(&mut self.words)
    }
}
