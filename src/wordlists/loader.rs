//! Dictionary loading utilities
//!
//! Provides functions to load dictionaries from files and summarize them.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary entries from a file
///
/// One word per line, see [`parse_dictionary`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_dictionary(&content);

    log::debug!("loaded {} entries from {}", words.len(), path.display());
    Ok(words)
}

/// Split dictionary text into lowercase words
///
/// Blank lines and lines starting with `#` are skipped, as are entries that are
/// not purely ASCII letters (`can't`, `o'er`).
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary("# words\nBoy\ncan't\nfit\n");
/// assert_eq!(words, vec!["boy", "fit"]);
/// ```
#[must_use]
pub fn parse_dictionary(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| {
            let usable = line.chars().all(|c| c.is_ascii_alphabetic());
            if !usable {
                log::trace!("skipping dictionary entry '{line}'");
            }
            usable
        })
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Count dictionary entries per word length
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::available_lengths;
///
/// let lengths = available_lengths(&["boy", "fit", "hangman"]);
/// assert_eq!(lengths.get(&3), Some(&2));
/// assert_eq!(lengths.get(&7), Some(&1));
/// ```
#[must_use]
pub fn available_lengths<S: AsRef<str>>(dictionary: &[S]) -> BTreeMap<usize, usize> {
    let mut lengths = BTreeMap::new();
    for word in dictionary {
        *lengths.entry(word.as_ref().chars().count()).or_insert(0) += 1;
    }
    lengths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let words = parse_dictionary("# header\nboy\n\n  fit  \n#fat\nfan\n");
        assert_eq!(words, vec!["boy", "fit", "fan"]);
    }

    #[test]
    fn parse_lowercases_and_skips_non_letters() {
        let words = parse_dictionary("Boy\nFIT\ncan't\no'er\nf4t\nfan\n");
        assert_eq!(words, vec!["boy", "fit", "fan"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_dictionary("").is_empty());
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_written_file() {
        let path = std::env::temp_dir().join("evil_hangman_loader_test.txt");
        fs::write(&path, "boy\nfit\n# comment\nfat\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["boy", "fit", "fat"]);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn lengths_are_counted() {
        let lengths = available_lengths(&["a", "bb", "cc", "ddd"]);
        assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![(1, 1), (2, 2), (3, 1)]);
    }

    #[test]
    fn embedded_dictionary_has_common_lengths() {
        use crate::wordlists::DICTIONARY;

        let lengths = available_lengths(DICTIONARY);
        for length in 3..=6 {
            assert!(lengths.get(&length).copied().unwrap_or(0) > 100);
        }
    }
}
