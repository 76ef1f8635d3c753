//! Dictionaries for hangman
//!
//! Provides an embedded dictionary compiled into the binary and file loading.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

/// Name selecting the embedded dictionary on the command line
pub const EMBEDDED: &str = "embedded";

/// Resolve a dictionary selector: [`EMBEDDED`] or a path to a word file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load(selector: &str) -> std::io::Result<Vec<String>> {
    if selector == EMBEDDED {
        Ok(DICTIONARY.iter().map(|&w| w.to_string()).collect())
    } else {
        loader::load_from_file(selector)
    }
}
