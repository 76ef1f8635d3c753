//! Core domain types for hangman
//!
//! Words, revealed-letter patterns and the candidate pool. Everything here is
//! pure and independent of game flow.

mod pattern;
mod pool;
mod word;

pub use pattern::{HIDDEN_GLYPH, Pattern, SLOT_DELIMITER, Slot};
pub use pool::CandidatePool;
pub use word::{Word, WordError};
