//! Evil hangman engine
//!
//! Game state, the partition selector that answers each guess, and automated
//! guessing strategies.

mod error;
pub mod partition;
mod state;
pub mod strategy;

pub use error::{ErrorKind, HangmanError};
pub use partition::{Partition, rank_partitions, select_partition};
pub use state::{GameState, GameStatus};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
