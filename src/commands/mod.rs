//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, PartitionSummary, analyze_letter, apply_guesses};
pub use simple::{play_session, run_simple};
pub use simulate::{
    GameOutcome, LengthSummary, SimulationConfig, SimulationResult, play_game, run_simulation,
};
