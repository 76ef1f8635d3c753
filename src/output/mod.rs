//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and logging.

pub mod display;
pub mod formatters;
pub mod logger;

pub use display::{print_analysis_result, print_simulation_result};
