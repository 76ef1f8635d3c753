//! Stderr logging for the `log` facade, backed by `env_logger`

use log::LevelFilter;

/// Crate prefix that logging is enabled for
const LOG_TARGET: &str = "evil_hangman";

/// Map the number of `-v` flags to a level
#[must_use]
pub const fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logger configuration: only this crate's records, at `level`, to stderr
#[must_use]
pub fn builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_module(LOG_TARGET, level)
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr);
    builder
}

/// Install the stderr logger
///
/// # Errors
///
/// Returns an error if a logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    builder(level).try_init()
}
