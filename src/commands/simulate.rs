//! Simulation command
//!
//! Plays automated guessers against the engine to see how long it holds out.

use crate::config::GameConfig;
use crate::engine::{GameState, GameStatus, HangmanError, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome of a single automated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub letters_guessed: usize,
    pub wrong_guesses: usize,
    pub remaining_candidates: usize,
    pub answer: Option<String>,
}

/// Aggregate results for one word length
#[derive(Debug, Clone)]
pub struct LengthSummary {
    pub word_length: usize,
    pub starting_candidates: usize,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_letters: f64,
    pub average_wrong: f64,
    pub average_remaining: f64,
    pub answers: BTreeMap<String, usize>,
}

impl LengthSummary {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Result of a simulation run
pub struct SimulationResult {
    pub strategy: String,
    pub max_guesses: usize,
    pub lengths: Vec<LengthSummary>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.lengths.iter().map(|l| l.games).sum()
    }
}

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub lengths: Vec<usize>,
    pub max_guesses: usize,
    pub show_progress: bool,
}

/// Play one game until it ends or the strategy runs out of letters
///
/// # Errors
///
/// Returns an error if the game cannot be created or a guess is rejected.
pub fn play_game<S: Strategy>(
    strategy: &S,
    dictionary: &[String],
    config: GameConfig,
) -> Result<GameOutcome, HangmanError> {
    let mut game = GameState::from_config(dictionary, config)?;

    while !game.status().is_over() {
        let Some(letter) = strategy.next_letter(&game) else {
            break;
        };
        game.record_guess(letter)?;
    }

    Ok(GameOutcome {
        status: game.status(),
        letters_guessed: game.guessed_letters().len(),
        wrong_guesses: game.wrong_guesses(),
        remaining_candidates: game.words().len(),
        answer: game.reveal_answer().map(ToString::to_string),
    })
}

/// Run `config.games` games per word length
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a game fails.
pub fn run_simulation<S: Strategy>(
    strategy: &S,
    strategy_name: &str,
    dictionary: &[String],
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    let start = Instant::now();
    let total = (config.games * config.lengths.len()) as u64;

    let pb = if config.show_progress {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut lengths = Vec::with_capacity(config.lengths.len());

    for &word_length in &config.lengths {
        let game_config = GameConfig::new(word_length, config.max_guesses);
        let starting_candidates = GameState::from_config(dictionary, game_config)?
            .words()
            .len();
        pb.set_message(format!("length {word_length}"));

        let mut outcomes = Vec::with_capacity(config.games);
        for _ in 0..config.games {
            outcomes.push(play_game(strategy, dictionary, game_config)?);
            pb.inc(1);
        }

        lengths.push(summarize(word_length, starting_candidates, &outcomes));
    }

    pb.finish_with_message("Complete!");

    Ok(SimulationResult {
        strategy: strategy_name.to_string(),
        max_guesses: config.max_guesses,
        lengths,
        duration: start.elapsed(),
    })
}

fn summarize(
    word_length: usize,
    starting_candidates: usize,
    outcomes: &[GameOutcome],
) -> LengthSummary {
    let games = outcomes.len();
    let wins = outcomes
        .iter()
        .filter(|o| o.status == GameStatus::Won)
        .count();
    let losses = outcomes
        .iter()
        .filter(|o| o.status == GameStatus::Lost)
        .count();

    let mut answers = BTreeMap::new();
    for answer in outcomes.iter().filter_map(|o| o.answer.clone()) {
        *answers.entry(answer).or_insert(0) += 1;
    }

    let average = |f: fn(&GameOutcome) -> usize| {
        if games == 0 {
            0.0
        } else {
            outcomes.iter().map(f).sum::<usize>() as f64 / games as f64
        }
    };

    LengthSummary {
        word_length,
        starting_candidates,
        games,
        wins,
        losses,
        average_letters: average(|o| o.letters_guessed),
        average_wrong: average(|o| o.wrong_guesses),
        average_remaining: average(|o| o.remaining_candidates),
        answers,
    }
}
