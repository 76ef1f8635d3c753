//! Evil Hangman - CLI
//!
//! Adversarial hangman with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{SimulationConfig, analyze_letter, apply_guesses, run_simple, run_simulation},
    config::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig},
    engine::{GameState, StrategyType},
    output::{logger, print_analysis_result, print_simulation_result},
    wordlists::{self, EMBEDDED, loader::available_lengths},
};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman where the computer never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Length of the secret word
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Number of wrong guesses allowed
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    guesses: usize,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show how a letter would split the candidate words
    Analyze {
        /// Letter to analyze
        letter: char,

        /// Letters to guess first, in order
        #[arg(short, long, default_value = "")]
        after: String,
    },

    /// Play automated guessers against the engine
    Simulate {
        /// Strategy: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,

        /// Number of games per word length
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Simulate every word length in the dictionary instead of --length
        #[arg(short, long)]
        all_lengths: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(logger::level_for_verbosity(cli.verbose))
        .context("failed to install logger")?;

    let dictionary = wordlists::load(&cli.wordlist)
        .with_context(|| format!("failed to load dictionary '{}'", cli.wordlist))?;
    let config = GameConfig::new(cli.length, cli.guesses);
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config),
        Commands::Simple => run_simple(&dictionary, config),
        Commands::Analyze { letter, after } => {
            run_analyze_command(&dictionary, config, letter, &after)
        }
        Commands::Simulate {
            strategy,
            count,
            all_lengths,
        } => run_simulate_command(&dictionary, config, &strategy, count, all_lengths),
    }
}

fn run_analyze_command(
    dictionary: &[String],
    config: GameConfig,
    letter: char,
    after: &str,
) -> Result<()> {
    let mut game = GameState::from_config(dictionary, config)?;
    apply_guesses(&mut game, after)?;

    let result = analyze_letter(&game, letter)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_simulate_command(
    dictionary: &[String],
    config: GameConfig,
    strategy_name: &str,
    count: usize,
    all_lengths: bool,
) -> Result<()> {
    let lengths = if all_lengths {
        available_lengths(dictionary).into_keys().collect()
    } else {
        vec![config.word_length]
    };
    if lengths.is_empty() {
        bail!("the dictionary is empty");
    }

    println!("\n{}", "═".repeat(70));
    println!(" Evil Hangman Simulation ");
    println!("{}", "═".repeat(70));
    println!("\nPlaying {count} games per length: {lengths:?}");
    println!("Strategy: {strategy_name}\n");

    let strategy = StrategyType::from_name(strategy_name);
    let sim_config = SimulationConfig {
        games: count,
        lengths,
        max_guesses: config.max_guesses,
        show_progress: true,
    };
    let result = run_simulation(&strategy, strategy.name(), dictionary, &sim_config)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &[String], config: GameConfig) -> Result<()> {
    use evil_hangman::interactive::{App, run_tui};

    let app = App::new(dictionary, config)?;
    run_tui(app)
}
