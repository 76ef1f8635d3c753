//! Simple interactive CLI mode
//!
//! Line-based hangman game without TUI

use crate::config::GameConfig;
use crate::engine::{GameState, GameStatus};
use crate::output::formatters::{gallows, letters_display};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Number of candidate words listed by the `:words` command
const WORDS_SHOWN: usize = 10;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output,
/// or if the configuration is invalid.
pub fn run_simple(dictionary: &[String], config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(dictionary, config, &mut stdin.lock(), &mut stdout.lock())
}

/// Play games reading commands from `input` until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or invalid configuration.
pub fn play_session<R: BufRead, W: Write>(
    dictionary: &[String],
    config: GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Evil Hangman - Interactive Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess one letter at a time. I have a word in mind... probably.")?;
    writeln!(out, "Commands: ':quit' to exit, ':new' for a new game, ':words' to peek\n")?;

    let mut game = GameState::from_config(dictionary, config)?;

    if game.status() == GameStatus::Exhausted {
        writeln!(
            out,
            "{}",
            format!("No {}-letter words in the dictionary.", config.word_length).red()
        )?;
        return Ok(());
    }

    loop {
        if game.status().is_over() {
            print_result(&game, out)?;

            match prompt(input, out, "Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game = GameState::from_config(dictionary, config)?;
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }

        print_board(&game, out)?;

        let Some(line) = prompt(input, out, "Your guess")? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":new" | ":n" => {
                game = GameState::from_config(dictionary, config)?;
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            ":words" | ":w" => {
                print_words(&game, out)?;
                continue;
            }
            _ => {}
        }

        let mut letters = line.chars();
        let (Some(letter), None) = (letters.next(), letters.next()) else {
            writeln!(out, "{}", "❌ Enter a single letter.".red())?;
            continue;
        };
        if !letter.is_ascii_alphabetic() {
            writeln!(out, "{}", "❌ Only letters a-z can be guessed.".red())?;
            continue;
        }

        match game.record_guess(letter) {
            Ok(0) => writeln!(
                out,
                "{}",
                format!("Sorry, there are no {}'s.", letter.to_ascii_lowercase()).yellow()
            )?,
            Ok(1) => writeln!(
                out,
                "{}",
                format!("Yes, there is one {}.", letter.to_ascii_lowercase()).green()
            )?,
            Ok(n) => writeln!(
                out,
                "{}",
                format!("Yes, there are {n} {}'s.", letter.to_ascii_lowercase()).green()
            )?,
            Err(e) => writeln!(out, "{}", format!("❌ {e}").red())?,
        }
    }
}

fn print_board<W: Write>(game: &GameState, out: &mut W) -> Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(out, "{}", gallows(game.wrong_guesses(), game.max_guesses()))?;
    writeln!(
        out,
        "Word:     {}",
        game.current_pattern()?.to_string().bright_white().bold()
    )?;
    writeln!(out, "Guessed:  {}", letters_display(game.guessed_letters()))?;
    writeln!(out, "Left:     {} guesses", game.guesses_left())?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    Ok(())
}

fn print_words<W: Write>(game: &GameState, out: &mut W) -> Result<()> {
    let words = game.words();
    writeln!(out, "\n{} candidates remaining:", words.len())?;
    for word in words.iter().take(WORDS_SHOWN) {
        writeln!(out, "  • {word}")?;
    }
    if words.len() > WORDS_SHOWN {
        writeln!(out, "  … and {} more", words.len() - WORDS_SHOWN)?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_result<W: Write>(game: &GameState, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match game.status() {
        GameStatus::Won => {
            writeln!(
                out,
                "{}",
                "    🎉  You beat me! The word was indeed:".bright_green().bold()
            )?;
        }
        GameStatus::Lost => {
            writeln!(out, "{}", gallows(game.wrong_guesses(), game.max_guesses()))?;
            writeln!(out, "{}", "    💀  You lose. The word was:".bright_red().bold())?;
        }
        GameStatus::Active | GameStatus::Exhausted => {}
    }
    if let Some(answer) = game.reveal_answer() {
        writeln!(out, "    {}", answer.text().to_uppercase().bright_yellow().bold())?;
    }
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;
    Ok(())
}

/// Read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary() -> Vec<String> {
        ["boy", "fit", "fat", "fan"]
            .iter()
            .map(|w| (*w).to_string())
            .collect()
    }

    fn session(config: GameConfig, input: &str) -> String {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        play_session(&dictionary(), config, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn wrong_guess_is_reported() {
        let out = session(GameConfig::new(3, 5), "a\n:quit\n");
        assert!(out.contains("Sorry, there are no a's."));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn repeated_guess_is_rejected() {
        let out = session(GameConfig::new(3, 5), "a\nA\n:quit\n");
        assert!(out.contains("already been guessed"));
    }

    #[test]
    fn invalid_input_is_rejected() {
        let out = session(GameConfig::new(3, 5), "ab\n7\n:quit\n");
        assert!(out.contains("Enter a single letter."));
        assert!(out.contains("Only letters a-z can be guessed."));
    }

    #[test]
    fn losing_reveals_a_word() {
        // Budget of one: 'a' is wrong and ends the game
        let out = session(GameConfig::new(3, 1), "a\nno\n");
        assert!(out.contains("You lose"));
        assert!(out.contains("BOY"));
    }

    #[test]
    fn winning_single_word_game() {
        let dictionary = vec!["ox".to_string()];
        let mut input = Cursor::new(b"o\nx\nn\n".to_vec());
        let mut out = Vec::new();
        play_session(&dictionary, GameConfig::new(2, 3), &mut input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("You beat me!"));
        assert!(out.contains("OX"));
    }

    #[test]
    fn zero_budget_game_is_over_before_any_guess() {
        let out = session(GameConfig::new(3, 0), "yes\nno\n");

        assert!(!out.contains("Your guess"));
        assert!(!out.contains("no guesses remain"));
        assert_eq!(out.matches("You lose").count(), 2);
        assert!(out.contains("New game started"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn peek_lists_candidates() {
        let out = session(GameConfig::new(3, 5), ":words\n:quit\n");
        assert!(out.contains("4 candidates remaining"));
        assert!(out.contains("fan"));
    }

    #[test]
    fn missing_length_ends_session() {
        let out = session(GameConfig::new(9, 5), "");
        assert!(out.contains("No 9-letter words"));
    }

    #[test]
    fn end_of_input_quits() {
        let out = session(GameConfig::new(3, 5), "");
        assert!(out.contains("Thanks for playing"));
    }
}
