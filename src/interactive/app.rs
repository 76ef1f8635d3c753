//! TUI application state and logic

use crate::config::GameConfig;
use crate::engine::{GameState, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Maximum messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a [String],
    pub config: GameConfig,
    pub game: GameState,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub letter: char,
    pub revealed: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    /// Build the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(dictionary: &'a [String], config: GameConfig) -> Result<Self> {
        let game = GameState::from_config(dictionary, config)?;

        let mut app = Self {
            dictionary,
            config,
            game,
            history: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.announce_start();
        Ok(app)
    }

    fn announce_start(&mut self) {
        if self.game.status() == GameStatus::Exhausted {
            self.input_mode = InputMode::GameOver;
            self.add_message(
                &format!(
                    "No {}-letter words in the dictionary. Press 'q' to quit.",
                    self.config.word_length
                ),
                MessageStyle::Error,
            );
        } else {
            self.add_message(
                &format!(
                    "I'm thinking of a {}-letter word. Type a letter to guess.",
                    self.config.word_length
                ),
                MessageStyle::Info,
            );
            // A zero guess budget is lost before the first key press
            self.check_game_over();
        }
    }

    pub fn handle_guess(&mut self, letter: char) {
        if !letter.is_ascii_alphabetic() {
            self.add_message("Only letters a-z can be guessed!", MessageStyle::Error);
            return;
        }

        let candidates_before = self.game.words().len();
        match self.game.record_guess(letter) {
            Ok(revealed) => {
                let letter = letter.to_ascii_lowercase();
                self.history.push(HistoryEntry {
                    letter,
                    revealed,
                    candidates_before,
                    candidates_after: self.game.words().len(),
                });

                if revealed == 0 {
                    self.add_message(
                        &format!("No '{letter}' in the word."),
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("Found {revealed} '{letter}'!"),
                        MessageStyle::Success,
                    );
                }

                self.check_game_over();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn check_game_over(&mut self) {
        let status = self.game.status();
        if !status.is_over() {
            return;
        }

        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        let answer = self
            .game
            .reveal_answer()
            .map(|w| w.text().to_uppercase())
            .unwrap_or_default();

        match status {
            GameStatus::Won => {
                self.stats.games_won += 1;
                self.add_message(
                    &format!("🎉 You got it: {answer}! Press 'n' for a new game."),
                    MessageStyle::Success,
                );
            }
            GameStatus::Lost => {
                self.add_message(
                    &format!("💀 Out of guesses. The word was {answer}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Active | GameStatus::Exhausted => {}
        }
    }

    pub fn new_game(&mut self) {
        match GameState::from_config(self.dictionary, self.config) {
            Ok(game) => {
                self.game = game;
                self.history.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.announce_start();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match (self.input_mode, code) {
            (_, KeyCode::Char('c')) if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (_, KeyCode::Esc) | (InputMode::GameOver, KeyCode::Char('q')) => {
                self.should_quit = true;
            }
            (InputMode::GameOver, KeyCode::Char('n')) => self.new_game(),
            (InputMode::Guessing, KeyCode::Char(c)) => self.handle_guess(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<String> {
        ["boy", "fit", "fat", "fan"]
            .iter()
            .map(|w| (*w).to_string())
            .collect()
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
    }

    #[test]
    fn guess_records_history() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::new(3, 5)).unwrap();

        press(&mut app, 'a');

        assert_eq!(app.history.len(), 1);
        let entry = &app.history[0];
        assert_eq!(entry.letter, 'a');
        assert_eq!(entry.revealed, 0);
        assert_eq!(entry.candidates_before, 4);
        assert_eq!(entry.candidates_after, 2);
    }

    #[test]
    fn repeated_guess_shows_error() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::new(3, 5)).unwrap();

        press(&mut app, 'a');
        press(&mut app, 'a');

        assert_eq!(app.history.len(), 1);
        let last = app.messages.last().unwrap();
        assert!(matches!(last.style, MessageStyle::Error));
        assert!(last.text.contains("already been guessed"));
    }

    #[test]
    fn losing_switches_to_game_over() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::new(3, 1)).unwrap();

        press(&mut app, 'a');

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        // Letters are ignored until a new game starts
        press(&mut app, 'e');
        assert_eq!(app.history.len(), 1);

        press(&mut app, 'n');
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
        assert_eq!(app.game.words().len(), 4);
    }

    #[test]
    fn winning_counts_a_win() {
        let dictionary = vec!["ox".to_string()];
        let mut app = App::new(&dictionary, GameConfig::new(2, 3)).unwrap();

        press(&mut app, 'o');
        press(&mut app, 'x');

        assert_eq!(app.game.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn q_is_a_guess_while_playing() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::new(3, 5)).unwrap();

        press(&mut app, 'q');
        assert!(!app.should_quit);
        assert!(app.game.guessed_letters().contains(&'q'));

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::new(3, 5)).unwrap();

        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
        assert!(app.game.guessed_letters().is_empty());
    }

    #[test]
    fn missing_length_starts_in_game_over() {
        let dictionary = dictionary();
        let app = App::new(&dictionary, GameConfig::new(8, 5)).unwrap();
        assert_eq!(app.input_mode, InputMode::GameOver);
    }

    #[test]
    fn zero_budget_starts_in_game_over() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::new(3, 0)).unwrap();

        assert_eq!(app.game.status(), GameStatus::Lost);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("Out of guesses")));

        // 'n' is reachable and starts another game with the same budget
        press(&mut app, 'n');
        assert!(app.history.is_empty());
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 2);

        press(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn non_letters_are_rejected() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::new(3, 5)).unwrap();

        press(&mut app, '1');
        assert!(app.history.is_empty());
        assert!(app.game.guessed_letters().is_empty());
    }
}
