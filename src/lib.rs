//! Evil Hangman
//!
//! A hangman engine that never commits to a secret word. It keeps every
//! dictionary word consistent with the guesses so far and answers each guess
//! with whichever pattern leaves the most candidates alive.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::engine::GameState;
//!
//! let mut game = GameState::new(["boy", "fit", "fat", "fan"], 3, 5).unwrap();
//!
//! // "fat"/"fan" and "boy"/"fit" tie; the all-hidden pattern wins
//! assert_eq!(game.record_guess('a').unwrap(), 0);
//! assert_eq!(game.words().len(), 2);
//! assert_eq!(game.guesses_left(), 4);
//! ```

// Core domain types
pub mod core;

// Game engine and partition selection
pub mod engine;

// Game parameters
pub mod config;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
