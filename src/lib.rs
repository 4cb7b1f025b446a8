//! Palpite
//!
//! A five-letter word-guessing puzzle with a terminal UI and a line-based mode.
//!
//! # Quick Start
//!
//! ```rust
//! use palpite::core::{GuessResult, LetterOutcome, Word};
//! use palpite::game::{Difficulty, Game, RoundStatus};
//! use palpite::wordlists::WordList;
//!
//! // Evaluate a guess directly
//! let target = Word::new("abrir").unwrap();
//! let guess = Word::from_guess("rrxxr").unwrap();
//! let result = GuessResult::evaluate(&guess, &target);
//! assert_eq!(result.outcomes()[4], LetterOutcome::Correct);
//!
//! // Or play a round
//! let words = WordList::from_slice(&["ABRIR"]).unwrap();
//! let mut game = Game::new(words, Difficulty::Hard);
//! let evaluation = game.submit_guess("abrir").unwrap();
//! assert_eq!(evaluation.status, RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round state machine and controller
pub mod game;

// Word lists
pub mod wordlists;

// Persisted stats and preferences
pub mod store;

// Input line and session policy shared by the front-ends
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Runtime settings
pub mod config;

// Log subscriber setup
pub mod logging;
