//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterOutcome, Word};
use colored::{ColoredString, Colorize};
use std::collections::BTreeSet;

/// Render one letter as a colored tile like " A "
#[must_use]
pub fn letter_tile(letter: char, outcome: LetterOutcome) -> ColoredString {
    let tile = format!(" {letter} ");
    match outcome {
        LetterOutcome::Correct => tile.black().on_green().bold(),
        LetterOutcome::Misplaced => tile.black().on_yellow().bold(),
        LetterOutcome::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(guess: &Word, result: &GuessResult) -> String {
    guess
        .chars()
        .iter()
        .zip(result.outcomes())
        .map(|(&letter, &outcome)| letter_tile(letter, outcome).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the absent-letter set as "A, B, C"
#[must_use]
pub fn absent_letters_list(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
