//! Core domain types for the puzzle
//!
//! Words and guess feedback. Everything here is pure and performs no I/O.

mod feedback;
mod word;

pub use feedback::{GuessResult, LetterOutcome};
pub use word::{WORD_LENGTH, Word, WordError};
