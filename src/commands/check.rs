//! Check command
//!
//! Evaluates a single guess against a given target without starting a round.

use crate::core::{GuessResult, Word};
use anyhow::{Context, Result};

/// Result of checking a guess
#[derive(Debug)]
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub result: GuessResult,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if the target is not a five-letter word or the guess is
/// not five characters.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult> {
    let target = Word::new(target).with_context(|| format!("invalid target '{target}'"))?;
    let guess = Word::from_guess(guess).with_context(|| format!("invalid guess '{guess}'"))?;
    let result = GuessResult::evaluate(&guess, &target);

    Ok(CheckResult {
        target,
        guess,
        result,
    })
}
