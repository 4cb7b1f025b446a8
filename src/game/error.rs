//! Errors surfaced by guess submission

use crate::core::WORD_LENGTH;
use thiserror::Error;

/// Reason a guess was rejected
///
/// A rejected guess never changes the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess is not exactly five characters; no attempt is consumed
    #[error("guess must be exactly {WORD_LENGTH} characters, got {0}")]
    InvalidLength(usize),

    /// The round is already won or lost
    #[error("the round is already over")]
    RoundAlreadyOver,
}
