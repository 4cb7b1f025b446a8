//! Round state machine
//!
//! A round starts `InProgress` and ends `Won` (the guess equals the target)
//! or `Lost` (the attempt limit is reached without a match). Both end states
//! are terminal. The only mutation is [`Round::submit_guess`], which either
//! fully applies or leaves the round untouched.

use super::{Difficulty, GameError};
use crate::core::{GuessResult, Word, WordError};
use std::collections::BTreeSet;
use tracing::debug;

/// Progress of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// Whether no further guesses are accepted
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub result: GuessResult,
    pub status: RoundStatus,
}

/// One play-through from word selection to win or loss
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    difficulty: Difficulty,
    guesses: Vec<Word>,
    results: Vec<GuessResult>,
    absent_letters: BTreeSet<char>,
    status: RoundStatus,
}

impl Round {
    /// Start a round for `target` at `difficulty`
    #[must_use]
    pub const fn new(target: Word, difficulty: Difficulty) -> Self {
        Self {
            target,
            difficulty,
            guesses: Vec::new(),
            results: Vec::new(),
            absent_letters: BTreeSet::new(),
            status: RoundStatus::InProgress,
        }
    }

    /// Evaluate a guess and advance the round
    ///
    /// The guess is case-insensitive. The length is checked before the round
    /// status, and neither rejection consumes an attempt.
    ///
    /// # Errors
    /// - `GameError::InvalidLength` if `raw` is not exactly five characters
    /// - `GameError::RoundAlreadyOver` if the round is won or lost
    ///
    /// # Examples
    /// ```
    /// use palpite::core::Word;
    /// use palpite::game::{Difficulty, Round, RoundStatus};
    ///
    /// let mut round = Round::new(Word::new("ABRIR").unwrap(), Difficulty::Hard);
    /// let evaluation = round.submit_guess("abrir").unwrap();
    ///
    /// assert!(evaluation.result.is_perfect());
    /// assert_eq!(evaluation.status, RoundStatus::Won);
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<Evaluation, GameError> {
        let guess = Word::from_guess(raw).map_err(|e| match e {
            WordError::InvalidLength(len) => GameError::InvalidLength(len),
            // Guesses only fail on length
            WordError::InvalidCharacters => GameError::InvalidLength(raw.chars().count()),
        })?;

        if self.status.is_over() {
            return Err(GameError::RoundAlreadyOver);
        }

        let result = GuessResult::evaluate(&guess, &self.target);
        self.absent_letters.extend(result.absent_letters(&guess));

        let won = guess == self.target;
        self.guesses.push(guess);
        self.results.push(result);

        if won {
            self.status = RoundStatus::Won;
        } else if self.attempt_index() == self.max_attempts() {
            self.status = RoundStatus::Lost;
        }

        debug!(
            attempt = self.attempt_index(),
            max = self.max_attempts(),
            feedback = %result.to_emoji(),
            status = ?self.status,
            "evaluated guess"
        );

        Ok(Evaluation {
            result,
            status: self.status,
        })
    }

    /// The hidden word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Number of guesses submitted so far (0-based index of the next attempt)
    #[must_use]
    pub fn attempt_index(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.difficulty.max_attempts()
    }

    /// Submitted guesses, in order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Feedback for each submitted guess, parallel to [`Round::guesses`]
    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    /// Letters confirmed absent from the target, sorted
    #[must_use]
    pub const fn absent_letters(&self) -> &BTreeSet<char> {
        &self.absent_letters
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }
}
