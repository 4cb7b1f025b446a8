//! Round controller
//!
//! Owns the word list, the random source and the current round.

use super::{Difficulty, Evaluation, GameError, Round};
use crate::wordlists::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Puzzle controller holding the authoritative round state
///
/// There is always a current round; [`Game::start_round`] replaces it.
pub struct Game<R: Rng = StdRng> {
    words: WordList,
    rng: R,
    round: Round,
}

impl Game<StdRng> {
    /// Create a game seeded from the operating system and start a round
    #[must_use]
    pub fn new(words: WordList, difficulty: Difficulty) -> Self {
        Self::with_rng(words, StdRng::from_os_rng(), difficulty)
    }
}

impl<R: Rng> Game<R> {
    /// Create a game with an explicit random source and start a round
    #[must_use]
    pub fn with_rng(words: WordList, mut rng: R, difficulty: Difficulty) -> Self {
        let round = Round::new(pick_target(&words, &mut rng).clone(), difficulty);
        info!(difficulty = %difficulty, words = words.len(), "round started");

        Self { words, rng, round }
    }

    /// Discard the current round and start a new one
    ///
    /// The target is drawn uniformly from the word list.
    pub fn start_round(&mut self, difficulty: Difficulty) {
        let target = pick_target(&self.words, &mut self.rng).clone();
        self.round = Round::new(target, difficulty);
        info!(difficulty = %difficulty, "round started");
    }

    /// Submit a guess to the current round
    ///
    /// # Errors
    /// See [`Round::submit_guess`].
    pub fn submit_guess(&mut self, raw: &str) -> Result<Evaluation, GameError> {
        let evaluation = self.round.submit_guess(raw)?;

        if evaluation.status.is_over() {
            info!(
                status = ?evaluation.status,
                attempts = self.round.attempt_index(),
                target = %self.round.target(),
                "round finished"
            );
        }

        Ok(evaluation)
    }

    /// The current round (read-only)
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// The configured word list
    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }
}

fn pick_target<'a, R: Rng>(words: &'a WordList, rng: &mut R) -> &'a crate::core::Word {
    // WordList is never empty
    let index = rng.random_range(0..words.len());
    &words.as_slice()[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundStatus;
    use crate::wordlists::TARGETS;

    fn seeded(words: &[&str], seed: u64, difficulty: Difficulty) -> Game {
        let list = WordList::from_slice(words).unwrap();
        Game::with_rng(list, StdRng::seed_from_u64(seed), difficulty)
    }

    #[test]
    fn single_word_list_always_picks_it() {
        let mut game = seeded(&["ABRIR"], 1, Difficulty::Easy);
        assert_eq!(game.round().target().text(), "ABRIR");

        game.start_round(Difficulty::Hard);
        assert_eq!(game.round().target().text(), "ABRIR");
        assert_eq!(game.round().max_attempts(), 4);
    }

    #[test]
    fn target_is_drawn_from_word_list() {
        let mut game = seeded(TARGETS, 42, Difficulty::Medium);
        for _ in 0..50 {
            assert!(game.words().contains(game.round().target()));
            game.start_round(Difficulty::Medium);
        }
    }

    #[test]
    fn all_words_eventually_drawn() {
        let words = ["ABRIR", "AMIGO", "BANHO"];
        let mut game = seeded(&words, 7, Difficulty::Medium);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(game.round().target().text().to_string());
            game.start_round(Difficulty::Medium);
        }
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn start_round_resets_state() {
        let mut game = seeded(&["ABRIR"], 3, Difficulty::Medium);
        game.submit_guess("ZZZZZ").unwrap();
        game.submit_guess("ABRIR").unwrap();
        assert_eq!(game.round().status(), RoundStatus::Won);

        game.start_round(Difficulty::Easy);
        let round = game.round();
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.attempt_index(), 0);
        assert_eq!(round.max_attempts(), 8);
        assert!(round.guesses().is_empty());
        assert!(round.absent_letters().is_empty());
    }

    #[test]
    fn submit_after_round_over_is_rejected() {
        let mut game = seeded(&["ABRIR"], 5, Difficulty::Hard);
        game.submit_guess("ABRIR").unwrap();
        assert_eq!(
            game.submit_guess("ABRIR"),
            Err(GameError::RoundAlreadyOver)
        );
    }
}
