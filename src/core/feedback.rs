//! Per-letter feedback for a guess
//!
//! Evaluation follows the usual two-pass rules so that repeated letters are
//! never over-counted:
//! 1. First pass: exact position matches are marked `Correct` and their
//!    target letters are claimed
//! 2. Second pass, left to right: each remaining guess letter claims the
//!    first unclaimed occurrence in the target (`Misplaced`), or is `Absent`

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Outcome of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterOutcome {
    /// Right letter, right position
    Correct,
    /// Letter appears elsewhere in the target and was not yet claimed
    Misplaced,
    /// Letter is not in the target, or all its occurrences are claimed
    Absent,
}

impl LetterOutcome {
    /// Emoji square for this outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, in guess letter order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterOutcome; WORD_LENGTH]);

impl GuessResult {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterOutcome::Correct; WORD_LENGTH]);

    /// Build a result from explicit outcomes
    #[must_use]
    pub const fn new(outcomes: [LetterOutcome; WORD_LENGTH]) -> Self {
        Self(outcomes)
    }

    /// Evaluate `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use palpite::core::{GuessResult, LetterOutcome::*, Word};
    ///
    /// let target = Word::new("LEVEL").unwrap();
    /// let guess = Word::new("ELLLE").unwrap();
    ///
    /// // No position coincides; the third L finds both target L's claimed
    /// assert_eq!(
    ///     GuessResult::evaluate(&guess, &target).outcomes(),
    ///     &[Misplaced, Misplaced, Misplaced, Absent, Misplaced]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut unclaimed: [Option<char>; WORD_LENGTH] = (*target.chars()).map(Some);
        let mut result: [Option<LetterOutcome>; WORD_LENGTH] = [None; WORD_LENGTH];

        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = Some(LetterOutcome::Correct);
                unclaimed[i] = None;
            }
        }

        let outcomes = std::array::from_fn(|i| {
            if let Some(outcome) = result[i] {
                return outcome;
            }

            let letter = guess.char_at(i);
            match unclaimed.iter().position(|&c| c == Some(letter)) {
                Some(index) => {
                    unclaimed[index] = None;
                    LetterOutcome::Misplaced
                }
                None => LetterOutcome::Absent,
            }
        });

        Self(outcomes)
    }

    /// Get the outcomes in guess order
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count how many letters received `outcome`
    #[must_use]
    pub fn count(&self, outcome: LetterOutcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    /// Letters of `guess` that this result proves absent from the target
    ///
    /// A letter only qualifies when none of its occurrences in the guess was
    /// matched as `Correct` or `Misplaced`. Returned in guess order, without
    /// duplicates.
    #[must_use]
    pub fn absent_letters(&self, guess: &Word) -> Vec<char> {
        let mut matched: FxHashMap<char, bool> = FxHashMap::default();
        for (&letter, &outcome) in guess.chars().iter().zip(&self.0) {
            *matched.entry(letter).or_insert(false) |= outcome != LetterOutcome::Absent;
        }

        let mut absent = Vec::new();
        for &letter in guess.chars() {
            if matched.get(&letter) == Some(&false) && !absent.contains(&letter) {
                absent.push(letter);
            }
        }
        absent
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterOutcome::{Absent, Correct, Misplaced};
    use super::*;
    use proptest::prelude::*;

    fn eval(guess: &str, target: &str) -> GuessResult {
        GuessResult::evaluate(
            &Word::from_guess(guess).unwrap(),
            &Word::from_guess(target).unwrap(),
        )
    }

    #[test]
    fn all_correct_when_guess_equals_target() {
        let result = eval("ABRIR", "ABRIR");
        assert_eq!(result, GuessResult::PERFECT);
        assert!(result.is_perfect());
        assert_eq!(result.count(Correct), 5);
    }

    #[test]
    fn all_absent_for_disjoint_letters() {
        let result = eval("ZZZZZ", "ABRIR");
        assert_eq!(result.outcomes(), &[Absent; 5]);
        assert!(!result.is_perfect());
    }

    #[test]
    fn duplicate_letters_claim_left_to_right() {
        assert_eq!(
            eval("ELLLE", "LEVEL").outcomes(),
            &[Misplaced, Misplaced, Misplaced, Absent, Misplaced]
        );
        // With a coinciding L the exact match is reserved first
        assert_eq!(
            eval("LLLEE", "LEVEL").outcomes(),
            &[Correct, Misplaced, Absent, Correct, Misplaced]
        );
    }

    #[test]
    fn exact_match_reserved_before_misplaced() {
        // The R at position 4 is correct, so the earlier R only gets the one
        // remaining R of ABRIR
        assert_eq!(
            eval("RRXXR", "ABRIR").outcomes(),
            &[Misplaced, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn repeated_guess_letter_beyond_target_count_is_absent() {
        // PAPEL has two P's; the third P in the guess gets nothing
        assert_eq!(
            eval("PPPXX", "PAPEL").outcomes(),
            &[Correct, Absent, Correct, Absent, Absent]
        );
    }

    #[test]
    fn absent_letters_skip_partially_matched_letters() {
        let guess = Word::from_guess("ELLLE").unwrap();
        let result = GuessResult::evaluate(&guess, &Word::new("LEVEL").unwrap());
        // The third L is Absent but L is in the target
        assert!(result.absent_letters(&guess).is_empty());
    }

    #[test]
    fn absent_letters_deduplicated_in_guess_order() {
        let guess = Word::from_guess("ZZYZX").unwrap();
        let result = GuessResult::evaluate(&guess, &Word::new("ABRIR").unwrap());
        assert_eq!(result.absent_letters(&guess), vec!['Z', 'Y', 'X']);
    }

    #[test]
    fn emoji_rendering() {
        let result = GuessResult::new([Correct, Misplaced, Absent, Correct, Misplaced]);
        assert_eq!(result.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        // Small alphabet so repeated letters are common
        "[A-E]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn correct_count_bounded_by_coinciding_positions(
            guess in word_strategy(),
            target in word_strategy(),
        ) {
            let result = GuessResult::evaluate(&guess, &target);
            let coinciding = guess
                .chars()
                .iter()
                .zip(target.chars())
                .filter(|(g, t)| g == t)
                .count();

            prop_assert_eq!(result.outcomes().len(), 5);
            prop_assert!(result.count(Correct) <= coinciding);
        }

        #[test]
        fn matches_per_letter_bounded_by_target_occurrences(
            guess in word_strategy(),
            target in word_strategy(),
        ) {
            let result = GuessResult::evaluate(&guess, &target);
            let target_counts = target.letter_counts();

            for (letter, _) in guess.letter_counts() {
                let matched = guess
                    .chars()
                    .iter()
                    .zip(result.outcomes())
                    .filter(|&(&g, &o)| g == letter && o != Absent)
                    .count();
                prop_assert!(matched <= target_counts.get(&letter).copied().unwrap_or(0));
            }
        }

        #[test]
        fn absent_letters_never_in_target(
            guess in word_strategy(),
            target in word_strategy(),
        ) {
            let result = GuessResult::evaluate(&guess, &target);
            for letter in result.absent_letters(&guess) {
                prop_assert!(!target.chars().contains(&letter));
            }
        }
    }
}
