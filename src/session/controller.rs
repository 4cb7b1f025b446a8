//! Session controller
//!
//! Sits between the input/render adapters and the game core. It owns the
//! line being typed, counts finished rounds exactly once, persists stats and
//! preferences, and schedules the automatic restart after a round ends.

use super::InputLine;
use crate::game::{Difficulty, Evaluation, Game, GameError, Round, RoundStatus};
use crate::store::{KeyValueStore, Preferences, Stats, StoreError, Theme};
use crate::wordlists::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Delay between the end of a round and the next one
pub const DEFAULT_RESTART_DELAY: Duration = Duration::from_secs(2);

/// Startup options for a session
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Difficulty for the first round instead of the stored preference
    pub difficulty: Option<Difficulty>,
    pub restart_delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            difficulty: None,
            restart_delay: DEFAULT_RESTART_DELAY,
        }
    }
}

/// What happened to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The line still has empty cells; nothing was submitted
    Incomplete,
    /// The core evaluated the guess
    Accepted(Evaluation),
    /// The core rejected the guess; nothing changed
    Rejected(GameError),
}

pub struct Session<S: KeyValueStore, R: Rng = StdRng> {
    game: Game<R>,
    store: S,
    stats: Stats,
    preferences: Preferences,
    line: InputLine,
    restart_delay: Duration,
    restart_at: Option<Instant>,
    store_warning: Option<String>,
}

impl<S: KeyValueStore> Session<S, StdRng> {
    /// Create a session with an OS-seeded random source
    #[must_use]
    pub fn new(words: WordList, store: S, options: SessionOptions) -> Self {
        Self::with_rng(words, StdRng::from_os_rng(), store, options)
    }
}

impl<S: KeyValueStore, R: Rng> Session<S, R> {
    /// Create a session, load stored stats and preferences, and start a round
    #[must_use]
    pub fn with_rng(words: WordList, rng: R, store: S, options: SessionOptions) -> Self {
        let mut store_warning = None;

        let stats = Stats::load(&store).unwrap_or_else(|e| {
            let warning = report_store_error(&e);
            store_warning.get_or_insert(warning);
            Stats::default()
        });
        let preferences = Preferences::load(&store).unwrap_or_else(|e| {
            let warning = report_store_error(&e);
            store_warning.get_or_insert(warning);
            Preferences::default()
        });

        let difficulty = options.difficulty.unwrap_or(preferences.difficulty);

        Self {
            game: Game::with_rng(words, rng, difficulty),
            store,
            stats,
            preferences,
            line: InputLine::new(),
            restart_delay: options.restart_delay,
            restart_at: None,
            store_warning,
        }
    }

    /// Whether typing is currently accepted
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        !self.round().status().is_over()
    }

    /// Type a letter into the active cell
    pub fn type_letter(&mut self, c: char) -> bool {
        self.accepts_input() && self.line.type_letter(c)
    }

    pub fn backspace(&mut self) {
        if self.accepts_input() {
            self.line.backspace();
        }
    }

    pub fn select_cell(&mut self, index: usize) {
        if self.accepts_input() {
            self.line.select_cell(index);
        }
    }

    pub fn move_left(&mut self) {
        if self.accepts_input() {
            self.line.move_left();
        }
    }

    pub fn move_right(&mut self) {
        if self.accepts_input() {
            self.line.move_right();
        }
    }

    /// Submit the typed line
    ///
    /// An incomplete line is not sent to the game.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if !self.line.is_complete() {
            return SubmitOutcome::Incomplete;
        }

        let text = self.line.text();
        self.submit_text(&text, now)
    }

    /// Submit raw text, bypassing the line editor
    pub fn submit_text(&mut self, raw: &str, now: Instant) -> SubmitOutcome {
        let evaluation = match self.game.submit_guess(raw) {
            Ok(evaluation) => evaluation,
            Err(e) => return SubmitOutcome::Rejected(e),
        };

        self.line.clear();

        if evaluation.status.is_over() {
            self.finish_round(evaluation.status, now);
        }

        SubmitOutcome::Accepted(evaluation)
    }

    fn finish_round(&mut self, status: RoundStatus, now: Instant) {
        if self.stats.record(status) {
            let result = self.stats.save(&mut self.store);
            self.note_store_result(result);
        }
        self.restart_at = Some(now + self.restart_delay);
    }

    /// Start the next round if its restart is due
    ///
    /// Returns true when a new round was started.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.restart_at {
            Some(at) if now >= at => {
                self.new_round();
                true
            }
            _ => false,
        }
    }

    /// Time left until the scheduled restart, if any
    #[must_use]
    pub fn restart_pending(&self, now: Instant) -> Option<Duration> {
        self.restart_at.map(|at| at.saturating_duration_since(now))
    }

    /// Abandon the current round and start another
    ///
    /// Stats only count rounds that were won or lost.
    pub fn new_round(&mut self) {
        self.restart_at = None;
        self.line.clear();
        self.game.start_round(self.preferences.difficulty);
    }

    /// Change the preferred difficulty; applies from the next round
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.preferences.difficulty == difficulty {
            return;
        }

        info!(%difficulty, "difficulty changed");
        self.preferences.difficulty = difficulty;
        let result = self.preferences.save(&mut self.store);
        self.note_store_result(result);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.preferences.theme = self.preferences.theme.toggled();
        let result = self.preferences.save(&mut self.store);
        self.note_store_result(result);
        self.preferences.theme
    }

    /// Zero the win/loss counters
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
        let result = self.stats.save(&mut self.store);
        self.note_store_result(result);
    }

    fn note_store_result(&mut self, result: Result<(), StoreError>) {
        // The first unread warning is kept; later ones are only logged
        if let Err(e) = result {
            let warning = report_store_error(&e);
            self.store_warning.get_or_insert(warning);
        }
    }

    /// Take the oldest unread storage problem, if any, for display
    pub fn take_store_warning(&mut self) -> Option<String> {
        self.store_warning.take()
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        self.game.round()
    }

    #[must_use]
    pub const fn line(&self) -> &InputLine {
        &self.line
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.preferences
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

fn report_store_error(error: &StoreError) -> String {
    warn!(%error, "store operation failed");
    format!("Storage problem: {error}")
}
