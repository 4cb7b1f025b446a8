//! Typed records kept in a [`KeyValueStore`]

use super::{KeyValueStore, StoreError};
use crate::game::{Difficulty, RoundStatus};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

const WINS_KEY: &str = "wins";
const LOSSES_KEY: &str = "losses";
const THEME_KEY: &str = "theme";
const DIFFICULTY_KEY: &str = "difficulty";

/// Cumulative round outcomes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
}

impl Stats {
    /// Read stats from `store`; unreadable counters count as zero
    ///
    /// # Errors
    /// Returns `StoreError` if the store itself fails.
    pub fn load(store: &impl KeyValueStore) -> Result<Self, StoreError> {
        Ok(Self {
            wins: load_parsed(store, WINS_KEY)?.unwrap_or_default(),
            losses: load_parsed(store, LOSSES_KEY)?.unwrap_or_default(),
        })
    }

    /// Write both counters to `store`
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be written.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.set(WINS_KEY, &self.wins.to_string())?;
        store.set(LOSSES_KEY, &self.losses.to_string())
    }

    /// Count a finished round
    ///
    /// Returns false (and changes nothing) for a round still in progress.
    pub fn record(&mut self, status: RoundStatus) -> bool {
        match status {
            RoundStatus::Won => self.wins = self.wins.saturating_add(1),
            RoundStatus::Lost => self.losses = self.losses.saturating_add(1),
            RoundStatus::InProgress => return false,
        }
        true
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    /// Percentage of rounds won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total()) * 100.0
        }
    }
}

/// Color scheme of the terminal UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" | "escuro" => Ok(Self::Dark),
            "light" | "claro" => Ok(Self::Light),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

/// User settings that survive restarts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub difficulty: Difficulty,
}

impl Preferences {
    /// Read preferences from `store`; unknown values fall back to defaults
    ///
    /// # Errors
    /// Returns `StoreError` if the store itself fails.
    pub fn load(store: &impl KeyValueStore) -> Result<Self, StoreError> {
        Ok(Self {
            theme: load_parsed(store, THEME_KEY)?.unwrap_or_default(),
            difficulty: load_parsed(store, DIFFICULTY_KEY)?.unwrap_or_default(),
        })
    }

    /// # Errors
    /// Returns `StoreError` if the store cannot be written.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.set(THEME_KEY, self.theme.name())?;
        store.set(DIFFICULTY_KEY, self.difficulty.name())
    }
}

fn load_parsed<T>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StoreError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match raw.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(error) => {
            warn!(key, value = %raw, %error, "ignoring unreadable stored value");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn empty_store_gives_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Stats::load(&store).unwrap(), Stats::default());
        assert_eq!(Preferences::load(&store).unwrap(), Preferences::default());
    }

    #[test]
    fn stats_round_trip() {
        let mut store = MemoryStore::new();
        let stats = Stats { wins: 5, losses: 2 };
        stats.save(&mut store).unwrap();

        assert_eq!(Stats::load(&store).unwrap(), stats);
        assert_eq!(store.get("wins").unwrap().as_deref(), Some("5"));
    }

    #[test]
    fn garbage_counter_reads_as_zero() {
        let mut store = MemoryStore::new();
        store.set("wins", "lots").unwrap();
        store.set("losses", "3").unwrap();

        assert_eq!(Stats::load(&store).unwrap(), Stats { wins: 0, losses: 3 });
    }

    #[test]
    fn record_increments_matching_counter() {
        let mut stats = Stats::default();
        assert!(stats.record(RoundStatus::Won));
        assert!(stats.record(RoundStatus::Lost));
        assert!(stats.record(RoundStatus::Won));
        assert!(!stats.record(RoundStatus::InProgress));

        assert_eq!(stats, Stats { wins: 2, losses: 1 });
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn win_rate() {
        assert!(Stats::default().win_rate().abs() < f64::EPSILON);
        let stats = Stats { wins: 3, losses: 1 };
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn preferences_round_trip() {
        let mut store = MemoryStore::new();
        let prefs = Preferences {
            theme: Theme::Light,
            difficulty: Difficulty::Hard,
        };
        prefs.save(&mut store).unwrap();
        assert_eq!(Preferences::load(&store).unwrap(), prefs);
    }

    #[test]
    fn legacy_preference_values_parse() {
        let mut store = MemoryStore::new();
        store.set("theme", "claro").unwrap();
        store.set("difficulty", "facil").unwrap();

        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.difficulty, Difficulty::Easy);
    }

    #[test]
    fn theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
