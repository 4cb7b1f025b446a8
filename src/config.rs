//! Runtime settings
//!
//! Command-line values win, then `PALPITE_*` environment variables, then the
//! built-in defaults.

use crate::game::Difficulty;
use crate::session::{DEFAULT_RESTART_DELAY, SessionOptions};
use std::path::PathBuf;
use std::time::Duration;

pub const STATE_FILE_ENV: &str = "PALPITE_STATE_FILE";
pub const LOG_FILE_ENV: &str = "PALPITE_LOG_FILE";
pub const DEFAULT_STATE_FILE: &str = ".palpite.json";

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub difficulty: Option<Difficulty>,
    pub wordlist: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
    pub no_save: bool,
    pub log_file: Option<PathBuf>,
    pub restart_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Option<Difficulty>,
    /// Custom word list; the embedded list is used when absent
    pub wordlist: Option<PathBuf>,
    /// Where stats and preferences live; `None` keeps them in memory
    pub state_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub restart_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: None,
            wordlist: None,
            state_file: Some(PathBuf::from(DEFAULT_STATE_FILE)),
            log_file: None,
            restart_delay: DEFAULT_RESTART_DELAY,
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            difficulty: self.difficulty,
            restart_delay: self.restart_delay,
        }
    }
}

/// Resolve settings against the process environment
#[must_use]
pub fn load_settings(cli: CliOverrides) -> Settings {
    resolve_settings(cli, |key| std::env::var(key).ok())
}

/// Resolve settings with `env` standing in for the environment
#[must_use]
pub fn resolve_settings<F>(cli: CliOverrides, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Some(v) = env(STATE_FILE_ENV).filter(|v| !v.is_empty()) {
        settings.state_file = Some(PathBuf::from(v));
    }
    if let Some(v) = env(LOG_FILE_ENV).filter(|v| !v.is_empty()) {
        settings.log_file = Some(PathBuf::from(v));
    }

    if let Some(path) = cli.state_file {
        settings.state_file = Some(path);
    }
    if cli.no_save {
        settings.state_file = None;
    }
    if let Some(path) = cli.log_file {
        settings.log_file = Some(path);
    }
    if let Some(ms) = cli.restart_delay_ms {
        settings.restart_delay = Duration::from_millis(ms);
    }
    settings.difficulty = cli.difficulty;
    settings.wordlist = cli.wordlist;

    settings
}
