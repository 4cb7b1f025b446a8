//! Log subscriber setup
//!
//! Filtering comes from `RUST_LOG` and defaults to `warn`.

use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Where log lines should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    /// The terminal is in use and no file was given
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick a target: a log file always wins, and a full-screen UI never
    /// writes to stderr
    #[must_use]
    pub const fn choose(log_file: Option<&'a Path>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_tracing(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("failed to install log subscriber: {e}")),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_wins() {
        let path = Path::new("palpite.log");
        assert_eq!(LogTarget::choose(Some(path), true), LogTarget::File(path));
        assert_eq!(LogTarget::choose(Some(path), false), LogTarget::File(path));
    }

    #[test]
    fn terminal_ui_without_file_disables_logging() {
        assert_eq!(LogTarget::choose(None, true), LogTarget::Disabled);
        assert_eq!(LogTarget::choose(None, false), LogTarget::Stderr);
    }

    #[test]
    fn disabled_installs_nothing() {
        assert!(init_tracing(LogTarget::Disabled).is_ok());
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let dir = std::env::temp_dir().join("palpite_logging_test_missing_dir");
        let _ = std::fs::remove_dir_all(&dir);
        let err = init_tracing(LogTarget::File(&dir.join("nested").join("x.log"))).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
