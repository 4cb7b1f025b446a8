//! Persistence for stats and preferences
//!
//! The session controller receives a [`KeyValueStore`]; the game core never
//! touches storage. Values are plain strings, typed by the records layered on
//! top ([`Stats`], [`Preferences`]).

mod file;
mod memory;
mod records;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use records::{Preferences, Stats, Theme};

use std::path::PathBuf;
use thiserror::Error;

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {path} is not a JSON object of strings")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable string key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
