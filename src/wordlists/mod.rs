//! Target word lists
//!
//! The default list is embedded at build time; custom lists can be loaded
//! from a file. Either way the game receives a validated [`WordList`].

mod embedded;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT};

use crate::core::{Word, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for word list construction
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list is empty")]
    Empty,

    #[error("invalid word '{word}' on line {line}: {source}")]
    InvalidWord {
        line: usize,
        word: String,
        #[source]
        source: WordError,
    },
}

/// A non-empty set of target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from already validated words
    ///
    /// Duplicates are dropped so every distinct word is equally likely.
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no words are given.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        let mut unique: Vec<Word> = Vec::with_capacity(words.len());
        for word in words {
            if !unique.contains(&word) {
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words: unique })
    }

    /// Build a list from string slices
    ///
    /// # Errors
    /// Returns `WordListError::InvalidWord` for the first entry that is not a
    /// five-letter word, or `WordListError::Empty`.
    ///
    /// # Examples
    /// ```
    /// use palpite::wordlists::WordList;
    ///
    /// let list = WordList::from_slice(&["abrir", "AMIGO"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(WordList::from_slice(&["abc"]).is_err());
    /// ```
    pub fn from_slice(slice: &[&str]) -> Result<Self, WordListError> {
        let words = slice
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                Word::new(s).map_err(|source| WordListError::InvalidWord {
                    line: i + 1,
                    word: s.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(words)
    }

    /// The embedded default list
    ///
    /// # Errors
    /// Only fails if the embedded data is malformed.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::from_slice(TARGETS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}
