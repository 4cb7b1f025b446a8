//! Word list loading utilities
//!
//! Custom lists are plain text, one word per line. Blank lines and lines
//! starting with `#` are ignored.

use super::{WordList, WordListError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load a word list from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read,
/// `WordListError::InvalidWord` naming the first bad line, or
/// `WordListError::Empty` if the file holds no words.
///
/// # Examples
/// ```no_run
/// use palpite::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(&content)
}

/// Parse word list text
///
/// # Errors
///
/// Same as [`load_from_file`], minus I/O.
pub fn parse_word_list(content: &str) -> Result<WordList, WordListError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| WordListError::InvalidWord {
            line: index + 1,
            word: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    WordList::new(words)
}
