//! Five-letter word representation
//!
//! A `Word` stores exactly five characters, normalized to uppercase. Target
//! words are built with [`Word::new`], which also requires letters; player
//! guesses go through [`Word::from_guess`], which only checks the length.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every puzzle word
pub const WORD_LENGTH: usize = 5;

/// A five-character word, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} characters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a target word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use palpite::core::Word;
    ///
    /// let word = Word::new("abrir").unwrap();
    /// assert_eq!(word.text(), "ABRIR");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("ab1ir").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let word = Self::from_guess(text.as_ref())?;

        if !word.chars.iter().all(|c| c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(word)
    }

    /// Create a word from raw player input
    ///
    /// Any five characters are accepted; each one is uppercased where it has
    /// a single-character uppercase form.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the input is not exactly five
    /// characters long.
    ///
    /// # Examples
    /// ```
    /// use palpite::core::Word;
    ///
    /// let guess = Word::from_guess("a?b!c").unwrap();
    /// assert_eq!(guess.text(), "A?B!C");
    /// assert!(Word::from_guess("abcd").is_err());
    /// ```
    pub fn from_guess(raw: &str) -> Result<Self, WordError> {
        let count = raw.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut chars = [' '; WORD_LENGTH];
        for (slot, c) in chars.iter_mut().zip(raw.chars()) {
            *slot = normalize_char(c);
        }

        Ok(Self {
            text: chars.iter().collect(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

fn normalize_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("ABRIR").unwrap();
        assert_eq!(word.text(), "ABRIR");
        assert_eq!(word.chars(), &['A', 'B', 'R', 'I', 'R']);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("livro").unwrap().text(), "LIVRO");
        assert_eq!(Word::new("LiVrO").unwrap().text(), "LIVRO");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("abc"), Err(WordError::InvalidLength(3)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("abr1r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("abr r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("abr!r"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Five characters, more than five bytes
        let word = Word::new("órgão").unwrap();
        assert_eq!(word.text(), "ÓRGÃO");
        assert_eq!(word.char_at(3), 'Ã');
    }

    #[test]
    fn guess_accepts_any_characters() {
        let guess = Word::from_guess("12 ab").unwrap();
        assert_eq!(guess.text(), "12 AB");
    }

    #[test]
    fn guess_keeps_characters_without_single_uppercase_form() {
        // 'ß' uppercases to "SS", which would change the length
        let guess = Word::from_guess("ßabcd").unwrap();
        assert_eq!(guess.text(), "ßABCD");
    }

    #[test]
    fn guess_rejects_wrong_length() {
        assert_eq!(Word::from_guess("abcd"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::from_guess("abcdef"), Err(WordError::InvalidLength(6)));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("level").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'L'), Some(&2));
        assert_eq!(counts.get(&'E'), Some(&2));
        assert_eq!(counts.get(&'V'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_display() {
        let word = Word::new("papel").unwrap();
        assert_eq!(format!("{word}"), "PAPEL");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("tarde").unwrap(), Word::new("TARDE").unwrap());
        assert_ne!(Word::new("tarde").unwrap(), Word::new("noite").unwrap());
    }
}
