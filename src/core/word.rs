//! Word representation
//!
//! A `Word` is a fixed 5-letter lowercase ASCII sequence, immutable once
//! constructed. It is `Copy` and ordered lexicographically, which the
//! recommender relies on for deterministic tie-breaking.

use std::fmt;
use std::str;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET: usize = 26;

/// A validated 5-letter lowercase word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

/// Error type for invalid word text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonLetter(c) => write!(f, "word contains non-letter character {c:?}"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Parse a word from text, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::Word;
    ///
    /// let word = Word::parse("Crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::parse("toolong").is_err());
    /// assert!(Word::parse("cran3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordError> {
        if text.chars().count() != WORD_LEN {
            return Err(WordError::InvalidLength(text.chars().count()));
        }

        let mut letters = [0u8; WORD_LEN];
        for (i, c) in text.chars().enumerate() {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::NonLetter(c));
            }
            letters[i] = c.to_ascii_lowercase() as u8;
        }

        Ok(Self(letters))
    }

    /// The word as lowercase text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction guarantees valid ASCII
        str::from_utf8(&self.0).unwrap_or("?????")
    }

    /// The word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(self) -> [u8; WORD_LEN] {
        self.0
    }

    /// The letter at a position (0-4)
    ///
    /// # Panics
    /// Panics if `position >= 5`.
    #[inline]
    #[must_use]
    pub const fn letter_at(self, position: usize) -> u8 {
        self.0[position]
    }

    /// Whether the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Occurrence count of each letter, indexed by `letter - b'a'`
    ///
    /// Used by the feedback evaluator (available-occurrence pool) and the
    /// candidate filter (count constraints).
    #[inline]
    #[must_use]
    pub fn letter_counts(self) -> [u8; ALPHABET] {
        let mut counts = [0u8; ALPHABET];
        for letter in self.0 {
            counts[usize::from(letter - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
