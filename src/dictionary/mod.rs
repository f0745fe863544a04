//! Dictionary store
//!
//! The immutable set of valid guess words and valid answer words, loaded
//! and validated once per process. The answer list is the pool of possible
//! solve targets; the guess list is the larger pool of words the
//! recommender may propose. `Dictionary` has no interior mutability, so a
//! shared reference is safe for unsynchronized concurrent reads.

mod embedded;

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::core::{Word, WordError};

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};

/// Error raised by dictionary loading and validation
#[derive(Debug)]
pub enum LoadError {
    /// A list entry is not a valid 5-letter word
    Malformed { word: String, reason: WordError },
    /// The same word appears twice in one list
    Duplicate(String),
    /// An answer word is missing from the guess list
    AnswerNotGuessable(String),
    /// A list contains no words at all
    Empty(&'static str),
    /// A word list file could not be read
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { word, reason } => {
                write!(f, "malformed dictionary entry {word:?}: {reason}")
            }
            Self::Duplicate(word) => write!(f, "duplicate dictionary entry {word:?}"),
            Self::AnswerNotGuessable(word) => {
                write!(f, "answer word {word:?} is not in the guess list")
            }
            Self::Empty(list) => write!(f, "{list} word list is empty"),
            Self::Io(err) => write!(f, "failed to read word list: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed { reason, .. } => Some(reason),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Immutable guess/answer word lists with membership indexes
#[derive(Debug)]
pub struct Dictionary {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    guess_set: FxHashSet<Word>,
    answer_set: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw word lists
    ///
    /// Every entry must be a valid 5-letter word, lists must be free of
    /// duplicates, and every answer must also be guessable.
    ///
    /// # Errors
    /// Returns `LoadError` describing the first malformed entry found.
    pub fn from_lists<'a, G, A>(guesses: G, answers: A) -> Result<Self, LoadError>
    where
        G: IntoIterator<Item = &'a str>,
        A: IntoIterator<Item = &'a str>,
    {
        let (guesses, guess_set) = validate_list(guesses, "guess")?;
        let (answers, answer_set) = validate_list(answers, "answer")?;

        if let Some(answer) = answers.iter().find(|a| !guess_set.contains(a)) {
            return Err(LoadError::AnswerNotGuessable(answer.as_str().to_string()));
        }

        Ok(Self {
            guesses,
            answers,
            guess_set,
            answer_set,
        })
    }

    /// Build the dictionary from the word lists compiled into the binary
    ///
    /// # Errors
    /// Returns `LoadError` if the embedded lists are malformed; this aborts
    /// initialization and indicates a broken build input.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_lists(GUESSES.iter().copied(), ANSWERS.iter().copied())
    }

    /// Load a dictionary from two newline-separated word list files
    ///
    /// # Errors
    /// Returns `LoadError::Io` if either file cannot be read, or a
    /// validation error for malformed content.
    pub fn from_files<P: AsRef<Path>>(guesses: P, answers: P) -> Result<Self, LoadError> {
        let guesses = fs::read_to_string(guesses)?;
        let answers = fs::read_to_string(answers)?;
        Self::from_lists(non_empty_lines(&guesses), non_empty_lines(&answers))
    }

    /// Whether a word may be a solve target
    #[inline]
    #[must_use]
    pub fn contains_answer(&self, word: Word) -> bool {
        self.answer_set.contains(&word)
    }

    /// Whether a word may be guessed
    #[inline]
    #[must_use]
    pub fn contains_guess(&self, word: Word) -> bool {
        self.guess_set.contains(&word)
    }

    /// Every possible answer word, in list order
    #[inline]
    #[must_use]
    pub fn all_answers(&self) -> &[Word] {
        &self.answers
    }

    /// Every guessable word, in list order
    #[inline]
    #[must_use]
    pub fn all_guesses(&self) -> &[Word] {
        &self.guesses
    }
}

fn non_empty_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn validate_list<'a, I>(
    entries: I,
    list_name: &'static str,
) -> Result<(Vec<Word>, FxHashSet<Word>), LoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words = Vec::new();
    let mut set = FxHashSet::default();

    for entry in entries {
        let word = Word::parse(entry).map_err(|reason| LoadError::Malformed {
            word: entry.to_string(),
            reason,
        })?;
        if !set.insert(word) {
            return Err(LoadError::Duplicate(entry.to_string()));
        }
        words.push(word);
    }

    if words.is_empty() {
        return Err(LoadError::Empty(list_name));
    }

    Ok((words, set))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lists_valid() {
        let dict = Dictionary::from_lists(
            ["crane", "slate", "salet"],
            ["crane", "slate"],
        )
        .unwrap();

        assert_eq!(dict.all_guesses().len(), 3);
        assert_eq!(dict.all_answers().len(), 2);
        assert!(dict.contains_answer(Word::parse("crane").unwrap()));
        assert!(!dict.contains_answer(Word::parse("salet").unwrap()));
        assert!(dict.contains_guess(Word::parse("salet").unwrap()));
    }

    #[test]
    fn rejects_malformed_entries() {
        let err = Dictionary::from_lists(["crane", "toolong"], ["crane"]).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));

        let err = Dictionary::from_lists(["crane", "cr4ne"], ["crane"]).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn rejects_duplicates() {
        let err = Dictionary::from_lists(["crane", "slate", "crane"], ["slate"]).unwrap_err();
        assert!(matches!(err, LoadError::Duplicate(w) if w == "crane"));
    }

    #[test]
    fn rejects_answer_missing_from_guess_list() {
        let err = Dictionary::from_lists(["crane"], ["slate"]).unwrap_err();
        assert!(matches!(err, LoadError::AnswerNotGuessable(w) if w == "slate"));
    }

    #[test]
    fn rejects_empty_lists() {
        let err = Dictionary::from_lists(std::iter::empty(), ["crane"]).unwrap_err();
        assert!(matches!(err, LoadError::Empty("guess")));
    }

    #[test]
    fn embedded_lists_load() {
        let dict = Dictionary::embedded().unwrap();
        assert_eq!(dict.all_answers().len(), ANSWERS_COUNT);
        assert_eq!(dict.all_guesses().len(), GUESSES_COUNT);
        assert!(dict.all_guesses().len() >= dict.all_answers().len());
    }

    #[test]
    fn embedded_answers_are_guessable() {
        let dict = Dictionary::embedded().unwrap();
        for &answer in dict.all_answers() {
            assert!(dict.contains_guess(answer), "answer {answer} not guessable");
        }
    }

    #[test]
    fn every_embedded_answer_matches_itself() {
        use crate::core::Feedback;

        let dict = Dictionary::embedded().unwrap();
        for &answer in dict.all_answers() {
            assert!(
                Feedback::evaluate(answer, answer).is_all_correct(),
                "{answer} vs itself"
            );
        }
    }

    #[test]
    fn crane_is_an_embedded_answer() {
        let dict = Dictionary::embedded().unwrap();
        assert!(dict.contains_answer(Word::parse("crane").unwrap()));
    }

    #[test]
    fn shared_reads_are_safe() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<Dictionary>();
    }
}
