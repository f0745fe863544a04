//! Core domain types: words and guess feedback

pub mod feedback;
pub mod word;

pub use feedback::{FEEDBACK_COUNT, Feedback, Mark};
pub use word::{ALPHABET, WORD_LEN, Word, WordError};
