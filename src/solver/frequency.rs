//! Letter-frequency heuristic
//!
//! The cheap easy-mode scorer: a word is worth the number of remaining
//! candidates each of its distinct letters appears in. No feedback
//! simulation, so it costs O(candidates) once plus O(1) per scored word,
//! against the entropy scorer's O(pool × candidates).

use crate::core::{ALPHABET, Word};

/// For each letter, the number of candidates containing it at least once
#[must_use]
pub fn letter_presence(candidates: &[Word]) -> [u32; ALPHABET] {
    let mut presence = [0u32; ALPHABET];
    for candidate in candidates {
        let counts = candidate.letter_counts();
        for (letter, &count) in counts.iter().enumerate() {
            if count > 0 {
                presence[letter] += 1;
            }
        }
    }
    presence
}

/// Heuristic score: summed presence counts over the word's distinct letters
///
/// Duplicate letters only count once; a repeated letter can never rule out
/// more candidates than its first occurrence.
#[must_use]
pub fn frequency_score(word: Word, presence: &[u32; ALPHABET]) -> f64 {
    let counts = word.letter_counts();
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(letter, _)| f64::from(presence[letter]))
        .sum()
}
