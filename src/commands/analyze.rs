//! Word analysis command
//!
//! Scores a single word against the full answer list: expected information
//! gain, expected remaining candidates, worst-case bucket, and where the
//! word ranks among all guessable words.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::solver::entropy::{GuessMetrics, calculate_metrics, expected_bits};

/// Analysis of one guess word against the untouched answer list
pub struct AnalysisReport {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// 1-based rank among all guessable words by entropy
    pub rank: usize,
    pub total_guesses: usize,
    pub is_answer: bool,
}

/// Analyze a word's opening-guess quality
///
/// # Errors
/// Returns an error message if the word is malformed or not guessable.
pub fn analyze_word(dict: &Dictionary, text: &str) -> Result<AnalysisReport, String> {
    let word = Word::parse(text).map_err(|e| format!("invalid word: {e}"))?;
    if !dict.contains_guess(word) {
        return Err(format!("'{word}' is not in the guess dictionary"));
    }

    let candidates = dict.all_answers();
    let metrics = calculate_metrics(word, candidates);

    let rank = 1 + dict
        .all_guesses()
        .iter()
        .filter(|&&other| expected_bits(other, candidates) > metrics.entropy)
        .count();

    Ok(AnalysisReport {
        word,
        metrics,
        rank,
        total_guesses: dict.all_guesses().len(),
        is_answer: dict.contains_answer(word),
    })
}
