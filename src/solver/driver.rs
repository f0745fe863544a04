//! Solve driver
//!
//! Orchestrates one full solve session: validate the target, then iterate
//! recommend → evaluate → tighten → refilter until the target is guessed,
//! the guess budget runs out, or the candidate set collapses. The session
//! owns its own constraint and candidate set; the dictionary is the only
//! shared input.

use std::fmt;

use super::constraint::{Constraint, InvalidFeedback};
use super::entropy::expected_bits;
use super::filter::filter_candidates;
use super::recommend::{GuessPool, Recommender, Suggestion};
use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;

/// Default guess budget, matching the game's six rows
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Knobs for one solve session
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Rank guesses by expected information gain instead of the cheap
    /// letter-frequency heuristic
    pub hard_mode: bool,
    /// Return the known target directly instead of solving blind
    pub be_cheaty: bool,
    /// Guess budget before the session is declared exhausted
    pub max_guesses: usize,
    /// Guess pool restriction for hard mode
    pub pool: GuessPool,
    /// Guesses to play before consulting the recommender
    pub forced_openers: Vec<Word>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            hard_mode: true,
            be_cheaty: false,
            max_guesses: DEFAULT_MAX_GUESSES,
            pool: GuessPool::Full,
            forced_openers: Vec::new(),
        }
    }
}

/// One step of solve history
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub word: Word,
    pub score: f64,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Why a session was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The target is not a recognized answer word
    NotRecognized,
    /// The candidate set emptied out, which a correct evaluator never
    /// produces
    NoCandidates,
    /// The constraint model detected contradictory feedback
    Contradiction(InvalidFeedback),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRecognized => write!(f, "word not recognized"),
            Self::NoCandidates => write!(f, "no candidates remain (inconsistent feedback history)"),
            Self::Contradiction(err) => write!(f, "contradictory feedback: {err}"),
        }
    }
}

/// Terminal state of a solve session
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    /// Target guessed within budget; history ends with the target
    Solved { history: Vec<GuessRecord> },
    /// Budget spent without finding the target
    Exhausted { history: Vec<GuessRecord> },
    /// Session failed validation or hit an internal inconsistency
    Rejected {
        reason: RejectReason,
        history: Vec<GuessRecord>,
    },
}

impl SolveOutcome {
    /// The guesses played this session, in order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        match self {
            Self::Solved { history } | Self::Exhausted { history } | Self::Rejected { history, .. } => {
                history
            }
        }
    }

    /// Whether the session ended on the target
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// The guessed words as plain text, the payload the host displays
    #[must_use]
    pub fn guessed_words(&self) -> Vec<String> {
        self.history()
            .iter()
            .map(|record| record.word.as_str().to_string())
            .collect()
    }
}

/// Run one solve session against a target word
///
/// # Examples
/// ```no_run
/// use wordle_oracle::dictionary::Dictionary;
/// use wordle_oracle::solver::{SolveConfig, solve};
///
/// let dict = Dictionary::embedded().unwrap();
/// let outcome = solve(&dict, &SolveConfig::default(), "crane");
/// assert!(outcome.is_solved());
/// ```
#[must_use]
pub fn solve(dict: &Dictionary, config: &SolveConfig, target: &str) -> SolveOutcome {
    let Ok(target) = Word::parse(target) else {
        return SolveOutcome::Rejected {
            reason: RejectReason::NotRecognized,
            history: Vec::new(),
        };
    };
    if !dict.contains_answer(target) {
        return SolveOutcome::Rejected {
            reason: RejectReason::NotRecognized,
            history: Vec::new(),
        };
    }

    let recommender = Recommender {
        hard_mode: config.hard_mode,
        be_cheaty: config.be_cheaty,
        pool: config.pool,
    };

    let mut constraint = Constraint::new();
    let mut candidates = dict.all_answers().to_vec();
    let mut openers = config.forced_openers.iter().copied();
    let mut history: Vec<GuessRecord> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = candidates.len();

        let suggestion = if let Some(opener) = openers.next() {
            Suggestion {
                word: opener,
                score: expected_bits(opener, &candidates),
            }
        } else {
            let Some(&best) = recommender
                .recommend(dict, &candidates, Some(target))
                .first()
            else {
                return SolveOutcome::Rejected {
                    reason: RejectReason::NoCandidates,
                    history,
                };
            };
            best
        };

        let feedback = Feedback::evaluate(suggestion.word, target);

        if suggestion.word == target {
            history.push(GuessRecord {
                word: suggestion.word,
                score: suggestion.score,
                feedback,
                candidates_before,
                candidates_after: 1,
            });
            return SolveOutcome::Solved { history };
        }

        constraint = match constraint.update(suggestion.word, feedback) {
            Ok(next) => next,
            Err(err) => {
                history.push(GuessRecord {
                    word: suggestion.word,
                    score: suggestion.score,
                    feedback,
                    candidates_before,
                    candidates_after: 0,
                });
                return SolveOutcome::Rejected {
                    reason: RejectReason::Contradiction(err),
                    history,
                };
            }
        };

        candidates = filter_candidates(dict.all_answers(), &constraint);
        history.push(GuessRecord {
            word: suggestion.word,
            score: suggestion.score,
            feedback,
            candidates_before,
            candidates_after: candidates.len(),
        });

        if candidates.is_empty() {
            return SolveOutcome::Rejected {
                reason: RejectReason::NoCandidates,
                history,
            };
        }
    }

    SolveOutcome::Exhausted { history }
}
