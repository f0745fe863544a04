//! Guess recommendation
//!
//! Ranks the next guesses for the current candidate set. Hard mode scores
//! the guess pool by expected information gain (rayon-parallel over the
//! pool, the dominant cost of a solve step); easy mode falls back to the
//! letter-frequency heuristic over the candidates. Cheat mode bypasses
//! ranking entirely when the true target is known and returns it as the
//! sole suggestion.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::entropy::expected_bits;
use super::frequency::{frequency_score, letter_presence};
use crate::core::Word;
use crate::dictionary::Dictionary;

/// A ranked guess: a word and its score under the active mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    pub score: f64,
}

/// Which words hard mode may propose
///
/// `Full` searches the whole guess dictionary, which finds better probes
/// but costs O(guesses × candidates) per step. `CandidatesOnly` restricts
/// the pool to remaining candidates, a cheaper variant worth benchmarking
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    #[default]
    Full,
    CandidatesOnly,
}

/// Guess ranking configuration
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    pub hard_mode: bool,
    pub be_cheaty: bool,
    pub pool: GuessPool,
}

impl Recommender {
    /// Rank the next guesses, best first
    ///
    /// Returns an empty vector when no candidates remain: that signals a
    /// contradictory feedback history, and the caller reports it rather
    /// than crash.
    #[must_use]
    pub fn recommend(
        &self,
        dict: &Dictionary,
        candidates: &[Word],
        known_target: Option<Word>,
    ) -> Vec<Suggestion> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let resolve_bits = (candidates.len() as f64).log2();

        // Looking up the answer instead of solving blind
        if self.be_cheaty && let Some(target) = known_target {
            return vec![Suggestion {
                word: target,
                score: resolve_bits,
            }];
        }

        // A lone candidate must be the answer
        if let [only] = candidates {
            return vec![Suggestion {
                word: *only,
                score: 0.0,
            }];
        }

        if self.hard_mode {
            self.rank_by_entropy(dict, candidates)
        } else {
            rank_by_frequency(candidates)
        }
    }

    fn rank_by_entropy(&self, dict: &Dictionary, candidates: &[Word]) -> Vec<Suggestion> {
        let pool: &[Word] = match self.pool {
            GuessPool::Full => dict.all_guesses(),
            GuessPool::CandidatesOnly => candidates,
        };
        let members: FxHashSet<Word> = candidates.iter().copied().collect();

        let mut ranked: Vec<Suggestion> = pool
            .par_iter()
            .map(|&word| Suggestion {
                word,
                score: expected_bits(word, candidates),
            })
            .collect();

        // Highest gain first; ties prefer a word that could itself be the
        // answer, then lexicographic order for determinism.
        ranked.sort_unstable_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| members.contains(&b.word).cmp(&members.contains(&a.word)))
                .then_with(|| a.word.cmp(&b.word))
        });

        ranked
    }
}

fn rank_by_frequency(candidates: &[Word]) -> Vec<Suggestion> {
    let presence = letter_presence(candidates);

    let mut ranked: Vec<Suggestion> = candidates
        .iter()
        .map(|&word| Suggestion {
            word,
            score: frequency_score(word, &presence),
        })
        .collect();

    ranked.sort_unstable_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word)));

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(guesses: &[&str], answers: &[&str]) -> Dictionary {
        Dictionary::from_lists(guesses.iter().copied(), answers.iter().copied()).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    const HARD: Recommender = Recommender {
        hard_mode: true,
        be_cheaty: false,
        pool: GuessPool::Full,
    };

    #[test]
    fn empty_candidates_give_empty_ranking() {
        let dict = dict(&["crane"], &["crane"]);
        assert!(HARD.recommend(&dict, &[], None).is_empty());
        assert!(
            HARD.recommend(&dict, &[], Some(word("crane"))).is_empty(),
            "cheat mode must not resurrect an empty candidate set"
        );
    }

    #[test]
    fn cheat_mode_returns_target_alone() {
        let dict = dict(&["crane", "slate", "irate"], &["crane", "slate", "irate"]);
        let recommender = Recommender {
            be_cheaty: true,
            ..HARD
        };

        let ranked = recommender.recommend(&dict, dict.all_answers(), Some(word("slate")));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, word("slate"));
    }

    #[test]
    fn cheat_without_known_target_still_ranks() {
        let dict = dict(&["crane", "slate"], &["crane", "slate"]);
        let recommender = Recommender {
            be_cheaty: true,
            ..HARD
        };

        let ranked = recommender.recommend(&dict, dict.all_answers(), None);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn single_candidate_is_proposed_directly() {
        let dict = dict(&["crane", "slate"], &["crane", "slate"]);
        let ranked = HARD.recommend(&dict, &[word("slate")], None);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, word("slate"));
        assert!(ranked[0].score.abs() < f64::EPSILON);
    }

    #[test]
    fn hard_mode_ranks_by_information_gain() {
        // "jumbo" shares no letters with any candidate and gains nothing
        let dict = dict(
            &["jumbo", "sigil", "slate", "irate", "crate", "grate"],
            &["slate", "irate", "crate", "grate"],
        );

        let ranked = HARD.recommend(&dict, dict.all_answers(), None);
        assert_eq!(ranked.len(), dict.all_guesses().len());
        assert!(ranked[0].word != word("jumbo"));
        assert_eq!(ranked.last().unwrap().word, word("jumbo"));
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn ties_prefer_candidate_members_then_lexicographic() {
        // dandy splits {daddy, paddy} exactly as well as either candidate
        // does, but only the candidates can actually be the answer.
        let dict = dict(&["dandy", "daddy", "paddy"], &["daddy", "paddy"]);

        let ranked = HARD.recommend(&dict, dict.all_answers(), None);
        let order: Vec<&str> = ranked.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(order, ["daddy", "paddy", "dandy"]);
    }

    #[test]
    fn candidates_only_pool_ignores_outside_words() {
        let dict = dict(
            &["jumbo", "sigil", "slate", "irate", "crate", "grate"],
            &["slate", "irate", "crate", "grate"],
        );
        let recommender = Recommender {
            pool: GuessPool::CandidatesOnly,
            ..HARD
        };

        let ranked = recommender.recommend(&dict, dict.all_answers(), None);
        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|s| dict.contains_answer(s.word)));
    }

    #[test]
    fn easy_mode_ranks_candidates_by_letter_frequency() {
        let dict = dict(
            &["slate", "irate", "crate", "grate", "bobby"],
            &["slate", "irate", "crate", "grate", "bobby"],
        );
        let recommender = Recommender {
            hard_mode: false,
            ..HARD
        };

        let ranked = recommender.recommend(&dict, dict.all_answers(), None);
        assert_eq!(ranked.len(), 5);
        // Shared a/t/e letters dominate; the outlier ranks last
        assert_eq!(ranked.last().unwrap().word, word("bobby"));
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
