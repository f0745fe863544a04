//! Shannon entropy scoring
//!
//! For a guess, bucket the remaining candidate answers by the feedback the
//! guess would earn against each of them. The entropy of that bucket
//! distribution is the expected information gain of the guess in bits; the
//! hard-mode recommender ranks guesses by it.

use rustc_hash::FxHashMap;

use crate::core::{Feedback, Word};

/// Summary metrics for one guess against a candidate set
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Expected information gain in bits
    pub entropy: f64,
    /// Expected number of candidates remaining after the guess
    pub expected_remaining: f64,
    /// Largest feedback bucket (worst-case remaining candidates)
    pub worst_bucket: usize,
}

/// Bucket candidates by the feedback the guess would earn against them
#[must_use]
pub fn feedback_distribution(guess: Word, candidates: &[Word]) -> FxHashMap<Feedback, usize> {
    let mut buckets = FxHashMap::default();
    for &candidate in candidates {
        *buckets
            .entry(Feedback::evaluate(guess, candidate))
            .or_insert(0usize) += 1;
    }
    buckets
}

/// Shannon entropy of a feedback bucket distribution
///
/// H = -Σ p·log₂(p) over bucket probabilities. Zero for a single bucket,
/// maximal for a uniform split, always within `[0, log₂(buckets)]`.
#[must_use]
pub fn shannon_entropy(buckets: &FxHashMap<Feedback, usize>) -> f64 {
    let total = buckets.values().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    buckets
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected information gain of a guess, in bits
///
/// # Examples
/// ```
/// use wordle_oracle::core::Word;
/// use wordle_oracle::solver::entropy::expected_bits;
///
/// let guess = Word::parse("slate").unwrap();
/// let candidates = vec![
///     Word::parse("slate").unwrap(),
///     Word::parse("fuzzy").unwrap(),
/// ];
///
/// // Two candidates split into two buckets: exactly one bit.
/// let bits = expected_bits(guess, &candidates);
/// assert!((bits - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_bits(guess: Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&feedback_distribution(guess, candidates))
}

/// Entropy, expected remaining candidates and worst-case bucket for a guess
#[must_use]
pub fn calculate_metrics(guess: Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            worst_bucket: 0,
        };
    }

    let buckets = feedback_distribution(guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(&buckets);

    let expected_remaining = buckets
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let worst_bucket = buckets.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        worst_bucket,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::parse(t).unwrap()).collect()
    }

    #[test]
    fn entropy_of_uniform_split() {
        // Four candidates, four distinct feedback buckets: log2(4) bits
        let guess = Word::parse("aaaaa").unwrap();
        let candidates = words(&["aaaaa", "baaaa", "bbaaa", "bbbaa"]);

        let buckets = feedback_distribution(guess, &candidates);
        assert_eq!(buckets.len(), 4);
        assert!((shannon_entropy(&buckets) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_of_single_bucket_is_zero() {
        // Every candidate earns all-gray against a disjoint guess
        let guess = Word::parse("fuzzy").unwrap();
        let candidates = words(&["stare", "chino", "below"]);
        assert!(expected_bits(guess, &candidates).abs() < 1e-9);
    }

    #[test]
    fn entropy_is_bounded() {
        let guess = Word::parse("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise", "crane"]);
        let bits = expected_bits(guess, &candidates);
        assert!(bits >= 0.0);
        assert!(bits <= (candidates.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn informative_guess_beats_flat_guess() {
        let candidates = words(&["slate", "irate", "crate", "grate"]);
        let flat = expected_bits(Word::parse("jumbo").unwrap(), &candidates);
        let informative = expected_bits(Word::parse("sigil").unwrap(), &candidates);
        assert!(informative > flat);
    }

    #[test]
    fn empty_candidates_score_zero() {
        let guess = Word::parse("crane").unwrap();
        assert!(expected_bits(guess, &[]).abs() < f64::EPSILON);

        let metrics = calculate_metrics(guess, &[]);
        assert!(metrics.entropy.abs() < f64::EPSILON);
        assert_eq!(metrics.worst_bucket, 0);
    }

    #[test]
    fn metrics_agree_with_entropy() {
        let guess = Word::parse("slate").unwrap();
        let candidates = words(&["slate", "fuzzy"]);
        let metrics = calculate_metrics(guess, &candidates);

        assert!((metrics.entropy - expected_bits(guess, &candidates)).abs() < 1e-12);
        // Each bucket holds one candidate: expected remaining is 1
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
        assert_eq!(metrics.worst_bucket, 1);
    }

    #[test]
    fn distribution_counts_every_candidate() {
        let guess = Word::parse("crane").unwrap();
        let candidates = words(&["slate", "crate", "crane", "fuzzy"]);
        let buckets = feedback_distribution(guess, &candidates);
        assert_eq!(buckets.values().sum::<usize>(), candidates.len());
    }
}
