//! Candidate filter
//!
//! Narrows the answer list to words consistent with an accumulated
//! constraint. Pure and deterministic, O(answers × word length). The
//! candidate set is always recomputed from the full answer list rather
//! than mutated in place; because constraints only tighten, the result
//! still shrinks monotonically across a session.

use super::constraint::Constraint;
use crate::core::Word;

/// Answer words still consistent with the feedback collected so far
pub type CandidateSet = Vec<Word>;

/// Retain the answers permitted by the constraint
#[must_use]
pub fn filter_candidates(answers: &[Word], constraint: &Constraint) -> CandidateSet {
    answers
        .iter()
        .copied()
        .filter(|&word| constraint.permits(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::parse(t).unwrap()).collect()
    }

    fn constraint_for(guess: &str, target: &str) -> Constraint {
        let guess = Word::parse(guess).unwrap();
        let target = Word::parse(target).unwrap();
        Constraint::new()
            .update(guess, Feedback::evaluate(guess, target))
            .unwrap()
    }

    #[test]
    fn empty_constraint_keeps_all() {
        let answers = words(&["crane", "slate", "irate"]);
        let kept = filter_candidates(&answers, &Constraint::new());
        assert_eq!(kept, answers);
    }

    #[test]
    fn filter_respects_feedback() {
        let answers = words(&["crane", "crate", "grate", "slate", "blimp"]);
        let constraint = constraint_for("crane", "crate");

        let kept = filter_candidates(&answers, &constraint);

        // c, r, a fixed and e fixed at the end; n has exact count 0
        assert_eq!(kept, words(&["crate"]));
    }

    #[test]
    fn filtering_is_monotonic_and_keeps_target() {
        let answers = words(&["crane", "crate", "grate", "slate", "irate", "trace"]);
        let target = Word::parse("grate").unwrap();

        let mut constraint = Constraint::new();
        let mut previous = answers.len();
        for guess in ["slate", "crate", "grate"] {
            let guess = Word::parse(guess).unwrap();
            constraint = constraint
                .update(guess, Feedback::evaluate(guess, target))
                .unwrap();

            let kept = filter_candidates(&answers, &constraint);
            assert!(kept.len() <= previous, "candidate set grew");
            assert!(kept.contains(&target), "target filtered out");
            previous = kept.len();
        }
    }

    #[test]
    fn contradictory_constraint_yields_empty_set() {
        let answers = words(&["crane", "slate"]);
        // No answer contains a 'z', so requiring one empties the set
        let guess = Word::parse("zzzzz").unwrap();
        let feedback = Feedback::evaluate(guess, Word::parse("fuzzy").unwrap());
        let constraint = Constraint::new().update(guess, feedback).unwrap();

        assert!(filter_candidates(&answers, &constraint).is_empty());
    }
}
