//! Constraint model
//!
//! Accumulates guess feedback into positional and letter-count constraints.
//! Constraints only ever tighten within a solve session: a fixed position or
//! a known exact count is never relaxed. `update` returns a new tightened
//! constraint and leaves the input untouched, so callers can keep earlier
//! states around for explanation.

use std::fmt;

use crate::core::feedback::scored_letters;
use crate::core::{ALPHABET, Feedback, Mark, WORD_LEN, Word};

/// Contradiction detected while tightening a constraint
///
/// Not expected during normal operation; it signals inconsistent feedback
/// history (a logic bug or corrupted input) and fails the current solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFeedback {
    /// A position already fixed to one letter was re-fixed to another
    PositionConflict {
        position: usize,
        fixed: u8,
        proposed: u8,
    },
    /// A letter was fixed at a position it was excluded from, or excluded
    /// at its own fixed position
    PositionExcluded { position: usize, letter: u8 },
    /// A letter's count constraint contradicts its known exact count
    CountConflict {
        letter: u8,
        exact: u8,
        proposed: u8,
    },
}

impl fmt::Display for InvalidFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionConflict {
                position,
                fixed,
                proposed,
            } => write!(
                f,
                "position {position} is fixed to '{}' but feedback proposes '{}'",
                *fixed as char, *proposed as char
            ),
            Self::PositionExcluded { position, letter } => write!(
                f,
                "letter '{}' is both required and excluded at position {position}",
                *letter as char
            ),
            Self::CountConflict {
                letter,
                exact,
                proposed,
            } => write!(
                f,
                "letter '{}' has exact count {exact} but feedback requires {proposed}",
                *letter as char
            ),
        }
    }
}

impl std::error::Error for InvalidFeedback {}

/// Positional and count constraints derived from feedback so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Required letter per position, where known
    fixed: [Option<u8>; WORD_LEN],
    /// Excluded letters per position, one bit per letter
    excluded: [u32; WORD_LEN],
    /// Minimum occurrences required per letter
    min_counts: [u8; ALPHABET],
    /// Exact occurrences per letter, where known (zero means excluded
    /// entirely)
    exact_counts: [Option<u8>; ALPHABET],
}

const fn bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

const fn idx(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl Constraint {
    /// An empty constraint that permits every word
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fixed: [None; WORD_LEN],
            excluded: [0; WORD_LEN],
            min_counts: [0; ALPHABET],
            exact_counts: [None; ALPHABET],
        }
    }

    /// Tighten the constraint with one guess and its feedback
    ///
    /// Rules:
    /// - Correct at position i fixes that position to the guessed letter.
    /// - Present excludes the letter from its position and raises the
    ///   letter's minimum count to its Correct+Present marks in this guess.
    /// - Absent excludes the letter from its position; when the letter
    ///   earned no Correct/Present mark anywhere in this guess, its exact
    ///   count becomes the minimum already recorded (commonly zero). When
    ///   it did score elsewhere, only the positional exclusion applies.
    ///
    /// # Errors
    /// Returns `InvalidFeedback` if the update would contradict an
    /// already-fixed position or an already-known exact count.
    pub fn update(&self, guess: Word, feedback: Feedback) -> Result<Self, InvalidFeedback> {
        let mut next = self.clone();
        let scored = scored_letters(guess, feedback);

        for position in 0..WORD_LEN {
            let letter = guess.letter_at(position);
            match feedback.mark_at(position) {
                Mark::Correct => next.fix(position, letter)?,
                Mark::Present | Mark::Absent => next.exclude(position, letter)?,
            }
        }

        let mut seen = [false; ALPHABET];
        for position in 0..WORD_LEN {
            let letter = guess.letter_at(position);
            if std::mem::replace(&mut seen[idx(letter)], true) {
                continue;
            }

            let hits = feedback.hits_for(guess, letter);
            if hits > 0 {
                next.require_at_least(letter, hits)?;
            }

            let any_absent = (0..WORD_LEN).any(|i| {
                guess.letter_at(i) == letter && feedback.mark_at(i) == Mark::Absent
            });
            if any_absent && !scored[idx(letter)] {
                next.require_exactly(letter, next.min_counts[idx(letter)])?;
            }
        }

        Ok(next)
    }

    /// Whether a word is consistent with every accumulated constraint
    #[must_use]
    pub fn permits(&self, word: Word) -> bool {
        for position in 0..WORD_LEN {
            let letter = word.letter_at(position);
            if let Some(required) = self.fixed[position]
                && required != letter
            {
                return false;
            }
            if self.excluded[position] & bit(letter) != 0 {
                return false;
            }
        }

        let counts = word.letter_counts();
        for letter in 0..ALPHABET {
            if counts[letter] < self.min_counts[letter] {
                return false;
            }
            if let Some(exact) = self.exact_counts[letter]
                && counts[letter] != exact
            {
                return false;
            }
        }

        true
    }

    /// The required letter at a position, if fixed
    #[must_use]
    pub const fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// The known exact occurrence count for a letter, if any
    #[must_use]
    pub const fn exact_count(&self, letter: u8) -> Option<u8> {
        self.exact_counts[idx(letter)]
    }

    /// The minimum occurrence count required for a letter
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_counts[idx(letter)]
    }

    fn fix(&mut self, position: usize, letter: u8) -> Result<(), InvalidFeedback> {
        if let Some(fixed) = self.fixed[position]
            && fixed != letter
        {
            return Err(InvalidFeedback::PositionConflict {
                position,
                fixed,
                proposed: letter,
            });
        }
        if self.excluded[position] & bit(letter) != 0 {
            return Err(InvalidFeedback::PositionExcluded { position, letter });
        }
        self.fixed[position] = Some(letter);
        Ok(())
    }

    fn exclude(&mut self, position: usize, letter: u8) -> Result<(), InvalidFeedback> {
        if self.fixed[position] == Some(letter) {
            return Err(InvalidFeedback::PositionExcluded { position, letter });
        }
        self.excluded[position] |= bit(letter);
        Ok(())
    }

    fn require_at_least(&mut self, letter: u8, count: u8) -> Result<(), InvalidFeedback> {
        if let Some(exact) = self.exact_counts[idx(letter)]
            && count > exact
        {
            return Err(InvalidFeedback::CountConflict {
                letter,
                exact,
                proposed: count,
            });
        }
        let slot = &mut self.min_counts[idx(letter)];
        *slot = (*slot).max(count);
        Ok(())
    }

    fn require_exactly(&mut self, letter: u8, count: u8) -> Result<(), InvalidFeedback> {
        if let Some(exact) = self.exact_counts[idx(letter)]
            && exact != count
        {
            return Err(InvalidFeedback::CountConflict {
                letter,
                exact,
                proposed: count,
            });
        }
        self.exact_counts[idx(letter)] = Some(count);
        let slot = &mut self.min_counts[idx(letter)];
        *slot = (*slot).max(count);
        Ok(())
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    fn tighten(constraint: &Constraint, guess: &str, target: &str) -> Constraint {
        let guess = word(guess);
        let feedback = Feedback::evaluate(guess, word(target));
        constraint.update(guess, feedback).unwrap()
    }

    #[test]
    fn empty_constraint_permits_everything() {
        let constraint = Constraint::new();
        for text in ["crane", "zesty", "aaaaa"] {
            assert!(constraint.permits(word(text)));
        }
    }

    #[test]
    fn correct_marks_fix_positions() {
        let constraint = tighten(&Constraint::new(), "crane", "crate");
        assert_eq!(constraint.fixed_at(0), Some(b'c'));
        assert_eq!(constraint.fixed_at(1), Some(b'r'));
        assert_eq!(constraint.fixed_at(2), Some(b'a'));
        assert_eq!(constraint.fixed_at(3), None);
        assert_eq!(constraint.fixed_at(4), Some(b'e'));
    }

    #[test]
    fn absent_letters_are_excluded_entirely() {
        // crane vs slate: c, r, n all miss
        let constraint = tighten(&Constraint::new(), "crane", "slate");
        assert_eq!(constraint.exact_count(b'c'), Some(0));
        assert_eq!(constraint.exact_count(b'r'), Some(0));
        assert_eq!(constraint.exact_count(b'n'), Some(0));
        assert!(!constraint.permits(word("crisp")));
        assert!(constraint.permits(word("slate")));
    }

    #[test]
    fn present_raises_minimum_and_excludes_position() {
        // speed vs erase: both guessed e's are Present
        let constraint = tighten(&Constraint::new(), "speed", "erase");
        assert_eq!(constraint.min_count(b'e'), 2);
        assert_eq!(constraint.exact_count(b'e'), None);
        // A word with one 'e' fails the minimum
        assert!(!constraint.permits(word("niche")));
        assert!(constraint.permits(word("erase")));
    }

    #[test]
    fn absent_with_scored_duplicate_keeps_count_open() {
        // sassy vs stays: one 's' Absent, two scored. The global count of
        // 's' must not be zeroed.
        let constraint = tighten(&Constraint::new(), "sassy", "stays");
        assert_eq!(constraint.exact_count(b's'), None);
        assert_eq!(constraint.min_count(b's'), 2);
        assert!(constraint.permits(word("stays")));
    }

    #[test]
    fn update_does_not_mutate_input() {
        let before = Constraint::new();
        let _ = tighten(&before, "crane", "slate");
        assert_eq!(before, Constraint::new());
    }

    #[test]
    fn target_remains_permitted_through_session() {
        let target = "abbey";
        let mut constraint = Constraint::new();
        for guess in ["crane", "moist", "gabby", "abbey"] {
            constraint = tighten(&constraint, guess, target);
            assert!(constraint.permits(word(target)), "after guessing {guess}");
        }
    }

    #[test]
    fn refixing_position_to_other_letter_fails() {
        let constraint = tighten(&Constraint::new(), "crane", "crate");
        // Claim position 0 is 's' now
        let feedback = Feedback::from([
            Mark::Correct,
            Mark::Absent,
            Mark::Absent,
            Mark::Absent,
            Mark::Absent,
        ]);
        let err = constraint.update(word("smoke"), feedback).unwrap_err();
        assert!(matches!(
            err,
            InvalidFeedback::PositionConflict {
                position: 0,
                fixed: b'c',
                proposed: b's',
            }
        ));
    }

    #[test]
    fn excluding_fixed_letter_at_its_position_fails() {
        let constraint = tighten(&Constraint::new(), "crane", "crate");
        // Same word again, but claiming 'c' is merely Present at position 0
        let feedback = Feedback::from([
            Mark::Present,
            Mark::Correct,
            Mark::Correct,
            Mark::Absent,
            Mark::Correct,
        ]);
        let err = constraint.update(word("crane"), feedback).unwrap_err();
        assert!(matches!(
            err,
            InvalidFeedback::PositionExcluded {
                position: 0,
                letter: b'c',
            }
        ));
    }

    #[test]
    fn minimum_above_known_exact_fails() {
        // First guess proves there is no 'e' at all, then a later feedback
        // claims one is Present.
        let no_e = Constraint::new()
            .update(word("eerie"), Feedback::from([Mark::Absent; 5]))
            .unwrap();
        assert_eq!(no_e.exact_count(b'e'), Some(0));

        let feedback = Feedback::from([
            Mark::Present,
            Mark::Absent,
            Mark::Absent,
            Mark::Absent,
            Mark::Absent,
        ]);
        let err = no_e.update(word("ethos"), feedback).unwrap_err();
        assert!(matches!(
            err,
            InvalidFeedback::CountConflict {
                letter: b'e',
                exact: 0,
                proposed: 1,
            }
        ));
    }

    #[test]
    fn constraints_only_tighten() {
        let target = "crane";
        let mut constraint = Constraint::new();
        let mut fixed_positions = 0;
        for guess in ["slate", "brine", "crane"] {
            constraint = tighten(&constraint, guess, target);
            let now_fixed = (0..WORD_LEN)
                .filter(|&i| constraint.fixed_at(i).is_some())
                .count();
            assert!(now_fixed >= fixed_positions);
            fixed_positions = now_fixed;
        }
        assert_eq!(fixed_positions, WORD_LEN);
    }
}
