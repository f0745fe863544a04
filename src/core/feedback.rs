//! Per-letter guess feedback and its evaluator
//!
//! Feedback is an ordered sequence of five marks, one per position:
//! Correct (right letter, right spot), Present (right letter, wrong spot)
//! or Absent. Duplicate letters follow the official consume rule: each
//! target occurrence of a letter rewards at most one guess position,
//! Correct marks first, then Present marks left to right.

use super::word::{ALPHABET, WORD_LEN, Word};

/// Number of distinct feedback values (3^5)
pub const FEEDBACK_COUNT: usize = 243;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    /// Letter does not occur (or all its occurrences are consumed)
    Absent = 0,
    /// Letter occurs elsewhere in the target
    Present = 1,
    /// Letter matches the target at this position
    Correct = 2,
}

/// Feedback for one guess: five ordered marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All positions Correct (the guess equals the target)
    pub const CORRECT: Self = Self([Mark::Correct; WORD_LEN]);

    /// Evaluate a guess against a target
    ///
    /// Two passes. Pass 1 marks exact-position matches Correct and consumes
    /// those letters from the target's available-occurrence pool. Pass 2
    /// scans the remaining positions left to right, marking Present while
    /// an unconsumed occurrence remains, else Absent. Pure and
    /// deterministic.
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::parse("sassy").unwrap();
    /// let target = Word::parse("stays").unwrap();
    /// let feedback = Feedback::evaluate(guess, target);
    ///
    /// // "stays" holds two of the three guessed 's': the exact match is
    /// // Correct, the first remaining 's' earns Present, the last is Absent.
    /// assert_eq!(
    ///     feedback.marks(),
    ///     [Mark::Correct, Mark::Present, Mark::Present, Mark::Absent, Mark::Present]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: Word, target: Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut available = target.letter_counts();

        for i in 0..WORD_LEN {
            if guess.letter_at(i) == target.letter_at(i) {
                marks[i] = Mark::Correct;
                available[usize::from(guess.letter_at(i) - b'a')] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            let slot = &mut available[usize::from(guess.letter_at(i) - b'a')];
            if *slot > 0 {
                *mark = Mark::Present;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    /// The five marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(self) -> [Mark; WORD_LEN] {
        self.0
    }

    /// The mark at a position (0-4)
    ///
    /// # Panics
    /// Panics if `position >= 5`.
    #[inline]
    #[must_use]
    pub const fn mark_at(self, position: usize) -> Mark {
        self.0[position]
    }

    /// Whether every mark is Correct
    #[inline]
    #[must_use]
    pub fn is_all_correct(self) -> bool {
        self == Self::CORRECT
    }

    /// Base-3 encoding in `0..243`, position 0 being the least significant
    /// digit
    ///
    /// Used to bucket candidate answers by the feedback a guess would earn.
    #[must_use]
    pub fn index(self) -> u8 {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in self.0 {
            value += mark as u8 * multiplier;
            multiplier *= 3;
        }
        value
    }

    /// Render the feedback as colored squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }

    /// How many marks for `letter` in `guess` are Correct or Present
    ///
    /// This is the number of target occurrences of `letter` this guess
    /// proves, the basis for the constraint model's count rules.
    #[must_use]
    pub fn hits_for(self, guess: Word, letter: u8) -> u8 {
        let mut hits = 0;
        for i in 0..WORD_LEN {
            if guess.letter_at(i) == letter && self.0[i] != Mark::Absent {
                hits += 1;
            }
        }
        hits
    }
}

impl From<[Mark; WORD_LEN]> for Feedback {
    fn from(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }
}

/// Letters that earned at least one Correct or Present mark in a guess
#[must_use]
pub(crate) fn scored_letters(guess: Word, feedback: Feedback) -> [bool; ALPHABET] {
    let mut scored = [false; ALPHABET];
    for i in 0..WORD_LEN {
        if feedback.mark_at(i) != Mark::Absent {
            scored[usize::from(guess.letter_at(i) - b'a')] = true;
        }
    }
    scored
}
