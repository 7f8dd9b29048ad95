//! Keyboard letter status projection
//!
//! Tracks the best feedback seen so far for each of the 26 letters across
//! all submitted guesses. This is a read model derived from round history,
//! never a source of truth; it can always be rebuilt with [`KeyboardStatus::project`].

use crate::core::{Feedback, LetterFeedback, Word};

use super::state::AttemptRecord;

/// Best-seen verdict for a single keyboard letter
///
/// Ordered so that better information compares greater: once a letter is
/// known `Correct` somewhere, a later `Present` or `Absent` never downgrades it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl From<LetterFeedback> for LetterStatus {
    fn from(tag: LetterFeedback) -> Self {
        match tag {
            LetterFeedback::Absent => Self::Absent,
            LetterFeedback::Present => Self::Present,
            LetterFeedback::Correct => Self::Correct,
        }
    }
}

/// Status of every letter A-Z
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardStatus {
    letters: [LetterStatus; 26],
}

impl KeyboardStatus {
    /// Fold one evaluated guess into the projection
    ///
    /// Each letter keeps the maximum of its old and new status.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &tag) in guess.bytes().iter().zip(feedback.tags()) {
            let slot = &mut self.letters[(letter - b'A') as usize];
            *slot = (*slot).max(LetterStatus::from(tag));
        }
    }

    /// Rebuild the projection from scratch over a round's history
    #[must_use]
    pub fn project(history: &[AttemptRecord]) -> Self {
        let mut status = Self::default();
        for record in history {
            status.record(&record.guess, &record.feedback);
        }
        status
    }

    /// Current status of a letter (`b'A'..=b'Z'`)
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter.
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        assert!(letter.is_ascii_uppercase(), "letter must be A-Z");
        self.letters[(letter - b'A') as usize]
    }

    /// Iterate (letter, status) pairs in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .map(|(i, &status)| (b'A' + i as u8, status))
    }
}
