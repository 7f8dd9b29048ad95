//! Round state bookkeeping
//!
//! `RoundState` is the sole owner of game progress: the target, the attempt
//! budget, the history of evaluated guesses, and the outcome. It carries no
//! game logic beyond recording; the controller drives all transitions.
//! Rendering layers read from it and never write.

use crate::core::{Feedback, Word};

/// Final or in-flight result of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Attempts remain and the target has not been guessed
    InProgress,
    /// Target guessed; payload is the 1-based number of guesses used
    Won(usize),
    /// Budget exhausted; payload reveals the target
    Lost(Word),
}

impl Outcome {
    /// True once the round has ended, in either direction
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Complete state of one round
///
/// Created fresh per round and replaced wholesale on reset. The active
/// attempt index always equals `history().len()`.
#[derive(Debug, Clone)]
pub struct RoundState {
    target: Word,
    budget: usize,
    history: Vec<AttemptRecord>,
    outcome: Outcome,
}

impl RoundState {
    /// Create a fresh round for the given target and attempt budget
    #[must_use]
    pub fn new(target: Word, budget: usize) -> Self {
        Self {
            target,
            budget,
            history: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// The hidden word for this round
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Maximum number of guesses, fixed at round start
    #[inline]
    #[must_use]
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Index of the active attempt row (0-based); equals guesses submitted
    #[inline]
    #[must_use]
    pub fn attempt_index(&self) -> usize {
        self.history.len()
    }

    /// All evaluated guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Attempts left before the round is lost
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.budget.saturating_sub(self.history.len())
    }

    pub(crate) fn record_attempt(&mut self, guess: Word, feedback: Feedback) {
        debug_assert!(!self.outcome.is_over(), "no attempts after game over");
        debug_assert!(self.history.len() < self.budget, "budget exceeded");
        self.history.push(AttemptRecord { guess, feedback });
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn fresh_state_is_empty_and_in_progress() {
        let state = RoundState::new(word("HORSE"), 8);
        assert_eq!(state.target().text(), "HORSE");
        assert_eq!(state.budget(), 8);
        assert_eq!(state.attempt_index(), 0);
        assert!(state.history().is_empty());
        assert_eq!(state.outcome(), &Outcome::InProgress);
        assert_eq!(state.attempts_remaining(), 8);
    }

    #[test]
    fn attempt_index_tracks_history_length() {
        let mut state = RoundState::new(word("HORSE"), 8);
        let guess = word("OTTER");
        let feedback = Feedback::evaluate(&guess, state.target());

        state.record_attempt(guess, feedback);
        assert_eq!(state.attempt_index(), 1);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.attempts_remaining(), 7);
    }

    #[test]
    fn outcome_is_over() {
        assert!(!Outcome::InProgress.is_over());
        assert!(Outcome::Won(3).is_over());
        assert!(Outcome::Lost(word("HORSE")).is_over());
    }
}
