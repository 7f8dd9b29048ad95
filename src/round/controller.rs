//! Round controller
//!
//! Orchestrates guess submission: validates the raw input against the
//! round's lexicon, runs the evaluator, records the attempt, and settles
//! the win/loss outcome. Validation happens strictly before any mutation,
//! so a rejected submission leaves the round untouched.

use std::fmt;

use crate::core::{Feedback, Word};
use crate::wordlists::Lexicon;

use super::config::GameConfig;
use super::keyboard::KeyboardStatus;
use super::state::{Outcome, RoundState};

/// Why a submission was rejected
///
/// All variants are recoverable: the player corrects the row and resubmits.
/// `GameOver` exists as a defensive guard; front-ends gate input on the
/// outcome, so it should be unreachable in practice and is ignored silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The round has already been won or lost
    GameOver,
    /// The row is not fully populated with letters of the target's length
    IncompleteGuess,
    /// The guess is not in the lexicon
    NotAWord,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The round is already over"),
            Self::IncompleteGuess => write!(f, "Fill every cell before submitting"),
            Self::NotAWord => write!(f, "Not a word in the lexicon"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// What an accepted submission produced, for the caller to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub feedback: Feedback,
    pub outcome: Outcome,
}

/// One playable round against a lexicon
///
/// Owns the [`RoundState`] for the round's lifetime. Starting a new round
/// replaces the state wholesale.
pub struct Round<'a> {
    lexicon: &'a Lexicon,
    config: GameConfig,
    state: RoundState,
}

impl<'a> Round<'a> {
    /// Start a round for the given target
    ///
    /// The attempt budget is computed once here from the target's length
    /// and stays fixed for the round's lifetime.
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, config: GameConfig, target: Word) -> Self {
        let budget = config.budget_for(target.len());
        Self {
            lexicon,
            config,
            state: RoundState::new(target, budget),
        }
    }

    /// Discard all progress and start over with a new target
    pub fn restart(&mut self, target: Word) {
        let budget = self.config.budget_for(target.len());
        self.state = RoundState::new(target, budget);
    }

    /// Submit a guess for the active attempt row
    ///
    /// Preconditions are checked in order, each with its own rejection:
    /// game over, then row completeness and length, then lexicon
    /// membership. Rejections never mutate state.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] describing the first failed precondition.
    pub fn submit(&mut self, raw: &str) -> Result<SubmitReport, SubmitError> {
        if self.state.outcome().is_over() {
            return Err(SubmitError::GameOver);
        }

        let guess = Word::new(raw).map_err(|_| SubmitError::IncompleteGuess)?;
        if guess.len() != self.state.target().len() {
            return Err(SubmitError::IncompleteGuess);
        }

        if !self.lexicon.contains(guess.text()) {
            return Err(SubmitError::NotAWord);
        }

        let feedback = Feedback::evaluate(&guess, self.state.target());
        let won = guess == *self.state.target();

        self.state.record_attempt(guess, feedback.clone());

        if won {
            self.state.set_outcome(Outcome::Won(self.state.attempt_index()));
        } else if self.state.attempt_index() == self.state.budget() {
            self.state
                .set_outcome(Outcome::Lost(self.state.target().clone()));
        }

        Ok(SubmitReport {
            feedback,
            outcome: self.state.outcome().clone(),
        })
    }

    /// Read access to the round's state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Keyboard status projection over the current history
    #[must_use]
    pub fn keyboard(&self) -> KeyboardStatus {
        KeyboardStatus::project(self.state.history())
    }

    /// The configuration this round was started with
    #[inline]
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }
}
