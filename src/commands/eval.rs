//! Feedback inspection command
//!
//! Evaluates a single guess against a target and returns the feedback row,
//! without any round state. Handy for checking duplicate-letter edge cases.

use crate::core::{Feedback, Word};

/// Result of evaluating one guess/target pair
pub struct EvalResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate a guess against a target
///
/// # Errors
///
/// Returns an error if either word is invalid or the lengths differ.
pub fn eval_pair(target: &str, guess: &str) -> Result<EvalResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess word: {e}"))?;

    if guess.len() != target.len() {
        return Err(format!(
            "Length mismatch: target has {} letters, guess has {}",
            target.len(),
            guess.len()
        ));
    }

    let feedback = Feedback::evaluate(&guess, &target);
    Ok(EvalResult {
        target,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_pair_valid() {
        let result = eval_pair("monkey", "doodle").unwrap();
        assert_eq!(result.target.text(), "MONKEY");
        assert_eq!(result.guess.text(), "DOODLE");
        assert_eq!(result.feedback.to_emoji(), "⬜🟩⬜⬜⬜🟨");
    }

    #[test]
    fn eval_pair_length_mismatch() {
        assert!(eval_pair("horse", "monkey").is_err());
    }

    #[test]
    fn eval_pair_invalid_words() {
        assert!(eval_pair("h0rse", "horse").is_err());
        assert!(eval_pair("horse", "").is_err());
    }
}
