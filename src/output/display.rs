//! Display functions for the CLI game

use colored::Colorize;

use crate::round::{Outcome, RoundState, SubmitError};

use super::formatters::{empty_row, feedback_row, keyboard_row};

/// Print the full grid: evaluated rows first, then unrevealed rows
pub fn print_grid(state: &RoundState) {
    for record in state.history() {
        println!("  {}", feedback_row(&record.guess, &record.feedback));
    }
    for _ in state.attempt_index()..state.budget() {
        println!("  {}", empty_row(state.target().len()));
    }
}

/// Print the keyboard status line derived from the round's history
pub fn print_keyboard(state: &RoundState) {
    use crate::round::KeyboardStatus;
    println!("  {}", keyboard_row(&KeyboardStatus::project(state.history())));
}

/// Print the terminal message for a finished round; no-op while in progress
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::InProgress => {}
        Outcome::Won(attempts) => {
            let plural = if *attempts == 1 { "guess" } else { "guesses" };
            println!(
                "\n{}",
                format!("🎉 Won in {attempts} {plural}!").green().bold()
            );
        }
        Outcome::Lost(target) => {
            println!(
                "\n{}",
                format!("❌ Lost. The word was {target}.").red().bold()
            );
        }
    }
}

/// Print a transient rejection message
pub fn print_rejection(error: SubmitError) {
    match error {
        // Defensive; input is gated on the outcome
        SubmitError::GameOver => {}
        SubmitError::IncompleteGuess | SubmitError::NotAWord => {
            println!("  {}", error.to_string().yellow());
        }
    }
}
