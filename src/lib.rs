//! Guessword
//!
//! A terminal word-guessing game. Targets vary in length, and the attempt
//! budget scales with it: `ceil(length × 1.5)` guesses by default.
//!
//! # Quick Start
//!
//! ```rust
//! use guessword::core::{Feedback, Word};
//!
//! // Create words
//! let guess = Word::new("donkey").unwrap();
//! let target = Word::new("monkey").unwrap();
//!
//! // Evaluate the guess
//! let feedback = Feedback::evaluate(&guess, &target);
//! println!("Feedback: {}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Round state machine and controller
pub mod round;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
