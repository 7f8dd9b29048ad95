//! Terminal output formatting
//!
//! Display utilities for the CLI game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_grid, print_keyboard, print_outcome, print_rejection};
