//! Round state machine: state, controller, configuration, and the
//! keyboard status read model.

mod config;
mod controller;
mod keyboard;
mod state;

pub use config::GameConfig;
pub use controller::{Round, SubmitError, SubmitReport};
pub use keyboard::{KeyboardStatus, LetterStatus};
pub use state::{AttemptRecord, Outcome, RoundState};
