//! Command implementations

pub mod eval;
pub mod simple;

pub use eval::{EvalResult, eval_pair};
pub use simple::run_simple;
