//! Command-line front end for the leave calculator.
//!
//! This module provides argument parsing and the interactive prompt
//! session that feeds the calculation.

mod args;
mod session;

pub use args::{Args, PromptMode};
pub use session::{SessionInputs, collect_inputs, render, report_outcome, run_session};
