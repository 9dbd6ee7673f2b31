//! Reading the calculator's inputs.
//!
//! [`resolve_input`] applies defaults to raw answers without touching the
//! console; [`Prompter`] does the console side.

mod prompt;
mod resolve;

pub use prompt::Prompter;
pub use resolve::{DATE_FORMAT, parse_allowance, parse_date, resolve_input};
