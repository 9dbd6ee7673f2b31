//! Configuration loading and management for the leave calculator.
//!
//! The calculator runs on built-in constants: a 28 day statutory
//! allowance, two decimal places, and a leave year starting January 1.
//! A YAML file can override any of them at startup.
//!
//! # Example
//!
//! ```
//! use leave_calculator::config::ConfigLoader;
//!
//! let loader = ConfigLoader::default();
//! assert_eq!(loader.config().rounding_precision, 2);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorConfig, DEFAULT_ROUNDING_PRECISION, MAX_ROUNDING_PRECISION, MonthDay,
    STATUTORY_ALLOWANCE_DAYS,
};
