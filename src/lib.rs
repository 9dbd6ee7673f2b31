//! Partial-year annual leave calculator.
//!
//! This crate prorates a full-year annual leave allowance over the part of
//! a leave year an employee actually works, counting days inclusively at
//! both ends.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
