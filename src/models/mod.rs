//! Core data models for the leave calculator.
//!
//! This module contains all the domain models used throughout the crate.

mod allowance;
mod employment_period;
mod leave_year;
mod proration_result;

pub use allowance::LeaveAllowance;
pub use employment_period::EmploymentPeriod;
pub use leave_year::LeaveYear;
pub use proration_result::{AuditStep, AuditTrace, AuditWarning, ProrationResult};
