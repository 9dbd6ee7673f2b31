//! Calculation logic for the leave calculator.
//!
//! This module contains the proration of a full-year allowance over an
//! employment period and the rounding applied to the resulting entitlement.

mod proration;
mod rounding;

pub use proration::{
    WARNING_OUTSIDE_LEAVE_YEAR, WARNING_PERIOD_INVERTED, calculate_proration, prorate_allowance,
};
pub use rounding::round_entitlement;
