//! Full-year leave allowance model.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LeaveError, LeaveResult};

/// Days of annual leave granted for a complete leave year.
///
/// Always non-negative. Fractional days are allowed.
///
/// # Example
///
/// ```
/// use leave_calculator::models::LeaveAllowance;
/// use rust_decimal::Decimal;
///
/// let allowance = LeaveAllowance::new(Decimal::new(28, 0)).unwrap();
/// assert_eq!(allowance.days(), Decimal::new(28, 0));
/// assert!(LeaveAllowance::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LeaveAllowance(Decimal);

impl LeaveAllowance {
    /// Creates an allowance, rejecting negative day counts.
    pub fn new(days: Decimal) -> LeaveResult<Self> {
        if days < Decimal::ZERO {
            return Err(LeaveError::InvalidAllowance { days });
        }
        Ok(Self(days))
    }

    /// The number of days granted for a full leave year.
    pub fn days(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for LeaveAllowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
