//! Configuration types for the leave calculator.
//!
//! This module contains the startup constants and the strongly-typed
//! structure that an optional YAML file is deserialized into.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LeaveError, LeaveResult};
use crate::models::{LeaveAllowance, LeaveYear};

/// Days of annual leave assumed for a full year when no answer is given.
pub const STATUTORY_ALLOWANCE_DAYS: i64 = 28;

/// Decimal places the entitlement is rounded to by default.
pub const DEFAULT_ROUNDING_PRECISION: u32 = 2;

/// Largest rounding precision a configuration may ask for.
pub const MAX_ROUNDING_PRECISION: u32 = 10;

/// A month and day, used for the recurring first day of the leave year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    /// Month of the year, 1 to 12.
    pub month: u32,
    /// Day of the month.
    pub day: u32,
}

impl MonthDay {
    /// January 1.
    pub const JANUARY_FIRST: MonthDay = MonthDay { month: 1, day: 1 };

    /// This month and day in `year`.
    pub fn in_year(&self, year: i32) -> LeaveResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or_else(|| {
            LeaveError::InvalidConfig {
                field: "leave_year_start".to_string(),
                message: format!(
                    "month {} day {} does not exist in {}",
                    self.month, self.day, year
                ),
            }
        })
    }
}

/// Startup configuration for the calculator.
///
/// Every field falls back to its built-in constant when missing from the
/// YAML file.
///
/// # Example
///
/// ```
/// use leave_calculator::config::CalculatorConfig;
/// use rust_decimal::Decimal;
///
/// let config = CalculatorConfig::default();
/// assert_eq!(config.statutory_allowance_days, Decimal::new(28, 0));
/// assert_eq!(config.rounding_precision, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Full-year allowance offered as the default answer.
    pub statutory_allowance_days: Decimal,
    /// Decimal places the entitlement is rounded to.
    pub rounding_precision: u32,
    /// First day of each leave year.
    pub leave_year_start: MonthDay,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            statutory_allowance_days: Decimal::from(STATUTORY_ALLOWANCE_DAYS),
            rounding_precision: DEFAULT_ROUNDING_PRECISION,
            leave_year_start: MonthDay::JANUARY_FIRST,
        }
    }
}

impl CalculatorConfig {
    /// Checks that every field holds a usable value.
    ///
    /// The leave year start must exist in every year, so February 29 is
    /// rejected.
    pub fn validate(&self) -> LeaveResult<()> {
        if self.statutory_allowance_days < Decimal::ZERO {
            return Err(LeaveError::InvalidConfig {
                field: "statutory_allowance_days".to_string(),
                message: format!("{} is negative", self.statutory_allowance_days),
            });
        }

        if self.rounding_precision > MAX_ROUNDING_PRECISION {
            return Err(LeaveError::InvalidConfig {
                field: "rounding_precision".to_string(),
                message: format!(
                    "{} exceeds the maximum of {}",
                    self.rounding_precision, MAX_ROUNDING_PRECISION
                ),
            });
        }

        // 2001 is a common year.
        self.leave_year_start.in_year(2001)?;
        Ok(())
    }

    /// The default full-year allowance.
    pub fn default_allowance(&self) -> LeaveResult<LeaveAllowance> {
        LeaveAllowance::new(self.statutory_allowance_days)
    }

    /// The leave year beginning on the configured start day in `year`.
    pub fn leave_year_starting_in(&self, year: i32) -> LeaveResult<LeaveYear> {
        LeaveYear::starting_on(self.leave_year_start.in_year(year)?)
    }

    /// The leave year containing `today`.
    pub fn current_leave_year(&self, today: NaiveDate) -> LeaveResult<LeaveYear> {
        let this_year = self.leave_year_starting_in(today.year())?;
        if today < this_year.start() {
            return self.leave_year_starting_in(today.year() - 1);
        }
        Ok(this_year)
    }
}
