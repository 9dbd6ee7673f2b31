//! Proration result models.
//!
//! This module contains the [`ProrationResult`] type and the audit trace
//! that records how a prorated entitlement was derived.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{EmploymentPeriod, LeaveAllowance, LeaveYear};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of
/// the proration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that still produce a number but probably not the
/// one the user wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The outcome of prorating a full-year allowance over an employment period.
///
/// # Example
///
/// ```
/// use leave_calculator::calculation::calculate_proration;
/// use leave_calculator::models::{EmploymentPeriod, LeaveAllowance, LeaveYear};
/// use rust_decimal::Decimal;
///
/// let year = LeaveYear::calendar(2026).unwrap();
/// let allowance = LeaveAllowance::new(Decimal::new(28, 0)).unwrap();
/// let result =
///     calculate_proration(&allowance, &year, &EmploymentPeriod::whole_year(&year), 2).unwrap();
///
/// assert_eq!(result.to_string(), "28.00 days annual leave");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProrationResult {
    /// The full-year allowance that was prorated.
    pub allowance: LeaveAllowance,
    /// The leave year the allowance accrues over.
    pub leave_year: LeaveYear,
    /// The portion of the leave year the employee is present.
    pub employment: EmploymentPeriod,
    /// Inclusive length of the leave year in days.
    pub leave_year_days: i64,
    /// Inclusive length of the employment period in days.
    pub employed_days: i64,
    /// `employed_days / leave_year_days`, unrounded.
    pub proportion: Decimal,
    /// The prorated entitlement, rounded to `precision` places.
    pub entitlement_days: Decimal,
    /// Number of decimal places the entitlement was rounded to.
    pub precision: u32,
    /// Record of every calculation step and warning.
    pub audit_trace: AuditTrace,
}

impl ProrationResult {
    /// The entitlement formatted with exactly `precision` decimal places.
    pub fn formatted_entitlement(&self) -> String {
        format!("{:.*}", self.precision as usize, self.entitlement_days)
    }

    /// Returns true if the calculation raised any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.audit_trace.warnings.is_empty()
    }
}

impl fmt::Display for ProrationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days annual leave", self.formatted_entitlement())
    }
}
