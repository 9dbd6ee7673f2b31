//! Prorating a full-year allowance over part of a leave year.
//!
//! The entitlement is `allowance * employed_days / leave_year_days`, where
//! both day counts include their first and last day. Out-of-range
//! employment periods are not clamped; they are flagged in the audit trace
//! and the arithmetic result is returned as is.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{LeaveError, LeaveResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, EmploymentPeriod, LeaveAllowance, LeaveYear,
    ProrationResult,
};

use super::rounding::round_entitlement;

/// Warning code for an employment period reaching outside the leave year.
pub const WARNING_OUTSIDE_LEAVE_YEAR: &str = "EMPLOYMENT_OUTSIDE_LEAVE_YEAR";

/// Warning code for an employment period that ends before it starts.
pub const WARNING_PERIOD_INVERTED: &str = "EMPLOYMENT_PERIOD_INVERTED";

/// Computes the rounded prorated entitlement without an audit trace.
///
/// # Example
///
/// ```
/// use leave_calculator::calculation::prorate_allowance;
/// use leave_calculator::models::{EmploymentPeriod, LeaveAllowance, LeaveYear};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let year = LeaveYear::calendar(2026).unwrap();
/// let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let one_day = EmploymentPeriod { start: day, end: day };
/// let allowance = LeaveAllowance::new(Decimal::new(28, 0)).unwrap();
///
/// let days = prorate_allowance(&allowance, &year, &one_day, 2).unwrap();
/// assert_eq!(days, Decimal::new(8, 2));
/// ```
pub fn prorate_allowance(
    allowance: &LeaveAllowance,
    leave_year: &LeaveYear,
    employment: &EmploymentPeriod,
    precision: u32,
) -> LeaveResult<Decimal> {
    let unrounded = scale_allowance(allowance, leave_year, employment)?;
    Ok(round_entitlement(unrounded, precision))
}

/// Prorates `allowance` over `employment` and records every step.
///
/// # Arguments
///
/// * `allowance` - Days of leave for the complete leave year
/// * `leave_year` - The leave year the allowance accrues over
/// * `employment` - The part of the leave year the employee is present
/// * `precision` - Decimal places to round the entitlement to
///
/// # Returns
///
/// A [`ProrationResult`] holding the rounded entitlement, the day counts,
/// the proportion, and an audit trace of four steps. Fails only if the
/// arithmetic overflows.
pub fn calculate_proration(
    allowance: &LeaveAllowance,
    leave_year: &LeaveYear,
    employment: &EmploymentPeriod,
    precision: u32,
) -> LeaveResult<ProrationResult> {
    let mut trace = AuditTrace::default();

    let leave_year_days = leave_year.length_days();
    trace.steps.push(AuditStep {
        step_number: 1,
        rule_id: "leave_year_length".to_string(),
        rule_name: "Leave Year Length".to_string(),
        input: serde_json::json!({
            "start": leave_year.start().to_string(),
            "end": leave_year.end().to_string()
        }),
        output: serde_json::json!({ "days": leave_year_days }),
        reasoning: format!(
            "{} to {} inclusive = {} days",
            leave_year.start(),
            leave_year.end(),
            leave_year_days
        ),
    });

    let employed_days = employment.length_days();
    trace.steps.push(AuditStep {
        step_number: 2,
        rule_id: "employment_length".to_string(),
        rule_name: "Employment Period Length".to_string(),
        input: serde_json::json!({
            "start": employment.start.to_string(),
            "end": employment.end.to_string()
        }),
        output: serde_json::json!({ "days": employed_days }),
        reasoning: format!(
            "{} to {} inclusive = {} days",
            employment.start, employment.end, employed_days
        ),
    });

    if employment.is_inverted() {
        let message = format!(
            "Employment ends on {} before it starts on {}",
            employment.end, employment.start
        );
        warn!(start = %employment.start, end = %employment.end, "{}", message);
        trace.warnings.push(AuditWarning {
            code: WARNING_PERIOD_INVERTED.to_string(),
            message,
        });
    }

    if !employment.is_within(leave_year) {
        let message = format!(
            "Employment {} to {} is not inside the leave year {} to {}",
            employment.start,
            employment.end,
            leave_year.start(),
            leave_year.end()
        );
        warn!(
            leave_year_start = %leave_year.start(),
            leave_year_end = %leave_year.end(),
            "{}",
            message
        );
        trace.warnings.push(AuditWarning {
            code: WARNING_OUTSIDE_LEAVE_YEAR.to_string(),
            message,
        });
    }

    let proportion = proportion_of_year(leave_year, employment)?;
    trace.steps.push(AuditStep {
        step_number: 3,
        rule_id: "proportion_of_year".to_string(),
        rule_name: "Proportion of Leave Year".to_string(),
        input: serde_json::json!({
            "employed_days": employed_days,
            "leave_year_days": leave_year_days
        }),
        output: serde_json::json!({ "proportion": proportion.normalize().to_string() }),
        reasoning: format!(
            "{} / {} = {}",
            employed_days,
            leave_year_days,
            proportion.normalize()
        ),
    });

    let unrounded = scale_allowance(allowance, leave_year, employment)?;
    let entitlement_days = round_entitlement(unrounded, precision);
    trace.steps.push(AuditStep {
        step_number: 4,
        rule_id: "prorated_allowance".to_string(),
        rule_name: "Prorated Allowance".to_string(),
        input: serde_json::json!({
            "allowance": allowance.days().normalize().to_string(),
            "employed_days": employed_days,
            "leave_year_days": leave_year_days,
            "precision": precision
        }),
        output: serde_json::json!({
            "unrounded": unrounded.normalize().to_string(),
            "entitlement_days": entitlement_days.to_string()
        }),
        reasoning: format!(
            "{} x {} / {} = {}, rounded to {} places = {}",
            allowance,
            employed_days,
            leave_year_days,
            unrounded.normalize(),
            precision,
            entitlement_days
        ),
    });

    debug!(
        allowance = %allowance,
        leave_year_days,
        employed_days,
        entitlement = %entitlement_days,
        "Proration calculated"
    );

    Ok(ProrationResult {
        allowance: *allowance,
        leave_year: *leave_year,
        employment: *employment,
        leave_year_days,
        employed_days,
        proportion,
        entitlement_days,
        precision,
        audit_trace: trace,
    })
}

/// `employed_days / leave_year_days` as an unrounded decimal. Reported in
/// the audit trace only; the entitlement is scaled from the day counts.
fn proportion_of_year(
    leave_year: &LeaveYear,
    employment: &EmploymentPeriod,
) -> LeaveResult<Decimal> {
    Decimal::from(employment.length_days())
        .checked_div(Decimal::from(leave_year.length_days()))
        .ok_or_else(|| LeaveError::CalculationError {
            message: "leave year has no days".to_string(),
        })
}

/// `allowance * employed_days / leave_year_days`, multiplying first so the
/// result is exact whenever a decimal can hold it.
fn scale_allowance(
    allowance: &LeaveAllowance,
    leave_year: &LeaveYear,
    employment: &EmploymentPeriod,
) -> LeaveResult<Decimal> {
    let employed_days = employment.length_days();
    let leave_year_days = leave_year.length_days();
    allowance
        .days()
        .checked_mul(Decimal::from(employed_days))
        .and_then(|scaled| scaled.checked_div(Decimal::from(leave_year_days)))
        .ok_or_else(|| LeaveError::CalculationError {
            message: format!(
                "{} x {} / {} overflows",
                allowance, employed_days, leave_year_days
            ),
        })
}
