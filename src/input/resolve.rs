//! Default-applying resolution of prompt answers.
//!
//! Resolution is independent of console I/O: it takes the raw text of an
//! answer, the default, and a parser. Empty answers take the default.
//! Non-empty answers that fail to parse are rejected rather than silently
//! replaced by the default.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{LeaveError, LeaveResult};
use crate::models::LeaveAllowance;

/// Date format accepted at every date prompt.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolves one answer to a prompt.
///
/// # Arguments
///
/// * `raw` - The text entered, including any trailing newline
/// * `default` - The value used when `raw` is blank
/// * `field` - Name of the field, used in error messages
/// * `parser` - Converts trimmed non-empty text, or explains why it cannot
///
/// # Example
///
/// ```
/// use leave_calculator::input::{parse_date, resolve_input};
/// use chrono::NaiveDate;
///
/// let default = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(resolve_input("\n", default, "start date", parse_date).unwrap(), default);
/// assert!(resolve_input("next week\n", default, "start date", parse_date).is_err());
/// ```
pub fn resolve_input<T, F>(raw: &str, default: T, field: &str, parser: F) -> LeaveResult<T>
where
    F: Fn(&str) -> Result<T, String>,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }

    parser(trimmed).map_err(|reason| LeaveError::InvalidInput {
        field: field.to_string(),
        input: trimmed.to_string(),
        reason,
    })
}

/// Parses a full-year allowance in days.
pub fn parse_allowance(text: &str) -> Result<LeaveAllowance, String> {
    let days = Decimal::from_str(text).map_err(|_| "expected a number of days".to_string())?;
    LeaveAllowance::new(days).map_err(|_| "cannot be negative".to_string())
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| format!("expected a date in YYYY-MM-DD format ({})", e))
}
