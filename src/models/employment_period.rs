//! Employment period model.

use chrono::NaiveDate;
use serde::Serialize;

use super::LeaveYear;
use super::leave_year::inclusive_days;

/// The inclusive date range an employee is present during a leave year.
///
/// Unlike [`LeaveYear`], no ordering between `start` and `end` is enforced:
/// an inverted period simply has a zero or negative length.
///
/// # Example
///
/// ```
/// use leave_calculator::models::EmploymentPeriod;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let period = EmploymentPeriod { start: day, end: day };
/// assert_eq!(period.length_days(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmploymentPeriod {
    /// The employee's first day (inclusive).
    pub start: NaiveDate,
    /// The employee's last day (inclusive).
    pub end: NaiveDate,
}

impl EmploymentPeriod {
    /// An employment period covering the whole of `leave_year`.
    pub fn whole_year(leave_year: &LeaveYear) -> Self {
        Self {
            start: leave_year.start(),
            end: leave_year.end(),
        }
    }

    /// Number of days employed, counting both ends.
    pub fn length_days(&self) -> i64 {
        inclusive_days(self.start, self.end)
    }

    /// Returns true if the period starts after it ends.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Returns true if both ends fall inside `leave_year`.
    pub fn is_within(&self, leave_year: &LeaveYear) -> bool {
        leave_year.contains_date(self.start) && leave_year.contains_date(self.end)
    }
}
