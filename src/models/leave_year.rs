//! Leave year model.
//!
//! A [`LeaveYear`] is the inclusive date range over which a full annual
//! leave allowance accrues.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{LeaveError, LeaveResult};

/// An inclusive range of calendar dates making up one leave year.
///
/// The end date is never before the start date.
///
/// # Example
///
/// ```
/// use leave_calculator::models::LeaveYear;
/// use chrono::NaiveDate;
///
/// let year = LeaveYear::calendar(2026).unwrap();
/// assert_eq!(year.length_days(), 365);
/// assert!(year.contains_date(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaveYear {
    start: NaiveDate,
    end: NaiveDate,
}

impl LeaveYear {
    /// Creates a leave year from its first and last days.
    ///
    /// Returns [`LeaveError::InvalidLeaveYear`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> LeaveResult<Self> {
        if end < start {
            return Err(LeaveError::InvalidLeaveYear { start, end });
        }
        Ok(Self { start, end })
    }

    /// The leave year running January 1 to December 31 of `year`.
    pub fn calendar(year: i32) -> LeaveResult<Self> {
        let start = date_in(year, 1, 1)?;
        let end = date_in(year, 12, 31)?;
        Self::new(start, end)
    }

    /// The leave year starting on `start` and ending the day before its
    /// first anniversary.
    ///
    /// A leave year starting on February 29 ends on February 28 of the
    /// following year.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_calculator::models::LeaveYear;
    /// use chrono::NaiveDate;
    ///
    /// let year = LeaveYear::starting_on(NaiveDate::from_ymd_opt(2026, 4, 6).unwrap()).unwrap();
    /// assert_eq!(year.end(), NaiveDate::from_ymd_opt(2027, 4, 5).unwrap());
    /// ```
    pub fn starting_on(start: NaiveDate) -> LeaveResult<Self> {
        let next_year = start.year() + 1;
        let anniversary = start
            .with_year(next_year)
            .or_else(|| NaiveDate::from_ymd_opt(next_year, 3, 1))
            .ok_or(LeaveError::InvalidLeaveYear { start, end: start })?;
        let end = anniversary
            .pred_opt()
            .ok_or(LeaveError::InvalidLeaveYear { start, end: start })?;
        Self::new(start, end)
    }

    /// The first day of the leave year.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the leave year.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the leave year, counting both ends.
    pub fn length_days(&self) -> i64 {
        inclusive_days(self.start, self.end)
    }

    /// Checks if a date falls within the leave year (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Counts the days from `start` to `end` with both ends included.
///
/// Zero or negative when `end` is before `start`.
pub(crate) fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days() + 1
}

fn date_in(year: i32, month: u32, day: u32) -> LeaveResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| LeaveError::InvalidConfig {
        field: "leave_year_start".to_string(),
        message: format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
    })
}
