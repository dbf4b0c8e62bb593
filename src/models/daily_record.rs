//! Daily attendance record model.
//!
//! This module defines the DailyRecord struct and ExceptionCode enum that
//! together describe one calendar day of one employee's month, as rebuilt
//! from the raw punch stream.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Classification of an irregular attendance day.
///
/// Exception markers flag days that need manual review; they never change
/// the recorded check-in/check-out times themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionCode {
    /// Nothing unusual on this day.
    None,
    /// A work-off-hours punch arrived before any check-in was seen;
    /// the check-in is missing and the punch was kept as the check-out.
    MissingCheckIn,
    /// A check-in was recorded but no check-out ever followed.
    MissingCheckOut,
    /// The day's check-out came from an early-morning punch on the next
    /// calendar day (shift ran past midnight).
    OvernightShift,
    /// An early-morning punch on day 1 of the month belongs to a shift
    /// started in the previous month; there is no record to attach it to,
    /// so it is only flagged for manual handling.
    OvernightAtMonthStart,
}

/// One calendar day of one employee's reconciled month.
///
/// A record exists for every day of the governing month whether or not any
/// punch was seen for it; untouched days keep both times empty with
/// [`ExceptionCode::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The terminal registration number identifying the employee.
    pub employee_id: u32,
    /// The employee's display name.
    pub employee_name: String,
    /// The calendar day this record tracks.
    pub date: NaiveDate,
    /// Time the employee checked in, if a check-in punch was attributed.
    pub check_in: Option<NaiveTime>,
    /// Time the employee checked out, if a check-out punch was attributed.
    pub check_out: Option<NaiveTime>,
    /// Irregularity marker for the day.
    pub exception: ExceptionCode,
}

impl DailyRecord {
    /// Creates a blank record for the given employee and day.
    pub fn blank(employee_id: u32, employee_name: &str, date: NaiveDate) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.to_string(),
            date,
            check_in: None,
            check_out: None,
            exception: ExceptionCode::None,
        }
    }

    /// Returns the day of the week for this record.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns true when this record falls on a Saturday or Sunday.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_formatter::models::DailyRecord;
    /// use chrono::NaiveDate;
    ///
    /// // 2017-07-01 is a Saturday
    /// let date = NaiveDate::from_ymd_opt(2017, 7, 1).unwrap();
    /// let record = DailyRecord::blank(1, "Li Na", date);
    /// assert!(record.is_weekend());
    /// ```
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
