//! Governing month determination and calendar filling.
//!
//! The month being reported on is taken from the first chronological punch
//! of the employee; every day of that month gets a record up front so the
//! report shows blank days explicitly.

use chrono::{Datelike, NaiveDate};

use crate::models::DailyRecord;

/// The calendar month governing one employee's reconciliation.
///
/// # Example
///
/// ```
/// use attendance_formatter::reconcile::GoverningMonth;
/// use chrono::NaiveDate;
///
/// let month = GoverningMonth::of(NaiveDate::from_ymd_opt(2016, 2, 15).unwrap());
/// assert_eq!(month.day_count(), 29); // leap year
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoverningMonth {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
}

impl GoverningMonth {
    /// Returns the governing month containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the number of days in this month per Gregorian rules,
    /// leap years included.
    pub fn day_count(&self) -> u32 {
        let first = self.date_of_day(1);
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .expect("valid first day of month");
        (next - first).num_days() as u32
    }

    /// Returns the date of the given 1-based day within this month.
    ///
    /// Callers must pass a day between 1 and [`day_count`](Self::day_count).
    pub fn date_of_day(&self, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, day).expect("day within governing month")
    }

    /// Returns true when the given date falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Creates one blank [`DailyRecord`] per day of this month for the
    /// given employee, day 1 first.
    pub fn fill(&self, employee_id: u32, employee_name: &str) -> Vec<DailyRecord> {
        (1..=self.day_count())
            .map(|day| DailyRecord::blank(employee_id, employee_name, self.date_of_day(day)))
            .collect()
    }
}
