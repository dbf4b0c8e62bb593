//! Report row assembly.
//!
//! Maps reconciled months onto the fixed corporate report layout: one
//! header row, then one row per day per employee, employees in ascending
//! id order. Blank time cells are classified into one of two highlight
//! categories so a style-capable sink can fill them the way reviewers
//! expect: unremarkable weekend blanks versus weekday blanks that need a
//! look.

use chrono::NaiveDate;

use crate::models::{DailyRecord, ExceptionCode};
use crate::reconcile::RunReport;

/// The fixed header labels, in output column order.
pub const COLUMN_LABELS: [&str; 7] = [
    "Employee ID",
    "Weekday",
    "Name",
    "Date",
    "Check-In",
    "Check-Out",
    "Exception",
];

/// Highlight category for a blank check-in/check-out cell.
///
/// Visual only; carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankHighlight {
    /// The day is a Saturday or Sunday; a blank is expected.
    Weekend,
    /// A blank on a working day; flagged for review.
    Exception,
}

/// One assembled report row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// The terminal registration number identifying the employee.
    pub employee_id: u32,
    /// Full weekday name of the row's date.
    pub weekday: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// Check-in time cell, empty when no check-in was attributed.
    pub check_in: Option<chrono::NaiveTime>,
    /// Check-out time cell, empty when no check-out was attributed.
    pub check_out: Option<chrono::NaiveTime>,
    /// Exception column text; empty for unremarkable days.
    pub exception_text: &'static str,
    /// Highlight for the check-in cell when it is blank.
    pub check_in_highlight: Option<BlankHighlight>,
    /// Highlight for the check-out cell when it is blank.
    pub check_out_highlight: Option<BlankHighlight>,
}

/// Returns the fixed report text for an exception marker.
///
/// [`ExceptionCode::None`] renders as an empty cell.
pub fn exception_text(code: ExceptionCode) -> &'static str {
    match code {
        ExceptionCode::None => "",
        ExceptionCode::MissingCheckIn => "checked in not recorded",
        ExceptionCode::MissingCheckOut => "checked out not recorded",
        ExceptionCode::OvernightShift => "overnight shift",
        ExceptionCode::OvernightAtMonthStart => "overnight shift at prior month end",
    }
}

/// Returns the full weekday name for a date, e.g. "Monday".
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Classifies a blank time cell on the given date.
pub fn blank_highlight(date: NaiveDate) -> BlankHighlight {
    use chrono::Datelike;
    match date.weekday() {
        chrono::Weekday::Sat | chrono::Weekday::Sun => BlankHighlight::Weekend,
        _ => BlankHighlight::Exception,
    }
}

/// Assembles the full report row list from a reconciliation run.
///
/// Employees come out in ascending id order and days in ascending date
/// order, matching the iteration order of [`RunReport::months`].
pub fn build_rows(report: &RunReport) -> Vec<ReportRow> {
    report
        .months()
        .flat_map(|month| month.days.iter().map(build_row))
        .collect()
}

fn build_row(record: &DailyRecord) -> ReportRow {
    let highlight_when_blank = |cell: &Option<chrono::NaiveTime>| {
        if cell.is_none() {
            Some(blank_highlight(record.date))
        } else {
            None
        }
    };

    ReportRow {
        employee_id: record.employee_id,
        weekday: weekday_name(record.date),
        employee_name: record.employee_name.clone(),
        date: record.date,
        check_in: record.check_in,
        check_out: record.check_out,
        exception_text: exception_text(record.exception),
        check_in_highlight: highlight_when_blank(&record.check_in),
        check_out_highlight: highlight_when_blank(&record.check_out),
    }
}
