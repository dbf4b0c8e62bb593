//! Timestamp cell normalization.
//!
//! Terminal exports carry the punch time either as a spreadsheet date
//! serial (a float counting days, with the time of day in the fraction) or
//! as a formatted string, depending on how the export was produced. Both
//! forms normalize to the same [`NaiveDateTime`].

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::error::{FormatterError, FormatterResult};

/// The string form timestamps arrive in.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Day count of 9999-12-31, the last date a serial may reach.
const SERIAL_MAX: f64 = 2_958_465.0;

/// Parses a timestamp cell in either of its two source forms.
///
/// # Example
///
/// ```
/// use attendance_formatter::source::parse_timestamp;
///
/// let from_string = parse_timestamp("2017/07/01 12:00:00").unwrap();
/// let from_serial = parse_timestamp("42917.5").unwrap();
/// assert_eq!(from_string, from_serial);
/// ```
pub fn parse_timestamp(raw: &str) -> FormatterResult<NaiveDateTime> {
    let trimmed = raw.trim();

    if let Ok(serial) = trimmed.parse::<f64>() {
        return from_date_serial(serial).ok_or_else(|| FormatterError::TimestampParse {
            value: raw.to_string(),
        });
    }

    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|_| {
        FormatterError::TimestampParse {
            value: raw.to_string(),
        }
    })
}

/// Converts a spreadsheet date serial to a date-time.
///
/// Serials count days since 1899-12-30 (the 1900 date system as modern
/// readers interpret it); the fractional part is the time of day, rounded
/// to the nearest second.
fn from_date_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial <= 0.0 || serial > SERIAL_MAX {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .expect("valid serial epoch")
        .and_hms_opt(0, 0, 0)
        .expect("valid midnight time");

    let days = serial.trunc() as i64;
    let seconds = ((serial - serial.trunc()) * 86_400.0).round() as i64;

    Some(epoch + Duration::days(days) + Duration::seconds(seconds))
}
