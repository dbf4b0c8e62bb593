//! Per-punch resolution rules.
//!
//! Each punch lands on the record for its day of the month and is resolved
//! into a check-in, a check-out, or an exception marker depending on what
//! the record already holds and where the punch's time-of-day falls
//! relative to the configured thresholds.

use chrono::Datelike;

use crate::config::ReconcileConfig;
use crate::models::{DailyRecord, ExceptionCode, PunchEvent};

/// Resolves one punch against the month's records.
///
/// The first punch of a day is classified by time-of-day:
///
/// - at or after the work-off threshold: the check-in was missed, the punch
///   is kept as the day's check-out and the day is marked
///   [`ExceptionCode::MissingCheckIn`];
/// - before the overnight threshold: the punch is the check-out of the
///   previous day's shift, written onto day `d-1` with
///   [`ExceptionCode::OvernightShift`] — except on day 1, where no previous
///   record exists and the day is only marked
///   [`ExceptionCode::OvernightAtMonthStart`];
/// - otherwise it is the day's check-in.
///
/// Any later punch on a day that already has its check-in becomes the
/// check-out; repeated punches keep overwriting it so the latest one wins.
///
/// The punch must be dated inside the governing month that `days` was
/// filled for; callers check this before resolving.
pub fn resolve_punch(days: &mut [DailyRecord], punch: &PunchEvent, config: &ReconcileConfig) {
    let day = punch.timestamp.day() as usize;
    debug_assert!(day >= 1 && day <= days.len(), "punch outside filled month");

    let idx = day - 1;
    let time = punch.timestamp.time();

    if days[idx].check_in.is_none() {
        if time >= config.work_off_time {
            // Missed the morning check-in; keep the punch as the check-out.
            days[idx].check_out = Some(time);
            days[idx].exception = ExceptionCode::MissingCheckIn;
        } else if time < config.overnight_time {
            if idx == 0 {
                // The shift started in the previous month; nothing to
                // attach the check-out to, flag for manual handling.
                days[idx].exception = ExceptionCode::OvernightAtMonthStart;
            } else {
                days[idx - 1].check_out = Some(time);
                days[idx - 1].exception = ExceptionCode::OvernightShift;
            }
        } else {
            days[idx].check_in = Some(time);
        }
    } else {
        // Check-in already present: the punch is the check-out, and later
        // punches overwrite it so the latest one wins.
        days[idx].check_out = Some(time);
    }
}

/// Marks every day that has a check-in but never received a check-out.
///
/// Runs once after all punches are resolved. Days that already carry
/// another exception keep it.
pub fn mark_missing_checkouts(days: &mut [DailyRecord]) {
    for record in days {
        if record.check_in.is_some()
            && record.check_out.is_none()
            && record.exception == ExceptionCode::None
        {
            record.exception = ExceptionCode::MissingCheckOut;
        }
    }
}
