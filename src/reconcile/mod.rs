//! Punch reconciliation — the core of the formatter.
//!
//! One employee's punches are sorted chronologically, the governing month is
//! sized from the first punch, a blank record is created for every day of
//! that month, and each punch is then resolved into a check-in, check-out,
//! or exception marker. Punches that cannot be resolved are collected as
//! structured warnings on the employee's result instead of aborting the run.

mod month;
mod resolve;

pub use month::GoverningMonth;
pub use resolve::{mark_missing_checkouts, resolve_punch};

use std::collections::BTreeMap;
use std::fmt;

use crate::config::ReconcileConfig;
use crate::models::{EmployeeMonth, PunchEvent};

/// Why a punch could not be resolved into the month's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchIssue {
    /// The punch is dated in a different calendar month than the one being
    /// reconciled for this employee.
    OutsideGoverningMonth,
}

/// A punch that was skipped during reconciliation, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct PunchWarning {
    /// The punch that could not be resolved.
    pub punch: PunchEvent,
    /// Why it was skipped.
    pub issue: PunchIssue,
}

impl fmt::Display for PunchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issue {
            PunchIssue::OutsideGoverningMonth => write!(
                f,
                "punch at {} for employee {} falls outside the governing month",
                self.punch.timestamp, self.punch.employee_id
            ),
        }
    }
}

/// The outcome of reconciling one employee: the completed month plus any
/// punches that had to be skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeReconciliation {
    /// The fully filled month of daily records.
    pub month: EmployeeMonth,
    /// Punches that could not be resolved; the month is still complete
    /// without them.
    pub warnings: Vec<PunchWarning>,
}

/// The outcome of reconciling every employee in a run, in ascending
/// employee-id order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunReport {
    /// One entry per employee that had at least one punch.
    pub employees: Vec<EmployeeReconciliation>,
}

impl RunReport {
    /// Iterates the reconciled months in ascending employee-id order.
    pub fn months(&self) -> impl Iterator<Item = &EmployeeMonth> {
        self.employees.iter().map(|e| &e.month)
    }

    /// Total number of skipped punches across all employees.
    pub fn warning_count(&self) -> usize {
        self.employees.iter().map(|e| e.warnings.len()).sum()
    }
}

/// Reconciles one employee's punches into a complete month of records.
///
/// Punches are sorted by timestamp first; the governing month is taken from
/// the earliest punch. Returns `None` for an empty punch list.
///
/// # Example
///
/// ```
/// use attendance_formatter::config::ReconcileConfig;
/// use attendance_formatter::models::{ExceptionCode, PunchEvent};
/// use attendance_formatter::reconcile::reconcile_employee;
/// use chrono::NaiveDate;
///
/// let punch = PunchEvent {
///     employee_id: 12,
///     employee_name: "Li Na".to_string(),
///     timestamp: NaiveDate::from_ymd_opt(2017, 7, 5)
///         .unwrap()
///         .and_hms_opt(9, 0, 0)
///         .unwrap(),
/// };
///
/// let result = reconcile_employee(&[punch], &ReconcileConfig::default()).unwrap();
/// assert_eq!(result.month.days.len(), 31);
/// // A lone morning punch is a check-in that never got its check-out.
/// assert_eq!(result.month.day(5).unwrap().exception, ExceptionCode::MissingCheckOut);
/// ```
pub fn reconcile_employee(
    punches: &[PunchEvent],
    config: &ReconcileConfig,
) -> Option<EmployeeReconciliation> {
    let mut sorted = punches.to_vec();
    // The source is assumed time-ordered per employee, but sorting here is
    // cheap and removes the assumption. Stable, so equal timestamps keep
    // their source order.
    sorted.sort_by_key(|p| p.timestamp);

    let first = sorted.first()?;
    let governing = GoverningMonth::of(first.timestamp.date());
    let mut days = governing.fill(first.employee_id, &first.employee_name);

    let mut warnings = Vec::new();
    for punch in &sorted {
        if !governing.contains(punch.timestamp.date()) {
            warnings.push(PunchWarning {
                punch: punch.clone(),
                issue: PunchIssue::OutsideGoverningMonth,
            });
            continue;
        }
        resolve_punch(&mut days, punch, config);
    }

    mark_missing_checkouts(&mut days);

    Some(EmployeeReconciliation {
        month: EmployeeMonth {
            employee_id: first.employee_id,
            employee_name: first.employee_name.clone(),
            year: governing.year,
            month: governing.month,
            days,
        },
        warnings,
    })
}

/// Reconciles every employee in the loaded punch table.
///
/// Skipped punches are logged at warn level; a problem with one employee's
/// punches never affects another employee or aborts the run.
pub fn reconcile_all(
    punches_by_employee: &BTreeMap<u32, Vec<PunchEvent>>,
    config: &ReconcileConfig,
) -> RunReport {
    let mut employees = Vec::new();

    for (employee_id, punches) in punches_by_employee {
        let Some(result) = reconcile_employee(punches, config) else {
            continue;
        };
        for warning in &result.warnings {
            tracing::warn!(employee_id, "{warning}");
        }
        employees.push(result);
    }

    RunReport { employees }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExceptionCode;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use proptest::prelude::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn punch(id: u32, date_str: &str, time_str: &str) -> PunchEvent {
        PunchEvent {
            employee_id: id,
            employee_name: format!("Employee {id}"),
            timestamp: make_datetime(date_str, time_str),
        }
    }

    #[test]
    fn test_empty_punch_list_yields_nothing() {
        assert!(reconcile_employee(&[], &ReconcileConfig::default()).is_none());
    }

    #[test]
    fn test_month_is_sized_from_first_chronological_punch() {
        // Given out of order so the defensive sort decides the month.
        let punches = vec![
            punch(3, "2017-04-20", "09:00:00"),
            punch(3, "2017-04-03", "08:55:00"),
        ];

        let result = reconcile_employee(&punches, &ReconcileConfig::default()).unwrap();
        assert_eq!(result.month.year, 2017);
        assert_eq!(result.month.month, 4);
        assert_eq!(result.month.days.len(), 30);
    }

    #[test]
    fn test_unsorted_punches_still_pair_correctly() {
        let punches = vec![
            punch(3, "2017-07-05", "18:40:00"),
            punch(3, "2017-07-05", "09:00:00"),
        ];

        let result = reconcile_employee(&punches, &ReconcileConfig::default()).unwrap();
        let day = result.month.day(5).unwrap();
        assert_eq!(day.check_in, Some(make_time("09:00:00")));
        assert_eq!(day.check_out, Some(make_time("18:40:00")));
        assert_eq!(day.exception, ExceptionCode::None);
    }

    #[test]
    fn test_punch_outside_governing_month_is_warned_and_skipped() {
        let punches = vec![
            punch(3, "2017-07-05", "09:00:00"),
            punch(3, "2017-08-02", "09:00:00"),
        ];

        let result = reconcile_employee(&punches, &ReconcileConfig::default()).unwrap();
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].issue, PunchIssue::OutsideGoverningMonth);
        assert_eq!(
            result.warnings[0].punch.timestamp,
            make_datetime("2017-08-02", "09:00:00")
        );

        // The stray punch left every July record untouched except day 5.
        assert_eq!(result.month.days.len(), 31);
        for day in 1..=31u32 {
            let record = result.month.day(day).unwrap();
            if day == 5 {
                assert_eq!(record.check_in, Some(make_time("09:00:00")));
            } else {
                assert!(record.check_in.is_none());
                assert!(record.check_out.is_none());
            }
        }
    }

    #[test]
    fn test_overnight_pairing_across_days() {
        let punches = vec![
            punch(7, "2017-07-09", "20:00:00"),
            punch(7, "2017-07-10", "05:30:00"),
        ];

        let result = reconcile_employee(&punches, &ReconcileConfig::default()).unwrap();

        let day9 = result.month.day(9).unwrap();
        assert!(day9.check_in.is_none());
        assert_eq!(day9.check_out, Some(make_time("05:30:00")));
        // The 20:00 punch already marked day 9 as a missed check-in; the
        // overnight check-out then overwrote the check-out and the marker.
        assert_eq!(day9.exception, ExceptionCode::OvernightShift);
    }

    #[test]
    fn test_reconcile_all_orders_employees_ascending() {
        let mut table: BTreeMap<u32, Vec<PunchEvent>> = BTreeMap::new();
        table.insert(20, vec![punch(20, "2017-07-03", "09:00:00")]);
        table.insert(4, vec![punch(4, "2017-07-03", "08:45:00")]);
        table.insert(11, vec![punch(11, "2017-07-03", "08:59:00")]);

        let report = reconcile_all(&table, &ReconcileConfig::default());
        let ids: Vec<u32> = report.months().map(|m| m.employee_id).collect();
        assert_eq!(ids, vec![4, 11, 20]);
    }

    #[test]
    fn test_run_report_warning_count() {
        let mut table: BTreeMap<u32, Vec<PunchEvent>> = BTreeMap::new();
        table.insert(
            1,
            vec![
                punch(1, "2017-07-03", "09:00:00"),
                punch(1, "2017-09-03", "09:00:00"),
            ],
        );
        table.insert(2, vec![punch(2, "2017-07-03", "09:00:00")]);

        let report = reconcile_all(&table, &ReconcileConfig::default());
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.employees.len(), 2);
    }

    #[test]
    fn test_warning_display_names_employee_and_time() {
        let warning = PunchWarning {
            punch: punch(5, "2017-08-03", "09:00:00"),
            issue: PunchIssue::OutsideGoverningMonth,
        };
        let text = warning.to_string();
        assert!(text.contains("employee 5"));
        assert!(text.contains("2017-08-03"));
    }

    proptest! {
        // Every governing month is fully covered: one record per calendar
        // day, dates consecutive from day 1, regardless of where in the
        // month the punch falls.
        #[test]
        fn prop_month_fully_covered(
            year in 2000i32..2100i32,
            month in 1u32..=12u32,
            day in 1u32..=28u32,
            hour in 7u32..=17u32,
            minute in 0u32..=59u32,
        ) {
            let timestamp = NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap();
            let punches = vec![PunchEvent {
                employee_id: 1,
                employee_name: "Li Na".to_string(),
                timestamp,
            }];

            let result = reconcile_employee(&punches, &ReconcileConfig::default()).unwrap();
            let len = result.month.days.len() as u32;

            // The month length is exactly where chrono stops producing dates.
            prop_assert!(NaiveDate::from_ymd_opt(year, month, len).is_some());
            prop_assert!(NaiveDate::from_ymd_opt(year, month, len + 1).is_none());

            for (i, record) in result.month.days.iter().enumerate() {
                prop_assert_eq!(
                    record.date,
                    NaiveDate::from_ymd_opt(year, month, i as u32 + 1).unwrap()
                );
            }
        }
    }
}
