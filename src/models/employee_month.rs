//! Employee month model.

use serde::{Deserialize, Serialize};

use super::DailyRecord;

/// One employee's complete set of daily records for one governing month.
///
/// The `days` vector always holds exactly one [`DailyRecord`] per calendar
/// day of the month, in ascending date order, day 1 first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMonth {
    /// The terminal registration number identifying the employee.
    pub employee_id: u32,
    /// The employee's display name.
    pub employee_name: String,
    /// Calendar year of the governing month.
    pub year: i32,
    /// Calendar month (1-12) of the governing month.
    pub month: u32,
    /// One record per day of the month, day 1 first.
    pub days: Vec<DailyRecord>,
}

impl EmployeeMonth {
    /// Returns the record for the given 1-based day of the month.
    ///
    /// Returns `None` when the day is 0 or past the end of the month.
    pub fn day(&self, day: u32) -> Option<&DailyRecord> {
        if day == 0 {
            return None;
        }
        self.days.get(day as usize - 1)
    }
}
