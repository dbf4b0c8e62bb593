//! Punch event model.
//!
//! This module defines the PunchEvent struct representing a single
//! clock-in/out swipe as read from the terminal export.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single clock swipe recorded by the attendance terminal.
///
/// A punch carries no in/out direction of its own; direction is inferred
/// during reconciliation from the punch's position in the day and the
/// configured thresholds.
///
/// Invariants (enforced by the source loader, which drops violating rows):
/// the employee id is never 0 and the trimmed name is at least 2 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    /// The terminal registration number identifying the employee.
    pub employee_id: u32,
    /// The employee's display name.
    pub employee_name: String,
    /// When the swipe happened.
    pub timestamp: NaiveDateTime,
}
