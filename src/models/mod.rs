//! Core data models for the attendance formatter.
//!
//! This module contains all the domain models used throughout the crate.

mod daily_record;
mod employee_month;
mod punch;

pub use daily_record::{DailyRecord, ExceptionCode};
pub use employee_month::EmployeeMonth;
pub use punch::PunchEvent;
