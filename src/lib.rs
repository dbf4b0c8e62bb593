//! Attendance report formatter.
//!
//! This crate converts raw punch records exported from a time-clock terminal
//! into the fixed-layout monthly attendance report used by the company:
//! punches are grouped per employee, paired into daily check-in/check-out
//! records, blank days are filled for the whole month, and ambiguous punches
//! (missed check-ins, overnight checkouts) are classified with exception
//! markers for manual review.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod report;
pub mod source;
