//! Report rendering.
//!
//! Turns a reconciliation run into the fixed-column output document:
//! `layout` assembles the rows (including the blank-cell highlight
//! classification), `writer` serializes them to the output file.

mod layout;
mod writer;

pub use layout::{
    BlankHighlight, COLUMN_LABELS, ReportRow, blank_highlight, build_rows, exception_text,
    weekday_name,
};
pub use writer::write_report_file;
