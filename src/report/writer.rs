//! CSV report sink.
//!
//! Serializes assembled rows into the output file. CSV cannot carry cell
//! fills, so the blank-highlight categories on [`ReportRow`] are not
//! written; data cells come out exactly as laid out.

use std::io::Write;
use std::path::Path;

use crate::error::{FormatterError, FormatterResult};

use super::layout::{COLUMN_LABELS, ReportRow};

/// Date cell format in the output.
const DATE_FORMAT: &str = "%Y/%m/%d";
/// Time cell format in the output.
const TIME_FORMAT: &str = "%H:%M";

/// Writes the report to the given output file.
pub fn write_report_file(rows: &[ReportRow], path: &Path) -> FormatterResult<()> {
    let path_str = path.display().to_string();

    let writer = csv::Writer::from_path(path).map_err(|e| FormatterError::ReportWrite {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    write_rows(rows, writer).map_err(|e| FormatterError::ReportWrite {
        path: path_str,
        message: e.to_string(),
    })
}

fn write_rows<W: Write>(rows: &[ReportRow], mut writer: csv::Writer<W>) -> Result<(), csv::Error> {
    writer.write_record(COLUMN_LABELS)?;

    for row in rows {
        writer.write_record([
            row.employee_id.to_string(),
            row.weekday.clone(),
            row.employee_name.clone(),
            row.date.format(DATE_FORMAT).to_string(),
            format_time(row.check_in),
            format_time(row.check_out),
            row.exception_text.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn format_time(time: Option<chrono::NaiveTime>) -> String {
    match time {
        Some(t) => t.format(TIME_FORMAT).to_string(),
        None => String::new(),
    }
}
