//! Source loading.
//!
//! Parses the punch-record export into per-employee punch lists. The export
//! is a tabular file with one header row and fixed column positions; only
//! the name, employee id, and timestamp columns are consumed. Rows that fail
//! validation are dropped silently — terminal exports are noisy and a bad
//! row must not kill the run — while structural problems (missing file,
//! empty file, no data rows) halt it.

mod timestamp;

pub use timestamp::{TIMESTAMP_FORMAT, parse_timestamp};

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{FormatterError, FormatterResult};
use crate::models::PunchEvent;

/// Source column holding the employee display name.
pub const COL_NAME: usize = 1;
/// Source column holding the terminal registration number.
pub const COL_EMPLOYEE_ID: usize = 2;
/// Source column holding the punch timestamp.
pub const COL_TIMESTAMP: usize = 3;

/// Punches grouped by employee id, in source row order within each group.
///
/// A `BTreeMap` so that downstream iteration is already in ascending
/// employee-id order.
pub type PunchTable = BTreeMap<u32, Vec<PunchEvent>>;

/// Loads and groups the punch records from the given source file.
///
/// # Errors
///
/// - [`FormatterError::SourceAccess`] when the file cannot be read
/// - [`FormatterError::EmptySource`] when it has no rows at all
/// - [`FormatterError::NoData`] when only the header row is present
/// - [`FormatterError::TimestampParse`] when a timestamp cell matches
///   neither source form
pub fn load_punches<P: AsRef<Path>>(path: P) -> FormatterResult<PunchTable> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| FormatterError::SourceAccess {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    let mut table = PunchTable::new();
    let mut header_seen = false;
    let mut data_rows = 0usize;
    let mut kept = 0usize;

    for record in reader.records() {
        let record = record.map_err(|e| FormatterError::SourceAccess {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        if !header_seen {
            // The first row is the column-label header.
            header_seen = true;
            debug!(?record, "header row");
            continue;
        }

        data_rows += 1;
        debug!(?record, "source row");

        let Some(punch) = parse_row(&record)? else {
            continue;
        };
        kept += 1;
        table.entry(punch.employee_id).or_default().push(punch);
    }

    if !header_seen {
        return Err(FormatterError::EmptySource { path: path_str });
    }
    if data_rows == 0 {
        return Err(FormatterError::NoData { path: path_str });
    }

    info!(
        rows = data_rows,
        kept,
        employees = table.len(),
        "loaded punch table from {path_str}"
    );
    for (employee_id, punches) in &table {
        debug!(employee_id, punches = punches.len(), "grouped punches");
    }

    Ok(table)
}

/// Parses one data row into a punch, or `None` when the row fails
/// validation and should be dropped.
///
/// A timestamp cell that matches neither source form is an error, not a
/// skip: it means the export format itself is off.
fn parse_row(record: &csv::StringRecord) -> FormatterResult<Option<PunchEvent>> {
    let Some(employee_id) = record.get(COL_EMPLOYEE_ID).and_then(parse_employee_id) else {
        debug!(?record, "dropping row: unusable employee id");
        return Ok(None);
    };
    if employee_id == 0 {
        debug!(?record, "dropping row: employee id 0");
        return Ok(None);
    }

    let name = record.get(COL_NAME).map(str::trim).unwrap_or_default();
    if name.chars().count() <= 1 {
        debug!(?record, "dropping row: name too short");
        return Ok(None);
    }

    let Some(raw_timestamp) = record.get(COL_TIMESTAMP) else {
        debug!(?record, "dropping row: no timestamp column");
        return Ok(None);
    };
    let timestamp = parse_timestamp(raw_timestamp)?;

    Ok(Some(PunchEvent {
        employee_id,
        employee_name: name.to_string(),
        timestamp,
    }))
}

/// Parses an employee id cell, which arrives either as an integer or as a
/// spreadsheet float like "12345.0".
fn parse_employee_id(field: &str) -> Option<u32> {
    let trimmed = field.trim();
    if let Ok(id) = trimmed.parse::<u32>() {
        return Some(id);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Department,Name,Employee ID,Timestamp,Terminal,Index\n";

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn write_source(rows: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{HEADER}{rows}").unwrap();
        file
    }

    #[test]
    fn test_loads_and_groups_by_employee() {
        let file = write_source(
            "Ops,Li Na,7,2017/07/03 08:55:00,1,1\n\
             Ops,Li Na,7,2017/07/03 18:40:00,1,2\n\
             Ops,Wang Fang,9,2017/07/03 09:02:00,1,3\n",
        );

        let table = load_punches(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[&7].len(), 2);
        assert_eq!(table[&9].len(), 1);
        assert_eq!(
            table[&7][0].timestamp,
            make_datetime("2017-07-03", "08:55:00")
        );
        assert_eq!(table[&9][0].employee_name, "Wang Fang");
    }

    #[test]
    fn test_interleaved_employee_blocks_group_correctly() {
        let file = write_source(
            "Ops,Li Na,7,2017/07/03 08:55:00,1,1\n\
             Ops,Wang Fang,9,2017/07/03 09:02:00,1,2\n\
             Ops,Li Na,7,2017/07/03 18:40:00,1,3\n",
        );

        let table = load_punches(file.path()).unwrap();
        assert_eq!(table[&7].len(), 2);
        // Row order within the group follows the source.
        assert!(table[&7][0].timestamp < table[&7][1].timestamp);
    }

    #[test]
    fn test_zero_employee_id_row_is_dropped() {
        let file = write_source(
            "Ops,Li Na,0,2017/07/03 08:55:00,1,1\n\
             Ops,Wang Fang,9,2017/07/03 09:02:00,1,2\n",
        );

        let table = load_punches(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains_key(&9));
    }

    #[test]
    fn test_short_name_row_is_dropped() {
        let file = write_source(
            "Ops, X ,7,2017/07/03 08:55:00,1,1\n\
             Ops,Wang Fang,9,2017/07/03 09:02:00,1,2\n",
        );

        let table = load_punches(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains_key(&9));
    }

    #[test]
    fn test_two_character_cjk_name_is_kept() {
        let file = write_source("Ops,张伟,7,2017/07/03 08:55:00,1,1\n");

        let table = load_punches(file.path()).unwrap();
        assert_eq!(table[&7][0].employee_name, "张伟");
    }

    #[test]
    fn test_float_employee_id_is_accepted() {
        let file = write_source("Ops,Li Na,7.0,2017/07/03 08:55:00,1,1\n");

        let table = load_punches(file.path()).unwrap();
        assert!(table.contains_key(&7));
    }

    #[test]
    fn test_ragged_row_without_timestamp_is_dropped() {
        let file = write_source(
            "Ops,Li Na,7\n\
             Ops,Wang Fang,9,2017/07/03 09:02:00,1,2\n",
        );

        let table = load_punches(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains_key(&9));
    }

    #[test]
    fn test_serial_timestamps_load() {
        // 42919.375 is 2017-07-03 09:00:00.
        let file = write_source("Ops,Li Na,7,42919.375,1,1\n");

        let table = load_punches(file.path()).unwrap();
        assert_eq!(
            table[&7][0].timestamp,
            make_datetime("2017-07-03", "09:00:00")
        );
    }

    #[test]
    fn test_unparseable_timestamp_halts_the_run() {
        let file = write_source("Ops,Li Na,7,whenever,1,1\n");

        let result = load_punches(file.path());
        match result {
            Err(FormatterError::TimestampParse { value }) => assert_eq!(value, "whenever"),
            other => panic!("Expected TimestampParse, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_file_is_empty_source() {
        let file = NamedTempFile::new().unwrap();

        let result = load_punches(file.path());
        assert!(matches!(result, Err(FormatterError::EmptySource { .. })));
    }

    #[test]
    fn test_header_only_file_is_no_data() {
        let file = write_source("");

        let result = load_punches(file.path());
        assert!(matches!(result, Err(FormatterError::NoData { .. })));
    }

    #[test]
    fn test_missing_file_is_source_access() {
        let result = load_punches("/nonexistent/punches.csv");
        assert!(matches!(result, Err(FormatterError::SourceAccess { .. })));
    }
}
