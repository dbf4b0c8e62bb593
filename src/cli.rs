//! Command-line interface.
//!
//! A single positional argument names the source export; the output lands
//! next to it as `<stem>_OutData<ext>`. Structural problems print an
//! `[ERR]`-prefixed message and produce no output file.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::ReconcileConfig;
use crate::error::{FormatterError, FormatterResult};
use crate::report;
use crate::source;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "attendance-formatter",
    version,
    about = "Convert a time-clock punch export into the corporate monthly attendance report"
)]
pub struct Cli {
    /// Path to the source punch-record file
    pub source_file: String,

    /// YAML file overriding the reconciliation thresholds
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Derives the output path from the source path: `<stem>_OutData<ext>`,
/// split at the last `.` in the path.
///
/// Returns `None` when the path has no `.` past its first character, in
/// which case no output can be written.
///
/// # Example
///
/// ```
/// use attendance_formatter::cli::derive_output_path;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     derive_output_path("punches.csv"),
///     Some(PathBuf::from("punches_OutData.csv"))
/// );
/// assert_eq!(derive_output_path("punches"), None);
/// ```
pub fn derive_output_path(source: &str) -> Option<PathBuf> {
    let dot = source.rfind('.')?;
    if dot == 0 {
        return None;
    }
    Some(PathBuf::from(format!(
        "{}_OutData{}",
        &source[..dot],
        &source[dot..]
    )))
}

/// Runs one formatting pass: load, reconcile, render.
///
/// Returns the path of the written report.
pub fn run(cli: &Cli) -> FormatterResult<PathBuf> {
    if cli.source_file.trim().is_empty() {
        return Err(FormatterError::EmptySourcePath);
    }

    let config = match &cli.config {
        Some(path) => ReconcileConfig::load(path)?,
        None => ReconcileConfig::default(),
    };

    let table = source::load_punches(&cli.source_file)?;
    let run_report = crate::reconcile::reconcile_all(&table, &config);
    info!(
        employees = run_report.employees.len(),
        warnings = run_report.warning_count(),
        "reconciliation complete"
    );

    let output_path =
        derive_output_path(&cli.source_file).ok_or_else(|| FormatterError::OutputPath {
            path: cli.source_file.clone(),
        })?;

    let rows = report::build_rows(&run_report);
    report::write_report_file(&rows, &output_path)?;

    Ok(output_path)
}
