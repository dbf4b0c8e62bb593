//! Error types for the attendance formatter.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failures that halt a formatting run. Row-level validation
//! problems in the source are not errors (they are skipped), and per-punch
//! reconciliation problems are reported as warnings on the employee's
//! result rather than through this type.

use thiserror::Error;

/// The main error type for the attendance formatter.
///
/// All fallible operations in the crate return this error type.
///
/// # Example
///
/// ```
/// use attendance_formatter::error::FormatterError;
///
/// let error = FormatterError::NoData {
///     path: "punches.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "No punch rows in source file: punches.csv");
/// ```
#[derive(Debug, Error)]
pub enum FormatterError {
    /// The source file path argument was empty or whitespace.
    #[error("Invalid source file path")]
    EmptySourcePath,

    /// The source file could not be opened or read.
    #[error("Cannot read source file '{path}': {message}")]
    SourceAccess {
        /// The path that could not be read.
        path: String,
        /// A description of the underlying I/O failure.
        message: String,
    },

    /// The source file contained no rows at all, not even a header.
    #[error("No sheet data in source file: {path}")]
    EmptySource {
        /// The path of the empty source.
        path: String,
    },

    /// The source file contained only the header row.
    #[error("No punch rows in source file: {path}")]
    NoData {
        /// The path of the source without data rows.
        path: String,
    },

    /// A timestamp cell was neither a spreadsheet date serial nor a
    /// formatted date-time string.
    #[error("Unrecognized timestamp value: '{value}'")]
    TimestampParse {
        /// The raw cell content that failed to parse.
        value: String,
    },

    /// The threshold configuration file was not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The threshold configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No output path could be derived from the source path.
    #[error("Cannot derive output path from '{path}': no file extension")]
    OutputPath {
        /// The source path without a usable extension.
        path: String,
    },

    /// The report file could not be written.
    #[error("Failed to write report '{path}': {message}")]
    ReportWrite {
        /// The output path that failed.
        path: String,
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return FormatterError.
pub type FormatterResult<T> = Result<T, FormatterError>;
