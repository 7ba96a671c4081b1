//! Unified error types for the audit pipeline.
//!
//! Only wholesale file-level failures surface as errors: an unreadable or
//! corrupt workbook, or a failed export write. Per-sheet problems (a menu
//! sheet with no recognizable weekday header) are recoverable and are
//! reported through [`crate::audit::AuditReport::skipped_reason`] instead.

use thiserror::Error;

/// Main error type for audit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The workbook could not be opened or a sheet could not be read.
    /// Covers corrupt, truncated, and password-protected files; the
    /// underlying reader message is preserved for display.
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Writing the highlighted copy failed.
    #[error("Export error: {0}")]
    Export(String),

    /// Serializing a report failed.
    #[error("Report error: {0}")]
    Report(String),

    /// The workbook contains no sheets at all.
    #[error("Workbook contains no sheets")]
    EmptyWorkbook,
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Workbook(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Report(err.to_string())
    }
}

/// Result type for audit operations.
pub type Result<T> = std::result::Result<T, Error>;
