//! Error types and error handling for xlsxtract.
//!
//! This module defines the error types used throughout the
//! application. Fatal errors (bad root directory, unwritable output)
//! abort the run; per-file errors are caught by the pipeline loop.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xlsxtract operations
pub type Result<T> = std::result::Result<T, XtractError>;

/// Main error type for xlsxtract
#[derive(Error, Debug)]
pub enum XtractError {
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to read workbook {path}: {reason}")]
    WorkbookRead { path: PathBuf, reason: String },

    #[error("Failed to write output file {path}: {reason}")]
    OutputWrite { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl XtractError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error is recoverable per-file (skip and continue)
    ///
    /// The pipeline loop catches these, counts the file as skipped and
    /// moves on. Everything else aborts the run.
    pub fn is_per_file(&self) -> bool {
        matches!(self, XtractError::WorkbookRead { .. })
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            XtractError::InvalidDirectory(_) | XtractError::ConfigError(_)
        )
    }
}
