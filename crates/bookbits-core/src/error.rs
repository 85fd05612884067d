//! Error types and exit codes for bookbits
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (output file could not be written, etc.)
//! - 2: Usage error (bad flags/args, unsupported export format)
//! - 3: Data/store error (missing store, failed query, unknown book)

mod macros;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Hint shown whenever the Apple Books databases cannot be read.
pub const STORE_ACCESS_HINT: &str = "An error occurred while accessing the Apple Books database. \
Please ensure Apple Books is installed and you have the necessary permissions.";

/// Exit codes for the bookbits binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing or unreadable store (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while locating, reading, or exporting
#[derive(Error, Debug)]
pub enum BookbitsError {
    // Usage errors (exit code 2)
    #[error("unsupported format: {value} (supported: {supported})")]
    InvalidFormat { value: String, supported: String },

    #[error("{0}")]
    UsageError(String),

    // Data/store errors (exit code 3)
    #[error("no database found matching pattern: {pattern}")]
    StoreNotFound { pattern: String },

    #[error("failed to {operation}: {reason}")]
    Store { operation: String, reason: String },

    #[error("book not found: {id}")]
    BookNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("failed to {operation} {}: {source}", path.display())]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("invalid config in {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("{0}")]
    Other(String),
}

impl BookbitsError {
    /// Create an error for a failed store operation
    pub fn store_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        BookbitsError::Store {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed filesystem operation on `path`
    pub fn io(operation: &str, path: &Path, source: std::io::Error) -> Self {
        BookbitsError::Io {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an error for a failed operation on a non-file target
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        BookbitsError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an export format outside the supported set
    pub fn unsupported_format(
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        BookbitsError::InvalidFormat {
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// True for failures that come from the source databases rather than the user
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            BookbitsError::StoreNotFound { .. } | BookbitsError::Store { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            BookbitsError::InvalidFormat { .. }
            | BookbitsError::UsageError(_) => ExitCode::Usage,

            // Data/store errors
            BookbitsError::StoreNotFound { .. }
            | BookbitsError::Store { .. }
            | BookbitsError::BookNotFound { .. } => ExitCode::Data,

            // Generic failures
            BookbitsError::Io { .. }
            | BookbitsError::Json(_)
            | BookbitsError::FailedOperationWithTarget { .. }
            | BookbitsError::Config { .. }
            | BookbitsError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            BookbitsError::InvalidFormat { .. } => "invalid_format",
            BookbitsError::UsageError(_) => "usage_error",
            BookbitsError::StoreNotFound { .. } => "store_not_found",
            BookbitsError::Store { .. } => "store_error",
            BookbitsError::BookNotFound { .. } => "book_not_found",
            BookbitsError::Io { .. } => "io_error",
            BookbitsError::Json(_) => "json_error",
            BookbitsError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            BookbitsError::Config { .. } => "config_error",
            BookbitsError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for bookbits operations
pub type Result<T> = std::result::Result<T, BookbitsError>;
