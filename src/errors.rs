use std::path::PathBuf;
use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The tweet database file does not exist
    #[error("Database file not found at {}", .0.display())]
    DatabaseNotFound(PathBuf),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// One or more analysis passes failed while others completed
    #[error("{failed} of {attempted} analysis passes failed: {}", .passes.join(", "))]
    PassesFailed {
        failed: usize,
        attempted: usize,
        passes: Vec<String>,
    },
}

/// Per-record payload decoding failures.
///
/// These never escape the engagement pipeline: the record contributes zeros
/// and the failure is counted.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The payload column was NULL or not text
    #[error("payload is missing")]
    Missing,

    /// The payload is not valid JSON
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON whose top level is not an object
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
