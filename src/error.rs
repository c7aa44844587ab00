//! Errors returned by this crate

use std::path::PathBuf;

use thiserror::Error;

use crate::task::TaskId;

/// Everything that can go wrong while managing or persisting tasks
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task matches the given description
    #[error("No task matches the description {description:?}")]
    NotFound { description: String },

    #[error("No task has the ID {0}")]
    UnknownId(TaskId),

    /// The due date text is not a valid `YYYY-MM-DD` date
    #[error("Invalid date {input:?}, expected the YYYY-MM-DD format")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A stored row could not be understood. The whole load is rejected.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Invalid filter {0:?}, expected one of all, completed, pending")]
    InvalidFilter(String),

    #[error("Invalid choice {0:?}")]
    InvalidChoice(String),

    #[error("Unable to access {path:?}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
