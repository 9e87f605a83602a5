use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the data layer (loading, statistics, sampling).
#[derive(Debug, Error)]
pub enum DataError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("the input table is empty")]
    EmptyInput,

    #[error("missing required column: '{0}'")]
    MissingColumn(String),

    #[error("column '{0}' has no numeric values")]
    NoNumericData(String),

    #[error("cannot sample {requested} rows from {available} without replacement")]
    InsufficientRows { requested: usize, available: usize },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed JSON input: {0}")]
    MalformedJson(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// True for errors caused by the input data itself, as opposed to the
    /// environment. The entry point reports these and exits normally; raw
    /// I/O failures propagate instead.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, DataError::Io(_))
    }
}
