use thiserror::Error;

/// Convenience result type for selection operations.
pub type SelectResult<T> = Result<T, SelectError>;

/// Error type returned by selection, filtering and reporting functions.
///
/// Parse, missing-column, malformed-row and invalid-encoding errors are recoverable: the pipeline records them
/// in its report and keeps going. The remaining variants are returned to the caller.
#[derive(Debug, Error)]
pub enum SelectError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A job file could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A filter expression could not be parsed into a predicate.
    #[error("invalid filter '{filter}': {message}")]
    Parse { filter: String, message: String },

    /// A predicate references a column that is not present in the projected rows.
    #[error("header '{column}' not found in CSV data (filter '{filter}')")]
    MissingColumn { column: String, filter: String },

    /// A selected column does not occur in the header line.
    #[error("selected column '{column}' not found in header")]
    UnknownColumn { column: String },

    /// A data line has fewer cells than a selected column's header position requires.
    #[error("malformed row at line {line}: needs at least {required} cells, found {found}")]
    MalformedRow {
        line: usize,
        required: usize,
        found: usize,
    },

    /// A data line is not valid UTF-8.
    #[error("line {line} is not valid UTF-8")]
    InvalidEncoding { line: usize },

    /// Invalid options or job definition.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl SelectError {
    /// Returns `true` for errors that only affect a single row or filter line.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. }
                | Self::MissingColumn { .. }
                | Self::UnknownColumn { .. }
                | Self::MalformedRow { .. }
                | Self::InvalidEncoding { .. }
        )
    }
}
