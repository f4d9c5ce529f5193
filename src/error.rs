use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for record-loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by the [`crate::source`] loading functions.
///
/// This is a single error enum shared across CSV and JSON/NDJSON loading. The query
/// layer itself never produces errors; absence of a qualifying record is expressed
/// through `Option`/zero/vacuous-truth results instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV loading error (malformed row, type mismatch against the record type, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON/NDJSON loading error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is missing or maps to no supported format.
    #[error("cannot infer source format for path ({})", .path.display())]
    UnknownFormat { path: PathBuf },
}
