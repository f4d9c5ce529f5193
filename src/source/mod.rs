//! The data source: loading typed record lists from files.
//!
//! Most callers should use [`load_from_path`], which:
//!
//! - auto-detects the format from the file extension (or takes a forced format via
//!   [`LoadOptions`])
//! - deserializes the file into a `Vec` of records via serde
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! Format-specific functions are also available under [`csv`] and [`json`].

pub mod csv;
pub mod json;
pub mod observability;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{LoadError, LoadResult};

pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array-of-objects or NDJSON.
    Json,
}

impl SourceFormat {
    /// Parse a source format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling [`load_from_path`].
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// If `None`, auto-detect the format from the file extension.
    pub format: Option<SourceFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Unified load entry point for path-based sources.
///
/// - If `options.format` is `None`, the format is inferred from the file extension
///   (`.csv`, `.json`, `.ndjson`).
/// - When an observer is configured, reports `on_success` with record-count stats,
///   `on_failure` with a computed severity, and `on_alert` when that severity is
///   at or above the configured threshold (default: `Critical`).
///
/// # Examples
///
/// ```no_run
/// use record_query::domain::Car;
/// use record_query::source::{load_from_path, LoadOptions};
///
/// # fn main() -> Result<(), record_query::LoadError> {
/// // Uses `.csv` to select CSV loading.
/// let cars: Vec<Car> = load_from_path("cars.csv", &LoadOptions::default())?;
/// println!("records={}", cars.len());
/// # Ok(())
/// # }
/// ```
///
/// With stderr logging and the default alert threshold:
///
/// ```no_run
/// use std::sync::Arc;
///
/// use record_query::domain::Student;
/// use record_query::source::{load_from_path, LoadOptions, StdErrObserver};
///
/// # fn main() -> Result<(), record_query::LoadError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
///
/// // Missing files are treated as Critical and will trigger `on_alert`.
/// let result: record_query::LoadResult<Vec<Student>> =
///     load_from_path("does_not_exist.json", &opts);
/// let _err = result.unwrap_err();
/// # Ok(())
/// # }
/// ```
pub fn load_from_path<T>(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = LoadContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        SourceFormat::Csv => csv::load_csv_from_path(path),
        SourceFormat::Json => json::load_json_from_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(records) => obs.on_success(
                &ctx,
                LoadStats {
                    records: records.len(),
                },
            ),
            Err(e) => {
                let severity = severity_for_error(e);
                obs.on_failure(&ctx, severity, e);
                if severity >= options.alert_at_or_above {
                    obs.on_alert(&ctx, severity, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        LoadError::Json(_) => LoadSeverity::Error,
        LoadError::UnknownFormat { .. } => LoadSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> LoadResult<SourceFormat> {
    path.extension()
        .and_then(|s| s.to_str())
        .and_then(SourceFormat::from_extension)
        .ok_or_else(|| LoadError::UnknownFormat {
            path: path.to_path_buf(),
        })
}
