// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Raised by the loader when a scan file cannot be turned into a table.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open scan file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scan file is missing mandatory column '{name}'")]
    MissingColumn { name: &'static str },
    #[error("failed to read scan file: {0}")]
    Csv(#[from] csv::Error),
}

/// Raised by the metrics calculator when the table holds zero rows.
#[derive(Debug, Error)]
#[error("scan table contains no rows")]
pub struct EmptyTableError;

/// Per-experiment failure reported by the batch driver. One experiment
/// failing never aborts the rest of the batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] DataLoadError),
    #[error(transparent)]
    Metrics(#[from] EmptyTableError),
    #[error("failed to render report: {0}")]
    Render(String),
}

// src/error.rs
