//! Dataset error types.

use std::path::PathBuf;

/// A dataset does not have the expected top-level shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The value has no `features` array.
    #[error("{dataset} dataset is not a feature collection (missing `features` array)")]
    NotFeatureCollection {
        /// Which dataset was being read (`"line"` or `"info"`).
        dataset: &'static str,
    },
}

/// Errors reading a dataset file from disk.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
