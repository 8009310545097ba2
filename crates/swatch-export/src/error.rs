//! Export error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or writing a starter kit.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing a kit file (or creating its directory) failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Token names or the JSON token file could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A token file format name was not recognized.
    #[error("unknown token format: {0} (expected css, scss, or json)")]
    UnknownFormat(String),
}
