//! Source collection error types.

use thiserror::Error;

/// Errors raised while preparing a page for stylesheet collection.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The base location could not be parsed as a URL.
    #[error("invalid base URL '{base}': {source}")]
    InvalidBase {
        base: String,
        #[source]
        source: url::ParseError,
    },

    /// A local path could not be expressed as a `file://` URL.
    #[error("cannot build a file URL from path: {0}")]
    InvalidPath(String),
}

/// Errors raised while fetching a single stylesheet.
///
/// A fetch failure never aborts collection; it is recorded as a
/// [`swatch_core::StylesheetFailure`] and collection moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The fetcher does not handle this URL scheme.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Reading a local stylesheet failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The remote side refused or failed the request.
    #[error("{0}")]
    Rejected(String),
}

impl FetchError {
    /// `true` when the failure message looks like a cross-origin block.
    #[must_use]
    pub fn is_cors(&self) -> bool {
        crate::fetch::is_cors_error(&self.to_string())
    }
}
