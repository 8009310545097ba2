//! Stylesheet fetching.
//!
//! The network client lives outside this crate; anything that can turn a URL
//! into CSS text implements [`StylesheetFetcher`]. [`FileFetcher`] covers
//! pages saved to disk.

use url::Url;

use crate::error::FetchError;

const CORS_INDICATORS: [&str; 3] = ["cors", "cross-origin", "access-control-allow-origin"];

/// Retrieves the body of one stylesheet.
pub trait StylesheetFetcher {
    /// Fetch `url` and return its CSS text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the stylesheet cannot be retrieved.
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Reads `file://` stylesheets from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl StylesheetFetcher for FileFetcher {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        if url.scheme() != "file" {
            return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
        }
        let path = url
            .to_file_path()
            .map_err(|()| FetchError::Rejected(format!("not a local path: {url}")))?;
        std::fs::read_to_string(&path).map_err(|source| FetchError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// `true` when an error message indicates a cross-origin restriction.
#[must_use]
pub fn is_cors_error(message: &str) -> bool {
    let message = message.to_lowercase();
    CORS_INDICATORS
        .iter()
        .any(|indicator| message.contains(indicator))
}
