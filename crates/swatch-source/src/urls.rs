//! URL resolution and `@import` discovery.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::SourceError;

/// `@import url("x")`, `@import 'x'`, or `@import x`. Group 1 is the target.
static IMPORT_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)@import\s+(?:url\(\s*)?['"]?([^'")\s;]+)['"]?\s*\)?"#)
        .unwrap_or_else(|error| panic!("invalid @import pattern: {error}"))
});

/// Parse the page location every relative stylesheet reference resolves against.
///
/// # Errors
///
/// Returns [`SourceError::InvalidBase`] if `base` is not an absolute URL.
pub fn parse_base(base: &str) -> Result<Url, SourceError> {
    Url::parse(base).map_err(|source| SourceError::InvalidBase {
        base: base.to_string(),
        source,
    })
}

/// Build a `file://` base URL for a local HTML document.
///
/// # Errors
///
/// Returns [`SourceError::InvalidPath`] if the path cannot be made absolute.
pub fn file_base(path: &std::path::Path) -> Result<Url, SourceError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|error| SourceError::InvalidPath(format!("{}: {error}", path.display())))?
            .join(path)
    };
    Url::from_file_path(&absolute).map_err(|()| SourceError::InvalidPath(absolute.display().to_string()))
}

/// Resolve a stylesheet reference against the page URL.
///
/// - `//host/x` inherits the base scheme
/// - `http://` and `https://` references are taken as-is
/// - everything else is joined onto the base
///
/// # Errors
///
/// Returns the underlying [`url::ParseError`] when the reference cannot form
/// a valid URL.
pub fn resolve_url(href: &str, base: &Url) -> Result<Url, url::ParseError> {
    let href = href.trim();
    if href.starts_with("//") {
        return Url::parse(&format!("{}:{href}", base.scheme()));
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Url::parse(href);
    }
    base.join(href)
}

/// Resolve every `@import` target in a stylesheet, in source order.
///
/// Targets that do not resolve are logged and skipped.
#[must_use]
pub fn extract_import_urls(css: &str, base: &Url) -> Vec<Url> {
    IMPORT_RULE
        .captures_iter(css)
        .filter_map(|caps| match resolve_url(&caps[1], base) {
            Ok(url) => Some(url),
            Err(error) => {
                tracing::warn!(href = &caps[1], %error, "failed to resolve @import URL");
                None
            }
        })
        .collect()
}
