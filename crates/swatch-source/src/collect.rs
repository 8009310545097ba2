//! End-to-end stylesheet collection for one HTML document.

use swatch_core::{Warning, WarningKind};
use url::Url;

use crate::fetch::StylesheetFetcher;
use crate::html::{extract_inline_styles, extract_stylesheet_links};
use crate::merge::{CssPayload, FetchOutcome, FetchSummary, merge_stylesheets};

/// Knobs for [`collect_from_html`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Precede each chunk with a `/* ... */` comment naming its origin.
    pub annotate_sources: bool,
    /// Stylesheets beyond this many are not fetched.
    pub max_stylesheets: usize,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            annotate_sources: true,
            max_stylesheets: 50,
        }
    }
}

/// Discover, fetch, and merge every stylesheet referenced by `html`.
///
/// Fetches run one after another. A failed fetch is recorded in the
/// summary and collection carries on with the rest.
pub fn collect_from_html(
    html: &str,
    base: &Url,
    fetcher: &dyn StylesheetFetcher,
    options: CollectOptions,
) -> CssPayload {
    let inline = extract_inline_styles(html);
    let mut links = extract_stylesheet_links(html, base);

    if links.len() > options.max_stylesheets {
        tracing::warn!(
            found = links.len(),
            limit = options.max_stylesheets,
            "too many stylesheets, ignoring the rest"
        );
        links.truncate(options.max_stylesheets);
    }

    let outcomes: Vec<FetchOutcome> = links
        .into_iter()
        .map(|url| {
            let result = fetcher.fetch(&url);
            FetchOutcome { url, result }
        })
        .collect();

    let payload = merge_stylesheets(&inline, outcomes, options.annotate_sources);
    tracing::info!(
        inline = inline.len(),
        downloaded = payload.summary.css_files_downloaded,
        found = payload.summary.css_files_found,
        "collected stylesheets"
    );
    payload
}

/// Recoverable warnings describing what collection could not retrieve.
#[must_use]
pub fn warnings_for(summary: &FetchSummary) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if summary.has_cors_issues {
        warnings.push(Warning::recoverable(
            WarningKind::Cors,
            "Some CSS files could not be downloaded due to CORS restrictions.",
            "This may result in incomplete design token extraction.",
        ));
    }

    if summary.files_failed > 0 {
        warnings.push(Warning::recoverable(
            WarningKind::PartialFailure,
            format!("{} CSS file(s) could not be downloaded.", summary.files_failed),
            format!(
                "Successfully downloaded {} out of {} CSS files.",
                summary.css_files_downloaded, summary.css_files_found
            ),
        ));
    }

    warnings
}
