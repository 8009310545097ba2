//! # swatch-source
//!
//! Turns a page into the single CSS payload the token extractor consumes.
//!
//! - **html**: inline `<style>` bodies and `<link rel="stylesheet">` targets
//! - **urls**: reference resolution and `@import` discovery
//! - **fetch**: the [`StylesheetFetcher`] seam plus a local-file fetcher
//! - **merge**: annotated concatenation with success/failure bookkeeping
//! - **collect**: all of the above for one document, plus user-facing warnings
//!
//! No HTTP client is bundled; network fetchers implement [`StylesheetFetcher`].

mod collect;
mod error;
mod fetch;
mod html;
mod merge;
mod urls;

pub use collect::{CollectOptions, collect_from_html, warnings_for};
pub use error::{FetchError, SourceError};
pub use fetch::{FileFetcher, StylesheetFetcher, is_cors_error};
pub use html::{extract_inline_styles, extract_stylesheet_links};
pub use merge::{CssPayload, FetchOutcome, FetchSummary, merge_stylesheets};
pub use urls::{extract_import_urls, file_base, parse_base, resolve_url};
