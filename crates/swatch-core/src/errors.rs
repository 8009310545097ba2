//! Error types shared across Swatch crates.
//!
//! The extraction core never fails. The only core-level error is a token
//! category name that does not resolve; `SourceError`, `ExportError` and
//! `ConfigError` live in their own crates.

use thiserror::Error;

/// Errors raised by `swatch-core` lookups.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A token category name did not match any known category.
    #[error("Unknown token category: {0}")]
    UnknownCategory(String),
}
