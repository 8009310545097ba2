//! Assemble inline and downloaded CSS into one payload.

use serde::Serialize;
use swatch_core::{AnalysisMetadata, StylesheetFailure};
use url::Url;

use crate::error::FetchError;

/// Result of fetching one discovered stylesheet.
#[derive(Debug)]
pub struct FetchOutcome {
    pub url: Url,
    pub result: Result<String, FetchError>,
}

/// Counts and failures from stylesheet collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchSummary {
    pub css_files_found: u32,
    pub css_files_downloaded: u32,
    pub files_failed: u32,
    pub has_cors_issues: bool,
    pub errors: Vec<StylesheetFailure>,
}

impl FetchSummary {
    /// Copy the counts and failures onto analysis metadata.
    pub fn apply_to(&self, metadata: &mut AnalysisMetadata) {
        metadata.css_files_found = self.css_files_found;
        metadata.css_files_downloaded = self.css_files_downloaded;
        metadata.files_failed = self.files_failed;
        metadata.has_cors_issues = self.has_cors_issues;
        metadata.errors.clone_from(&self.errors);
    }
}

/// The single CSS string handed to the extractor, plus how it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssPayload {
    pub content: String,
    pub summary: FetchSummary,
}

/// Concatenate inline bodies and successful downloads.
///
/// Inline `<style>` bodies come first, then downloaded stylesheets in
/// discovery order. With `annotate`, each chunk is preceded by a comment
/// naming where it came from. Failed downloads are recorded in the summary
/// and never abort the merge.
#[must_use]
pub fn merge_stylesheets(inline: &[String], outcomes: Vec<FetchOutcome>, annotate: bool) -> CssPayload {
    let mut content = String::new();
    for (index, body) in inline.iter().enumerate() {
        if annotate {
            content.push_str(&format!("\n/* Inline <style> tag {} */\n", index + 1));
        }
        content.push_str(body);
        content.push_str("\n\n");
    }

    let mut summary = FetchSummary {
        css_files_found: count(outcomes.len()),
        ..FetchSummary::default()
    };

    for outcome in outcomes {
        match outcome.result {
            Ok(body) => {
                if annotate {
                    content.push_str(&format!("\n/* Source: {} */\n", outcome.url));
                }
                content.push_str(&body);
                content.push_str("\n\n");
                summary.css_files_downloaded += 1;
            }
            Err(error) => {
                tracing::warn!(url = %outcome.url, %error, "failed to download stylesheet");
                let is_cors = error.is_cors();
                summary.has_cors_issues |= is_cors;
                summary.files_failed += 1;
                summary.errors.push(StylesheetFailure {
                    url: outcome.url.to_string(),
                    error: error.to_string(),
                    is_cors,
                });
            }
        }
    }

    if summary.has_cors_issues {
        let cors = summary.errors.iter().filter(|e| e.is_cors).count();
        tracing::warn!(files = cors, "cross-origin restrictions blocked some stylesheets");
    }

    CssPayload { content, summary }
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
