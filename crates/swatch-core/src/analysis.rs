//! Analysis response types: the extracted tokens plus how the stylesheet
//! payload was assembled.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::motion::MotionReport;
use crate::tokens::TokenSet;

/// Full result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub tokens: TokenSet,
    pub metadata: AnalysisMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion_reports: Option<Vec<MotionReport>>,
}

/// Where the CSS came from and how much of it could be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    /// The page or stylesheet location that was analyzed.
    pub analyzed_source: String,
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u64,
    pub css_files_found: u32,
    pub css_files_downloaded: u32,
    pub files_failed: u32,
    pub has_cors_issues: bool,
    #[serde(default)]
    pub errors: Vec<StylesheetFailure>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

impl AnalysisMetadata {
    /// Metadata for a payload that did not involve any stylesheet downloads.
    #[must_use]
    pub fn local(analyzed_source: impl Into<String>) -> Self {
        Self {
            analyzed_source: analyzed_source.into(),
            timestamp: Utc::now(),
            duration_ms: 0,
            css_files_found: 0,
            css_files_downloaded: 0,
            files_failed: 0,
            has_cors_issues: false,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// A stylesheet that could not be downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StylesheetFailure {
    pub url: String,
    pub error: String,
    pub is_cors: bool,
}

/// Kind of recoverable problem surfaced next to a successful analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    Cors,
    PartialFailure,
}

impl WarningKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cors => "cors",
            Self::PartialFailure => "partial_failure",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recoverable problem: the analysis still produced tokens, possibly fewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Warning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub message: String,
    pub details: String,
    pub recoverable: bool,
}

impl Warning {
    #[must_use]
    pub fn recoverable(
        kind: WarningKind,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details: details.into(),
            recoverable: true,
        }
    }
}
