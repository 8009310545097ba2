//! Motion observation input and generated motion reports.
//!
//! Observations come from a headless-browser collaborator that watches style
//! changes at runtime; reports are what the export layer renders from them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What caused an observed animation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Scroll,
    Hover,
    Load,
    #[serde(other)]
    Other,
}

impl Trigger {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Hover => "hover",
            Self::Load => "load",
            Self::Other => "other",
        }
    }

    /// Human-readable phrase used in descriptions and Markdown.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Scroll => "on scroll",
            Self::Hover => "on hover",
            Self::Load => "on page load",
            Self::Other => "on an unknown trigger",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One CSS property that changed during an observed animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PropertyChange {
    pub property: String,
    pub from: String,
    pub to: String,
}

/// A style-change event captured at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObservedAnimation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// CSS selector of the animated element.
    pub element: String,
    pub trigger: Trigger,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    pub properties: Vec<PropertyChange>,
}

/// Re-implementation snippets for one motion report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CodeSnippets {
    pub css: String,
    pub js: String,
    pub gsap: String,
}

/// A described, reproducible motion pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MotionReport {
    pub id: String,
    pub description: String,
    pub trigger: Trigger,
    pub duration_ms: u64,
    pub properties: Vec<PropertyChange>,
    pub element: String,
    pub easing: String,
    pub code_snippets: CodeSnippets,
}
