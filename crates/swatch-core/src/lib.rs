//! # swatch-core
//!
//! Value types and error types shared across all Swatch crates.
//!
//! This crate provides:
//! - Design token structs (fonts, effects, animations) and the aggregate `TokenSet`
//! - Analysis metadata, per-stylesheet failures, and recoverable warnings
//! - Motion observation input and generated motion report types
//! - Cross-cutting error types
//!
//! Every type here is an immutable value produced fresh per analysis run.

pub mod analysis;
pub mod errors;
pub mod motion;
pub mod tokens;

pub use analysis::{AnalysisMetadata, AnalysisResult, StylesheetFailure, Warning, WarningKind};
pub use errors::CoreError;
pub use motion::{CodeSnippets, MotionReport, ObservedAnimation, PropertyChange, Trigger};
pub use tokens::{AnimationToken, EffectKind, EffectToken, FontToken, TokenCategory, TokenSet};
