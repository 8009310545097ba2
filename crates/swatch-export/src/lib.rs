//! # swatch-export
//!
//! Everything downstream of extraction:
//!
//! - **naming**: user-chosen token names plus generated fallbacks
//! - **builders**: `tokens.css`, `tokens.scss`, `tokens.json`
//! - **animation_css**: one stylesheet per `@keyframes` animation
//! - **readme**: the kit's `README.md`
//! - **kit**: [`StarterKit`], the full file set, writable to disk
//! - **motion**: motion reports from observed runtime animations

mod animation_css;
mod builders;
mod error;
mod kit;
pub mod motion;
mod naming;
mod readme;

pub use animation_css::build_animation_css;
pub use builders::{build_css, build_json, build_scss};
pub use error::ExportError;
pub use kit::{ExportOptions, StarterKit, TokenFormat};
pub use motion::{generate_reports, render_markdown};
pub use naming::{
    Named, NamedTokens, TokenNames, color_name, effect_name, font_name, spacing_name,
};
pub use readme::{KitCounts, build_readme};
