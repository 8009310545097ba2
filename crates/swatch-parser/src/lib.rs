//! # swatch-parser
//!
//! Regex-based design token extraction from raw CSS text for Swatch.
//!
//! Each token category has its own extractor module:
//! - **colors**: hex and `rgb()`/`rgba()` literals
//! - **typography**: font families, sizes, weights, line heights
//! - **spacing**: padding, margin, and gap lengths
//! - **effects**: shadows, border radii, filters
//! - **animations**: `@keyframes` blocks with cross-referenced timing
//!
//! [`TokenExtractor`] runs all five over one stylesheet. No CSS parser is
//! involved; malformed input degrades to fewer tokens, never to an error.

pub mod animations;
pub mod colors;
pub mod effects;
pub mod extractor;
mod numeric;
mod patterns;
pub mod spacing;
pub mod typography;

pub use animations::{
    AnimationProperty, KeyframesBlock, discover_keyframes, extract_animations,
    parse_animation_shorthand, resolve_animation_property,
};
pub use colors::{extract_colors, normalize_hex_color, normalize_rgb_color};
pub use effects::{extract_effects, normalize_border_radius, normalize_shadow};
pub use extractor::{TokenExtractor, extract_tokens};
pub use spacing::{
    compare_spacing_values, extract_spacing, normalize_spacing_value, parse_spacing_value,
};
pub use typography::{
    extract_font_families, extract_font_sizes, extract_font_weights, extract_fonts,
    extract_line_heights, is_valid_line_height, is_valid_size_value, normalize_font_weight,
};

/// Treat absent and empty stylesheets the same way.
pub(crate) fn css_input<'a>(css: impl Into<Option<&'a str>>) -> Option<&'a str> {
    css.into().filter(|text| !text.is_empty())
}
