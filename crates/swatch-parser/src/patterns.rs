//! Compiled regular expressions used by the extractors.
//!
//! Every pattern is a named constant so the accepted CSS subset can be
//! audited in one place. Declaration patterns capture the raw value up to the
//! next `;`, `{` or `}`; callers trim it.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("invalid built-in pattern {pattern}: {error}"))
}

// ── Colors ─────────────────────────────────────────────────────────

/// `#` followed by exactly 3 or 6 hex digits, word-boundary terminated.
pub(crate) static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})\b"));

/// `rgb(r, g, b)` / `rgba(r, g, b, a)` with numeric literals only.
pub(crate) static RGB_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"rgba?\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)(?:\s*,\s*([\d.]+))?\s*\)")
});

// ── Typography ─────────────────────────────────────────────────────

pub(crate) static FONT_FAMILY_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)font-family\s*:\s*([^;{}]+)"));

pub(crate) static FONT_SIZE_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)font-size\s*:\s*([^;{}]+)"));

pub(crate) static FONT_WEIGHT_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)font-weight\s*:\s*([^;{}]+)"));

pub(crate) static LINE_HEIGHT_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)line-height\s*:\s*([^;{}]+)"));

/// The `font` shorthand (not `font-*` longhands).
pub(crate) static FONT_SHORTHAND_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bfont\s*:\s*([^;{}]+)"));

/// First number+unit token inside a `font` shorthand value.
pub(crate) static SHORTHAND_FONT_SIZE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(\d+(?:\.\d+)?(?:px|em|rem|%|pt|vh|vw))"));

/// First weight keyword or 3-digit number inside a `font` shorthand value.
pub(crate) static SHORTHAND_FONT_WEIGHT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(bold|bolder|lighter|normal|\d{3})\b"));

/// The `/<line-height>` suffix of a `font` shorthand value.
pub(crate) static SHORTHAND_LINE_HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"/\s*(\S+)"));

pub(crate) static FONT_SIZE_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(\d+(?:\.\d+)?)(px|em|rem|%|pt|vh|vw|vmin|vmax|ch|ex)$")
});

pub(crate) static FONT_SIZE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(xx-small|x-small|small|medium|large|x-large|xx-large|smaller|larger)$")
});

pub(crate) static LINE_HEIGHT_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(normal|inherit|initial|unset)$"));

pub(crate) static UNITLESS_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\d+(?:\.\d+)?$"));

pub(crate) static LINE_HEIGHT_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^\d+(?:\.\d+)?(px|em|rem|%|pt|vh|vw)$"));

// ── Spacing ────────────────────────────────────────────────────────

pub(crate) static PADDING_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)padding(?:-(?:top|right|bottom|left))?\s*:\s*([^;{}]+)"));

pub(crate) static MARGIN_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)margin(?:-(?:top|right|bottom|left))?\s*:\s*([^;{}]+)"));

pub(crate) static GAP_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:gap|column-gap|row-gap)\s*:\s*([^;{}]+)"));

/// A whole declaration value that carries no spacing token at all.
pub(crate) static SPACING_SKIP_VALUE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(auto|inherit|initial|unset|0)$"));

pub(crate) static CSS_WIDE_SPACING_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(auto|inherit|initial|unset)$"));

pub(crate) static SPACING_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(-?\d+(?:\.\d+)?)(px|em|rem|%|vh|vw|vmin|vmax|ch|ex|pt|cm|mm|in)$")
});

// ── Effects ────────────────────────────────────────────────────────

pub(crate) static BOX_SHADOW_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)box-shadow\s*:\s*([^;{}]+)"));

pub(crate) static TEXT_SHADOW_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)text-shadow\s*:\s*([^;{}]+)"));

pub(crate) static BORDER_RADIUS_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)border-radius\s*:\s*([^;{}]+)"));

pub(crate) static CORNER_RADIUS_DECL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)border-(?:top-left|top-right|bottom-left|bottom-right)-radius\s*:\s*([^;{}]+)")
});

pub(crate) static FILTER_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)filter\s*:\s*([^;{}]+)"));

pub(crate) static RADIUS_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(inherit|initial|unset)$"));

/// One or more space-separated lengths/percentages.
pub(crate) static RADIUS_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^[\d.]+(?:px|em|rem|%|vh|vw)(?:\s+[\d.]+(?:px|em|rem|%|vh|vw))*$")
});

// ── Animations ─────────────────────────────────────────────────────

/// `@keyframes name { ... }`, vendor prefixes allowed, one level of nested
/// braces in the body. Group 1 is the name.
pub(crate) static KEYFRAMES_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)@(?:-webkit-|-moz-|-o-|-ms-)?keyframes\s+([A-Za-z0-9_-]+)\s*\{(?:[^{}]*\{[^{}]*\})*[^{}]*\}",
    )
});

pub(crate) static ANIMATION_DURATION_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)animation-duration\s*:\s*([^;{}]+)"));

pub(crate) static ANIMATION_TIMING_FUNCTION_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)animation-timing-function\s*:\s*([^;{}]+)"));

pub(crate) static ANIMATION_DELAY_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)animation-delay\s*:\s*([^;{}]+)"));

pub(crate) static ANIMATION_ITERATION_COUNT_DECL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)animation-iteration-count\s*:\s*([^;{}]+)"));

/// A time literal such as `300ms` or `1.5s`.
pub(crate) static TIME_VALUE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\d+(?:\.\d+)?m?s$"));

pub(crate) static BARE_INTEGER: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d+$"));
