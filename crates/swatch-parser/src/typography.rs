//! Typography extraction: families, sizes, weights, and line heights.
//!
//! Each dimension is collected independently from its longhand property and
//! from the `font` shorthand, then [`extract_fonts`] crosses the four sets
//! into [`FontToken`]s.

use std::collections::{BTreeSet, HashSet};

use swatch_core::FontToken;
use tracing::debug;

use crate::css_input;
use crate::numeric::leading_int;
use crate::patterns::{
    FONT_FAMILY_DECL, FONT_SHORTHAND_DECL, FONT_SIZE_DECL, FONT_SIZE_KEYWORD, FONT_SIZE_LENGTH,
    FONT_WEIGHT_DECL, LINE_HEIGHT_DECL, LINE_HEIGHT_KEYWORD, LINE_HEIGHT_LENGTH,
    SHORTHAND_FONT_SIZE, SHORTHAND_FONT_WEIGHT, SHORTHAND_LINE_HEIGHT, UNITLESS_NUMBER,
};

/// Past this many full combinations, assembly falls back to family × size.
pub const FONT_COMBINATION_LIMIT: usize = 50;

/// Number of family × size tokens kept in the simplified fallback.
pub const SIMPLIFIED_FONT_LIMIT: usize = 30;

pub const DEFAULT_FONT_WEIGHT: &str = "400";
pub const DEFAULT_LINE_HEIGHT: &str = "normal";

const CSS_WIDE_KEYWORDS: [&str; 3] = ["inherit", "initial", "unset"];

/// Assemble font tokens from the cross product of all four dimensions.
///
/// Tokens are emitted in family, size, weight, line-height order, each
/// dimension sorted. When the full product exceeds
/// [`FONT_COMBINATION_LIMIT`], only family × size is crossed (weight `400`,
/// line height `normal`) and the first [`SIMPLIFIED_FONT_LIMIT`] are kept.
#[must_use]
pub fn extract_fonts<'a>(css: impl Into<Option<&'a str>>) -> Vec<FontToken> {
    let Some(css) = css_input(css) else {
        return Vec::new();
    };

    let families = extract_font_families(css);
    let sizes = extract_font_sizes(css);
    let weights = extract_font_weights(css);
    let line_heights = extract_line_heights(css);

    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for family in &families {
        for size in &sizes {
            for weight in &weights {
                for line_height in &line_heights {
                    let token = FontToken::new(family, size, weight, line_height);
                    if seen.insert(token.key()) {
                        tokens.push(token);
                    }
                }
            }
        }
    }

    if tokens.len() > FONT_COMBINATION_LIMIT {
        debug!(
            combinations = tokens.len(),
            "font combinations exceed limit, simplifying to family x size"
        );
        return simplified_fonts(&families, &sizes);
    }

    debug!(count = tokens.len(), "extracted font tokens");
    tokens
}

fn simplified_fonts(families: &[String], sizes: &[String]) -> Vec<FontToken> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for family in families {
        for size in sizes {
            if seen.insert((family.as_str(), size.as_str())) {
                tokens.push(FontToken::new(
                    family,
                    size,
                    DEFAULT_FONT_WEIGHT,
                    DEFAULT_LINE_HEIGHT,
                ));
            }
        }
    }
    tokens.truncate(SIMPLIFIED_FONT_LIMIT);
    tokens
}

/// Font families from `font-family` lists and the tail of `font` shorthands.
///
/// Quotes are stripped; `inherit`/`initial`/`unset` are dropped.
#[must_use]
pub fn extract_font_families<'a>(css: impl Into<Option<&'a str>>) -> Vec<String> {
    let Some(css) = css_input(css) else {
        return Vec::new();
    };

    let mut families = BTreeSet::new();

    for caps in FONT_FAMILY_DECL.captures_iter(css) {
        collect_family_list(caps[1].trim(), &mut families);
    }

    // Shorthand: [style] [variant] [weight] size[/line-height] family.
    // Only the last whitespace-separated chunk is treated as the family list.
    for caps in FONT_SHORTHAND_DECL.captures_iter(css) {
        let parts: Vec<&str> = caps[1].split_whitespace().collect();
        if parts.len() >= 2
            && let Some(last) = parts.last()
        {
            collect_family_list(last, &mut families);
        }
    }

    families.into_iter().collect()
}

fn collect_family_list(list: &str, families: &mut BTreeSet<String>) {
    for family in list.split(',') {
        let normalized = family.replace(['\'', '"'], "");
        let normalized = normalized.trim();
        if !normalized.is_empty() && !CSS_WIDE_KEYWORDS.contains(&normalized) {
            families.insert(normalized.to_string());
        }
    }
}

/// Font sizes from `font-size` and the first length in `font` shorthands.
#[must_use]
pub fn extract_font_sizes<'a>(css: impl Into<Option<&'a str>>) -> Vec<String> {
    let Some(css) = css_input(css) else {
        return Vec::new();
    };

    let mut sizes = BTreeSet::new();

    for caps in FONT_SIZE_DECL.captures_iter(css) {
        let value = caps[1].trim();
        if is_valid_size_value(value) {
            sizes.insert(value.to_string());
        }
    }

    for caps in FONT_SHORTHAND_DECL.captures_iter(css) {
        if let Some(size) = SHORTHAND_FONT_SIZE.find(caps[1].trim())
            && is_valid_size_value(size.as_str())
        {
            sizes.insert(size.as_str().to_string());
        }
    }

    sizes.into_iter().collect()
}

/// Font weights as numeric strings; `["400"]` when the stylesheet declares none.
#[must_use]
pub fn extract_font_weights<'a>(css: impl Into<Option<&'a str>>) -> Vec<String> {
    let Some(css) = css_input(css) else {
        return Vec::new();
    };

    let mut weights = BTreeSet::new();

    for caps in FONT_WEIGHT_DECL.captures_iter(css) {
        if let Some(weight) = normalize_font_weight(&caps[1]) {
            weights.insert(weight);
        }
    }

    for caps in FONT_SHORTHAND_DECL.captures_iter(css) {
        if let Some(token) = SHORTHAND_FONT_WEIGHT.captures(caps[1].trim())
            && let Some(weight) = normalize_font_weight(&token[1])
        {
            weights.insert(weight);
        }
    }

    if weights.is_empty() {
        weights.insert(DEFAULT_FONT_WEIGHT.to_string());
    }

    weights.into_iter().collect()
}

/// Line heights from `line-height` and the `/x` part of `font` shorthands;
/// `["normal"]` when the stylesheet declares none.
#[must_use]
pub fn extract_line_heights<'a>(css: impl Into<Option<&'a str>>) -> Vec<String> {
    let Some(css) = css_input(css) else {
        return Vec::new();
    };

    let mut line_heights = BTreeSet::new();

    for caps in LINE_HEIGHT_DECL.captures_iter(css) {
        let value = caps[1].trim();
        if is_valid_line_height(value) {
            line_heights.insert(value.to_string());
        }
    }

    for caps in FONT_SHORTHAND_DECL.captures_iter(css) {
        if let Some(suffix) = SHORTHAND_LINE_HEIGHT.captures(caps[1].trim())
            && is_valid_line_height(&suffix[1])
        {
            line_heights.insert(suffix[1].to_string());
        }
    }

    if line_heights.is_empty() {
        line_heights.insert(DEFAULT_LINE_HEIGHT.to_string());
    }

    line_heights.into_iter().collect()
}

/// `true` for a number with a font-size unit or an absolute/relative size keyword.
#[must_use]
pub fn is_valid_size_value(value: &str) -> bool {
    !value.is_empty() && (FONT_SIZE_LENGTH.is_match(value) || FONT_SIZE_KEYWORD.is_match(value))
}

/// Map a `font-weight` value to `"100"`..`"900"`.
///
/// Keywords: `normal` → 400, `bold`/`bolder` → 700, `lighter` → 300.
/// Numbers must be a multiple of 100 in range; anything else is `None`.
#[must_use]
pub fn normalize_font_weight(weight: &str) -> Option<String> {
    let value = weight.trim().to_ascii_lowercase();
    let keyword = match value.as_str() {
        "normal" => Some("400"),
        "bold" | "bolder" => Some("700"),
        "lighter" => Some("300"),
        _ => None,
    };
    if let Some(keyword) = keyword {
        return Some(keyword.to_string());
    }

    leading_int(&value)
        .filter(|n| (100..=900).contains(n) && n % 100 == 0)
        .map(|n| n.to_string())
}

/// `true` for a unitless number, a number with a length unit, or a keyword.
#[must_use]
pub fn is_valid_line_height(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && (LINE_HEIGHT_KEYWORD.is_match(trimmed)
            || UNITLESS_NUMBER.is_match(trimmed)
            || LINE_HEIGHT_LENGTH.is_match(trimmed))
}
