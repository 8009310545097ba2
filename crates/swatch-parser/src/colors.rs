//! Color extraction: hex and `rgb()`/`rgba()` literals.
//!
//! Hex colors normalize to 6-digit uppercase, `rgb()` and `rgba()` to
//! `rgba(r, g, b, a)`. Channel values are not range-checked, so
//! `rgb(999, 999, 999)` passes through as written.

use std::collections::BTreeSet;

use regex::Captures;
use tracing::debug;

use crate::css_input;
use crate::numeric::{canonical_digits, format_number, leading_float};
use crate::patterns::{HEX_COLOR, RGB_COLOR};

/// Extract every unique color literal, normalized and sorted.
#[must_use]
pub fn extract_colors<'a>(css: impl Into<Option<&'a str>>) -> Vec<String> {
    let Some(css) = css_input(css) else {
        return Vec::new();
    };

    let mut colors = BTreeSet::new();

    for hex in HEX_COLOR.find_iter(css) {
        colors.insert(normalize_hex_color(hex.as_str()));
    }

    for caps in RGB_COLOR.captures_iter(css) {
        if let Some(rgba) = rgba_from_captures(&caps) {
            colors.insert(rgba);
        }
    }

    debug!(count = colors.len(), "extracted colors");
    colors.into_iter().collect()
}

/// Normalize a hex color: uppercase, 3-digit shorthand expanded to 6 digits.
///
/// `#fff` → `#FFFFFF`, `#a1b2c3` → `#A1B2C3`.
#[must_use]
pub fn normalize_hex_color(hex: &str) -> String {
    let digits = hex.trim_start_matches('#').to_ascii_uppercase();
    if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        format!("#{expanded}")
    } else {
        format!("#{digits}")
    }
}

/// Normalize an `rgb()`/`rgba()` literal to `rgba(r, g, b, a)`.
///
/// Alpha defaults to `1` and is rendered without superfluous zeros
/// (`0.50` → `0.5`, `1.0` → `1`). Input that does not look like an rgb
/// literal is returned unchanged.
#[must_use]
pub fn normalize_rgb_color(rgb: &str) -> String {
    RGB_COLOR
        .captures(rgb)
        .and_then(|caps| rgba_from_captures(&caps))
        .unwrap_or_else(|| rgb.to_string())
}

fn rgba_from_captures(caps: &Captures<'_>) -> Option<String> {
    let r = canonical_digits(caps.get(1)?.as_str());
    let g = canonical_digits(caps.get(2)?.as_str());
    let b = canonical_digits(caps.get(3)?.as_str());

    let alpha = match caps.get(4) {
        Some(literal) => format_number(leading_float(literal.as_str())?),
        None => String::from("1"),
    };

    Some(format!("rgba({r}, {g}, {b}, {alpha})"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn extracts_hex_colors() {
        let css = ".a { color: #ff0000; } .b { background: #00FF00; }";
        assert_eq!(extract_colors(css), vec!["#00FF00", "#FF0000"]);
    }

    #[test]
    fn three_and_six_digit_hex_collapse() {
        assert_eq!(extract_colors("{color:#F00}{color:#FF0000}").len(), 1);
    }

    #[test]
    fn same_color_in_different_case_dedupes() {
        assert_eq!(
            extract_colors(".a{color:#ff0000}.b{color:#FF0000}"),
            vec!["#FF0000"]
        );
    }

    #[test]
    fn extracts_rgb_and_rgba() {
        let css = ".a { color: rgb(255, 0, 0); } .b { color: rgba(0,0,0,0.5); }";
        assert_eq!(
            extract_colors(css),
            vec!["rgba(0, 0, 0, 0.5)", "rgba(255, 0, 0, 1)"]
        );
    }

    #[test]
    fn tolerates_whitespace_inside_rgb() {
        let css = ".a { color: rgb(  10 ,20,   30 ); }";
        assert_eq!(extract_colors(css), vec!["rgba(10, 20, 30, 1)"]);
    }

    #[test]
    fn mixed_formats_sort_lexicographically() {
        let css = "a{color:#fff;border-color:rgb(1,2,3);background:#000}";
        assert_eq!(
            extract_colors(css),
            vec!["#000000", "#FFFFFF", "rgba(1, 2, 3, 1)"]
        );
    }

    #[test]
    fn out_of_range_channels_pass_through() {
        assert_eq!(
            extract_colors("a{color:rgb(999,999,999)}"),
            vec!["rgba(999, 999, 999, 1)"]
        );
    }

    #[test]
    fn malformed_literals_are_ignored() {
        let css = "a{color:#ggg;background:rgb(a,b,c);border-color:#abcd}";
        assert!(extract_colors(css).is_empty());
    }

    #[test]
    fn empty_and_missing_input_yield_nothing() {
        assert!(extract_colors("").is_empty());
        assert!(extract_colors(None).is_empty());
        assert!(extract_colors("body { margin: 0 }").is_empty());
    }

    #[test]
    fn normalized_output_is_a_fixed_point() {
        let css = "a{color:#abc;background:rgba(1,2,3,.25);border-color:rgb(4,5,6)}";
        let first = extract_colors(css);
        let second = extract_colors(first.join(";").as_str());
        assert_eq!(first, second);
    }

    #[rstest]
    #[case("#fff", "#FFFFFF")]
    #[case("#a1b2c3", "#A1B2C3")]
    #[case("#ABC", "#AABBCC")]
    #[case("#FFFFFF", "#FFFFFF")]
    fn hex_normalization(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_hex_color(input), expected);
        assert_eq!(normalize_hex_color(&normalize_hex_color(input)), expected);
    }

    #[rstest]
    #[case("rgb(255,0,0)", "rgba(255, 0, 0, 1)")]
    #[case("rgba(0,0,0,1.0)", "rgba(0, 0, 0, 1)")]
    #[case("rgba(0, 0, 0, 0.50)", "rgba(0, 0, 0, 0.5)")]
    #[case("rgba(10,20,30,.75)", "rgba(10, 20, 30, 0.75)")]
    #[case("rgb(007, 08, 9)", "rgba(7, 8, 9, 1)")]
    fn rgb_normalization(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_rgb_color(input), expected);
    }

    #[test]
    fn non_rgb_input_is_returned_unchanged() {
        assert_eq!(normalize_rgb_color("hsl(0, 0%, 0%)"), "hsl(0, 0%, 0%)");
    }
}
