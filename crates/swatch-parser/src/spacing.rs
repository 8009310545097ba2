//! Spacing extraction from `padding`, `margin`, and `gap` declarations.

use std::cmp::Ordering;

use tracing::debug;

use crate::css_input;
use crate::numeric::{format_number, leading_float};
use crate::patterns::{
    CSS_WIDE_SPACING_KEYWORD, GAP_DECL, MARGIN_DECL, PADDING_DECL, SPACING_LENGTH,
    SPACING_SKIP_VALUE,
};

/// Sort order of spacing units. Anything not listed sorts after all of these.
pub const SPACING_UNIT_PRIORITY: [&str; 14] = [
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "ch", "ex", "pt", "cm", "mm", "in",
];

/// Extract unique non-zero spacing lengths, sorted by unit priority then value.
#[must_use]
pub fn extract_spacing<'a>(css: impl Into<Option<&'a str>>) -> Vec<String> {
    let Some(css) = css_input(css) else {
        return Vec::new();
    };

    let mut values: Vec<String> = Vec::new();
    for pattern in [&*PADDING_DECL, &*MARGIN_DECL, &*GAP_DECL] {
        for caps in pattern.captures_iter(css) {
            for value in parse_spacing_value(&caps[1]) {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
    }

    values.sort_by(|a, b| compare_spacing_values(a, b));
    debug!(count = values.len(), "extracted spacing values");
    values
}

/// Split a (possibly shorthand) spacing value into normalized lengths.
///
/// A whole value of `auto`, `inherit`, `initial`, `unset`, or `0` yields
/// nothing; otherwise each whitespace-separated part goes through
/// [`normalize_spacing_value`].
#[must_use]
pub fn parse_spacing_value(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || SPACING_SKIP_VALUE.is_match(trimmed) {
        return Vec::new();
    }

    trimmed
        .split_whitespace()
        .filter_map(normalize_spacing_value)
        .collect()
}

/// Normalize one spacing length: lowercase unit, number without trailing zeros.
///
/// Keywords, zero in any unit, and unitless or unknown-unit values are `None`.
#[must_use]
pub fn normalize_spacing_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || CSS_WIDE_SPACING_KEYWORD.is_match(trimmed) {
        return None;
    }

    let caps = SPACING_LENGTH.captures(trimmed)?;
    let number = leading_float(&caps[1])?;
    if number == 0.0 {
        return None;
    }

    Some(format!(
        "{}{}",
        format_number(number),
        caps[2].to_ascii_lowercase()
    ))
}

/// Order two spacing values by unit priority, then numerically.
#[must_use]
pub fn compare_spacing_values(a: &str, b: &str) -> Ordering {
    let (a_num, a_unit) = split_length(a);
    let (b_num, b_unit) = split_length(b);

    if a_unit != b_unit {
        return unit_rank(&a_unit).cmp(&unit_rank(&b_unit));
    }
    a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal)
}

fn split_length(value: &str) -> (f64, String) {
    SPACING_LENGTH
        .captures(value.trim())
        .and_then(|caps| Some((leading_float(&caps[1])?, caps[2].to_ascii_lowercase())))
        .unwrap_or((0.0, String::new()))
}

fn unit_rank(unit: &str) -> usize {
    SPACING_UNIT_PRIORITY
        .iter()
        .position(|candidate| *candidate == unit)
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn four_value_shorthand_expands() {
        assert_eq!(
            extract_spacing(".c{padding:10px 20px 30px 40px}"),
            vec!["10px", "20px", "30px", "40px"]
        );
    }

    #[test]
    fn zero_and_keywords_are_excluded() {
        assert!(extract_spacing(".a{margin:0;padding:auto}").is_empty());
        assert!(extract_spacing(".a{margin:0px 0rem;gap:inherit}").is_empty());
    }

    #[test]
    fn keyword_parts_inside_shorthand_are_dropped() {
        assert_eq!(extract_spacing(".a{margin:0 auto}"), Vec::<String>::new());
        assert_eq!(extract_spacing(".a{margin:8px auto}"), vec!["8px"]);
    }

    #[test]
    fn px_sorts_before_rem_regardless_of_magnitude() {
        let css = ".a{margin:2rem} .b{padding:100px} .c{gap:0.5rem} .d{margin-top:4px}";
        assert_eq!(extract_spacing(css), vec!["4px", "100px", "0.5rem", "2rem"]);
    }

    #[test]
    fn sides_and_gap_variants_are_scanned() {
        let css = ".a{padding-left:12px;margin-bottom:-8px;row-gap:1em;column-gap:5%}";
        assert_eq!(extract_spacing(css), vec!["-8px", "12px", "1em", "5%"]);
    }

    #[test]
    fn values_dedupe_after_normalization() {
        let css = ".a{padding:16PX} .b{margin:16.0px} .c{gap:16px}";
        assert_eq!(extract_spacing(css), vec!["16px"]);
    }

    #[test]
    fn unknown_units_and_expressions_are_ignored() {
        let css = ".a{padding:calc(1rem + 2px)} .b{margin:10} .c{gap:3fr}";
        assert!(extract_spacing(css).is_empty());
    }

    #[test]
    fn empty_and_missing_input_yield_nothing() {
        assert!(extract_spacing("").is_empty());
        assert!(extract_spacing(None).is_empty());
    }

    #[rstest]
    #[case("10PX", Some("10px"))]
    #[case("1.50rem", Some("1.5rem"))]
    #[case("-4px", Some("-4px"))]
    #[case("0.0em", None)]
    #[case("0", None)]
    #[case("auto", None)]
    #[case("12", None)]
    #[case("2fr", None)]
    fn spacing_normalization(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(normalize_spacing_value(input).as_deref(), expected);
    }

    #[test]
    fn whole_value_keywords_short_circuit() {
        assert!(parse_spacing_value("  unset ").is_empty());
        assert_eq!(parse_spacing_value("1px 2px"), vec!["1px", "2px"]);
    }

    #[test]
    fn comparator_orders_by_unit_then_number() {
        assert_eq!(compare_spacing_values("100px", "1rem"), Ordering::Less);
        assert_eq!(compare_spacing_values("2em", "1rem"), Ordering::Greater);
        assert_eq!(compare_spacing_values("-2px", "1px"), Ordering::Less);
        assert_eq!(compare_spacing_values("3vw", "3vw"), Ordering::Equal);
        assert_eq!(compare_spacing_values("1in", "garbage"), Ordering::Less);
    }
}
