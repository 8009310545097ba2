//! Lenient number parsing for CSS literals.
//!
//! CSS values reaching these helpers have already been matched by a pattern,
//! but some patterns are permissive (`[\d.]+` for alpha). These helpers read
//! the longest numeric prefix and ignore trailing garbage.

/// Parse a leading integer, skipping leading whitespace and an optional sign.
///
/// Returns `None` when no digit follows.
pub(crate) fn leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = split_sign(trimmed);
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a leading decimal number such as `0.5`, `.5`, `-1.25`, or `1.2.3` (→ 1.2).
pub(crate) fn leading_float(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let (negative, rest) = split_sign(trimmed);

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (index, ch) in rest.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = index + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }

    let number: f64 = rest[..end].trim_end_matches('.').parse().ok()?;
    Some(if negative { -number } else { number })
}

/// Render a number the way CSS authors write it: `10`, `0.5`, `-2.25`.
pub(crate) fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Strip leading zeros from a digit run without overflowing on huge inputs.
pub(crate) fn canonical_digits(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

fn split_sign(value: &str) -> (bool, &str) {
    if let Some(rest) = value.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = value.strip_prefix('+') {
        (false, rest)
    } else {
        (false, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_reads_prefix() {
        assert_eq!(leading_int("700"), Some(700));
        assert_eq!(leading_int("  500 !important"), Some(500));
        assert_eq!(leading_int("400.5"), Some(400));
        assert_eq!(leading_int("-3"), Some(-3));
        assert_eq!(leading_int("bold"), None);
    }

    #[test]
    fn leading_float_handles_partial_literals() {
        assert_eq!(leading_float("0.50"), Some(0.5));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("1.2.3"), Some(1.2));
        assert_eq!(leading_float("1."), Some(1.0));
        assert_eq!(leading_float("-2.25px"), Some(-2.25));
        assert_eq!(leading_float("."), None);
    }

    #[test]
    fn format_number_drops_trailing_zeros() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-8.0), "-8");
    }

    #[test]
    fn canonical_digits_strips_zeros() {
        assert_eq!(canonical_digits("007"), "7");
        assert_eq!(canonical_digits("000"), "0");
        assert_eq!(canonical_digits("255"), "255");
    }
}
