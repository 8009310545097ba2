//! Token naming: user-chosen names plus generated fallbacks.
//!
//! Builders never see raw tokens. [`NamedTokens::resolve`] pairs every token
//! that will be emitted with a name that is unique inside its category.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use swatch_core::{AnimationToken, EffectToken, FontToken, TokenSet};

use crate::error::ExportError;

// ── User names ─────────────────────────────────────────────────────

/// User-chosen names per category, keyed by token identity.
///
/// | category     | key                                  |
/// |--------------|--------------------------------------|
/// | `colors`     | canonical color value                |
/// | `fonts`      | [`FontToken::key`]                   |
/// | `spacing`    | spacing value                        |
/// | `effects`    | [`EffectToken::key`]                 |
/// | `animations` | `@keyframes` name                    |
///
/// Blank names count as unnamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenNames {
    pub colors: BTreeMap<String, String>,
    pub fonts: BTreeMap<String, String>,
    pub spacing: BTreeMap<String, String>,
    pub effects: BTreeMap<String, String>,
    pub animations: BTreeMap<String, String>,
}

impl TokenNames {
    /// Parse a names file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] if the text is not a valid names object.
    pub fn from_json(text: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(text)?)
    }
}

fn chosen<'a>(names: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    names
        .get(key)
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
}

// ── Resolution ─────────────────────────────────────────────────────

/// A token together with the name it is emitted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Named<T> {
    pub name: String,
    pub token: T,
}

/// Every token selected for export, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedTokens {
    pub colors: Vec<Named<String>>,
    pub fonts: Vec<Named<FontToken>>,
    pub spacing: Vec<Named<String>>,
    pub effects: Vec<Named<EffectToken>>,
    pub animations: Vec<Named<AnimationToken>>,
}

impl NamedTokens {
    /// Select and name the tokens to export.
    ///
    /// Named tokens are always kept. Unnamed tokens are dropped unless
    /// `include_unnamed`, in which case they get a generated name
    /// (animations keep their `@keyframes` name). Repeated names within a
    /// category get `-2`, `-3`, ... appended.
    #[must_use]
    pub fn resolve(tokens: &TokenSet, names: &TokenNames, include_unnamed: bool) -> Self {
        Self {
            colors: name_all(&tokens.colors, include_unnamed, |value| {
                chosen(&names.colors, value)
                    .map(str::to_string)
                    .ok_or_else(|| color_name(value))
            }),
            fonts: name_all(&tokens.fonts, include_unnamed, |font| {
                chosen(&names.fonts, &font.key())
                    .map(str::to_string)
                    .ok_or_else(|| font_name(font))
            }),
            spacing: name_all(&tokens.spacing, include_unnamed, |value| {
                chosen(&names.spacing, value)
                    .map(str::to_string)
                    .ok_or_else(|| spacing_name(value))
            }),
            effects: name_all(&tokens.effects, include_unnamed, |effect| {
                chosen(&names.effects, &effect.key())
                    .map(str::to_string)
                    .ok_or_else(|| effect_name(effect))
            }),
            animations: name_all(&tokens.animations, include_unnamed, |animation| {
                chosen(&names.animations, &animation.name)
                    .map(str::to_string)
                    .ok_or_else(|| animation.name.clone())
            }),
        }
    }
}

/// `Ok(name)` is a user choice, `Err(name)` a generated fallback.
fn name_all<T: Clone>(
    tokens: &[T],
    include_unnamed: bool,
    name_of: impl Fn(&T) -> Result<String, String>,
) -> Vec<Named<T>> {
    let mut taken = UniqueNames::default();
    tokens
        .iter()
        .filter_map(|token| {
            let name = match name_of(token) {
                Ok(chosen) => chosen,
                Err(generated) if include_unnamed => generated,
                Err(_) => return None,
            };
            Some(Named {
                name: taken.claim(name),
                token: token.clone(),
            })
        })
        .collect()
}

/// Hands out names, suffixing repeats with `-2`, `-3`, ...
#[derive(Default)]
pub(crate) struct UniqueNames(HashSet<String>);

impl UniqueNames {
    pub(crate) fn claim(&mut self, base: String) -> String {
        if self.0.insert(base.clone()) {
            return base;
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{base}-{suffix}");
            if self.0.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

// ── Generated names ────────────────────────────────────────────────

/// `<hue>-<lightness>` for hex colors, `color-<hash>` for anything else.
#[must_use]
pub fn color_name(value: &str) -> String {
    match parse_hex(value) {
        Some((r, g, b)) => format!("{}-{}", hue_family(r, g, b), lightness_level(r, g, b)),
        None => format!("color-{}", short_hash(value, 4)),
    }
}

/// `text-<scale>` from the numeric part of the font size.
///
/// Sizes without a leading number (keywords such as `large`) land on `4xl`.
#[must_use]
pub fn font_name(font: &FontToken) -> String {
    let scale = match leading_number(&font.size) {
        Some(size) if size <= 12.0 => "xs",
        Some(size) if size <= 14.0 => "sm",
        Some(size) if size <= 16.0 => "base",
        Some(size) if size <= 18.0 => "lg",
        Some(size) if size <= 24.0 => "xl",
        Some(size) if size <= 32.0 => "2xl",
        Some(size) if size <= 48.0 => "3xl",
        _ => "4xl",
    };
    format!("text-{scale}")
}

/// `spacing-<step>` on a 4-unit grid, snapped up to 0, 1, 2, 3, 4, 6, 8, 12, 16.
#[must_use]
pub fn spacing_name(value: &str) -> String {
    let Some(number) = leading_number(value) else {
        return format!("spacing-{}", short_hash(value, 4));
    };
    // Half-up rounding so 2px lands on step 1, not step 0.
    #[allow(clippy::cast_possible_truncation)]
    let step = (number / 4.0 + 0.5).floor() as i64;
    let bucket = match step {
        0 => 0,
        ..=1 => 1,
        2 => 2,
        3 => 3,
        4 => 4,
        5..=6 => 6,
        7..=8 => 8,
        9..=12 => 12,
        13..=16 => 16,
        other => other,
    };
    format!("spacing-{bucket}")
}

/// `<kind>-<hash>` with a 3-character hash of the effect key.
#[must_use]
pub fn effect_name(effect: &EffectToken) -> String {
    format!("{}-{}", effect.kind, short_hash(&effect.key(), 3))
}

fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |range| u8::from_str_radix(&expanded[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn hue_family(r: u8, g: u8, b: u8) -> &'static str {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    if (r - g).abs() < 10 && (g - b).abs() < 10 && (r - b).abs() < 10 {
        return "gray";
    }

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max - min < 30 {
        return "gray";
    }

    match () {
        () if r == max && g == min => "red",
        () if r == max && b == min => "orange",
        () if g == max && b == min => "green",
        () if g == max && r == min => "cyan",
        () if b == max && r == min => "blue",
        () if b == max && g == min => "purple",
        () if r > g && r > b => {
            if g > b {
                "orange"
            } else {
                "red"
            }
        }
        () if g > r && g > b => {
            if r > b {
                "yellow"
            } else {
                "green"
            }
        }
        () if b > r && b > g => {
            if r > g {
                "purple"
            } else {
                "blue"
            }
        }
        () => "gray",
    }
}

fn lightness_level(r: u8, g: u8, b: u8) -> u16 {
    let lightness = (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0;
    [
        (230.0, 100),
        (200.0, 200),
        (170.0, 300),
        (140.0, 400),
        (110.0, 500),
        (80.0, 600),
        (50.0, 700),
        (25.0, 800),
    ]
    .into_iter()
    .find(|(threshold, _)| lightness > *threshold)
    .map_or(900, |(_, level)| level)
}

fn leading_number(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(index, c)| !(c.is_ascii_digit() || c == '.' || (c == '-' && index == 0)))
        .map_or(trimmed.len(), |(index, _)| index);
    trimmed[..end].parse().ok()
}

/// The classic `h = (h << 5) - h + code` string hash over UTF-16 code units,
/// with the shift wrapping at 32 bits and the accumulator kept exact.
fn string_hash(value: &str) -> i64 {
    value.encode_utf16().fold(0_i64, |acc, unit| {
        #[allow(clippy::cast_possible_truncation)]
        let shifted = i64::from((acc as i32).wrapping_shl(5));
        shifted - acc + i64::from(unit)
    })
}

fn short_hash(value: &str, len: usize) -> String {
    to_base36(string_hash(value).unsigned_abs())
        .chars()
        .take(len)
        .collect()
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[usize::try_from(n % 36).unwrap_or_default()]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
