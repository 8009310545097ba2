//! Visual effect extraction: shadows, border radii, and filters.

use std::collections::HashSet;

use regex::Regex;
use swatch_core::{EffectKind, EffectToken};
use tracing::debug;

use crate::css_input;
use crate::patterns::{
    BORDER_RADIUS_DECL, BOX_SHADOW_DECL, CORNER_RADIUS_DECL, FILTER_DECL, RADIUS_KEYWORD,
    RADIUS_VALUE, TEXT_SHADOW_DECL,
};

/// Extract effect tokens in scan order: box shadows, text shadows, border
/// radii (shorthand then corners), filters.
///
/// Dedup uses [`EffectToken::key`], so one radius value declared on two
/// different corners yields a single token.
#[must_use]
pub fn extract_effects<'a>(css: impl Into<Option<&'a str>>) -> Vec<EffectToken> {
    let Some(css) = css_input(css) else {
        return Vec::new();
    };

    let mut collector = EffectCollector::default();

    collector.scan(css, &BOX_SHADOW_DECL, |value| {
        shadow_value(value).map(|v| EffectToken::new(EffectKind::Shadow, "box-shadow", v))
    });
    collector.scan(css, &TEXT_SHADOW_DECL, |value| {
        shadow_value(value).map(|v| EffectToken::new(EffectKind::Shadow, "text-shadow", v))
    });
    for pattern in [&*BORDER_RADIUS_DECL, &*CORNER_RADIUS_DECL] {
        collector.scan(css, pattern, |value| {
            normalize_border_radius(value)
                .map(|v| EffectToken::new(EffectKind::Radius, "border-radius", v))
        });
    }
    collector.scan(css, &FILTER_DECL, |value| {
        let value = value.trim();
        (!value.is_empty() && !value.eq_ignore_ascii_case("none"))
            .then(|| EffectToken::new(EffectKind::Filter, "filter", value))
    });

    debug!(count = collector.effects.len(), "extracted effects");
    collector.effects
}

#[derive(Default)]
struct EffectCollector {
    seen: HashSet<String>,
    effects: Vec<EffectToken>,
}

impl EffectCollector {
    fn scan(&mut self, css: &str, pattern: &Regex, to_token: impl Fn(&str) -> Option<EffectToken>) {
        for caps in pattern.captures_iter(css) {
            if let Some(token) = to_token(&caps[1])
                && self.seen.insert(token.key())
            {
                self.effects.push(token);
            }
        }
    }
}

fn shadow_value(value: &str) -> Option<String> {
    let normalized = normalize_shadow(value);
    (!normalized.is_empty() && !normalized.eq_ignore_ascii_case("none")).then_some(normalized)
}

/// Trim a shadow value and collapse internal whitespace runs to one space.
#[must_use]
pub fn normalize_shadow(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Validate a border radius as one or more space-separated lengths.
///
/// Returns the trimmed value, or `None` for keywords and anything else.
#[must_use]
pub fn normalize_border_radius(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || RADIUS_KEYWORD.is_match(trimmed) || !RADIUS_VALUE.is_match(trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}
