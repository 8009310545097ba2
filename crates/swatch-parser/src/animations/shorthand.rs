use super::resolve::AnimationProperty;
use crate::patterns::{BARE_INTEGER, TIME_VALUE};

const TIMING_KEYWORDS: [&str; 7] = [
    "ease",
    "linear",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

/// Pick one property out of an `animation` shorthand value by token type.
///
/// - duration: first time token (`500ms`, `1.5s`)
/// - timing function: first easing keyword, `cubic-bezier(..)` or `steps(..)`
/// - delay: second time token, if there is one
/// - iteration count: first bare integer or `infinite`
///
/// Position within the shorthand is ignored, so `1s 2s` always reads as
/// duration then delay.
#[must_use]
pub fn parse_animation_shorthand(shorthand: &str, property: AnimationProperty) -> Option<String> {
    let mut parts = shorthand.split_whitespace();

    let found = match property {
        AnimationProperty::Duration => parts.find(|part| TIME_VALUE.is_match(part)),
        AnimationProperty::TimingFunction => parts.find(|part| {
            TIMING_KEYWORDS.contains(part)
                || part.starts_with("cubic-bezier")
                || part.starts_with("steps")
        }),
        AnimationProperty::Delay => parts.filter(|part| TIME_VALUE.is_match(part)).nth(1),
        AnimationProperty::IterationCount => {
            parts.find(|part| BARE_INTEGER.is_match(part) || *part == "infinite")
        }
    };

    found.map(str::to_string)
}
