//! `@keyframes` animation extraction.
//!
//! Runs in two decoupled passes:
//! 1. [`discover_keyframes`] finds every named `@keyframes` rule (vendor
//!    prefixes included), first occurrence of a name wins.
//! 2. For each name, [`resolve_animation_property`] scans the whole stylesheet
//!    for rule blocks that reference the animation and recovers its duration,
//!    timing function, delay, and iteration count, either from explicit
//!    longhands or by classifying the tokens of an `animation` shorthand.
//!
//! Anything that cannot be resolved stays `None` on the token.

mod discovery;
mod resolve;
mod shorthand;

pub use discovery::{KeyframesBlock, discover_keyframes};
pub use resolve::{AnimationProperty, resolve_animation_property};
pub use shorthand::parse_animation_shorthand;

use swatch_core::AnimationToken;
use tracing::debug;

use crate::css_input;
use resolve::UsageSites;

/// Extract one [`AnimationToken`] per unique `@keyframes` name, in source order.
#[must_use]
pub fn extract_animations<'a>(css: impl Into<Option<&'a str>>) -> Vec<AnimationToken> {
    let Some(css) = css_input(css) else {
        return Vec::new();
    };

    let animations: Vec<AnimationToken> = discover_keyframes(css)
        .into_iter()
        .map(|block| {
            let sites = UsageSites::find(css, block.name);
            let resolve = |property| sites.as_ref().and_then(|s| s.resolve(property));
            AnimationToken {
                duration: resolve(AnimationProperty::Duration),
                timing_function: resolve(AnimationProperty::TimingFunction),
                delay: resolve(AnimationProperty::Delay),
                iteration_count: resolve(AnimationProperty::IterationCount),
                ..AnimationToken::new(block.name, block.rule)
            }
        })
        .collect();

    debug!(count = animations.len(), "extracted animations");
    animations
}

#[cfg(test)]
mod tests;
