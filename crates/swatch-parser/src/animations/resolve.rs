use regex::Regex;
use tracing::warn;

use super::shorthand::parse_animation_shorthand;
use crate::patterns::{
    ANIMATION_DELAY_DECL, ANIMATION_DURATION_DECL, ANIMATION_ITERATION_COUNT_DECL,
    ANIMATION_TIMING_FUNCTION_DECL,
};

/// The four timing properties recovered for each animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationProperty {
    Duration,
    TimingFunction,
    Delay,
    IterationCount,
}

impl AnimationProperty {
    pub const ALL: [Self; 4] = [
        Self::Duration,
        Self::TimingFunction,
        Self::Delay,
        Self::IterationCount,
    ];

    /// The CSS longhand property name, e.g. `animation-duration`.
    #[must_use]
    pub const fn longhand(self) -> &'static str {
        match self {
            Self::Duration => "animation-duration",
            Self::TimingFunction => "animation-timing-function",
            Self::Delay => "animation-delay",
            Self::IterationCount => "animation-iteration-count",
        }
    }

    fn longhand_pattern(self) -> &'static Regex {
        match self {
            Self::Duration => &*ANIMATION_DURATION_DECL,
            Self::TimingFunction => &*ANIMATION_TIMING_FUNCTION_DECL,
            Self::Delay => &*ANIMATION_DELAY_DECL,
            Self::IterationCount => &*ANIMATION_ITERATION_COUNT_DECL,
        }
    }
}

/// Resolve one timing property of the animation `name` from usage sites in `css`.
///
/// A usage site is a rule block (text between two `}`) with an `animation`
/// or `animation-name` declaration naming the animation as a whole word.
/// The first explicit longhand in any usage block wins; otherwise the
/// first `animation` shorthand mentioning the name is classified by
/// [`parse_animation_shorthand`].
#[must_use]
pub fn resolve_animation_property(
    css: &str,
    name: &str,
    property: AnimationProperty,
) -> Option<String> {
    UsageSites::find(css, name)?.resolve(property)
}

/// Rule blocks that reference one animation, found once and reused for all
/// four properties.
pub(super) struct UsageSites<'a> {
    blocks: Vec<&'a str>,
    shorthand: Regex,
}

impl<'a> UsageSites<'a> {
    /// `None` when nothing in `css` references `name`.
    pub(super) fn find(css: &'a str, name: &str) -> Option<Self> {
        let escaped = regex::escape(name);
        let usage = name_pattern(
            name,
            &format!(r"(?i)animation(?:-name)?\s*:[^;{{}}]*\b{escaped}\b"),
        )?;
        let shorthand = name_pattern(
            name,
            &format!(r"(?i)animation\s*:\s*([^;{{}}]*\b{escaped}\b[^;{{}}]*)"),
        )?;

        let blocks: Vec<&str> = css.split('}').filter(|block| usage.is_match(block)).collect();
        if blocks.is_empty() {
            return None;
        }

        Some(Self { blocks, shorthand })
    }

    pub(super) fn resolve(&self, property: AnimationProperty) -> Option<String> {
        let longhand = property.longhand_pattern();
        for block in &self.blocks {
            if let Some(caps) = longhand.captures(block) {
                let value = caps[1].trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }

        self.blocks
            .iter()
            .find_map(|block| self.shorthand.captures(block))
            .and_then(|caps| parse_animation_shorthand(&caps[1], property))
    }
}

fn name_pattern(name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(error) => {
            warn!(animation = name, %error, "skipping cross-reference for animation name");
            None
        }
    }
}
