//! Token assembly: all five extractors over one stylesheet payload.

use swatch_core::TokenSet;

use crate::{animations, colors, effects, spacing, typography};

/// Runs every extractor over one CSS payload.
///
/// Holds no per-call state; one instance can be shared freely or a new one
/// built per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenExtractor;

impl TokenExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extract the complete [`TokenSet`]. Empty or missing input yields an
    /// empty set.
    #[must_use]
    pub fn extract<'a>(&self, css: impl Into<Option<&'a str>>) -> TokenSet {
        let Some(css) = crate::css_input(css) else {
            return TokenSet::default();
        };

        let tokens = TokenSet {
            colors: colors::extract_colors(css),
            fonts: typography::extract_fonts(css),
            spacing: spacing::extract_spacing(css),
            effects: effects::extract_effects(css),
            animations: animations::extract_animations(css),
        };

        tracing::debug!(
            bytes = css.len(),
            colors = tokens.colors.len(),
            fonts = tokens.fonts.len(),
            spacing = tokens.spacing.len(),
            effects = tokens.effects.len(),
            animations = tokens.animations.len(),
            "extracted design tokens"
        );
        tokens
    }
}

/// Shorthand for `TokenExtractor::new().extract(css)`.
#[must_use]
pub fn extract_tokens<'a>(css: impl Into<Option<&'a str>>) -> TokenSet {
    TokenExtractor::new().extract(css)
}
