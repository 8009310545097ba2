//! Design token value types.
//!
//! All tokens serialize with camelCase field names. Optional animation timing
//! fields are omitted entirely when unresolved so downstream snippet
//! generators can include or drop each line.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// FontToken
// ---------------------------------------------------------------------------

/// One typography combination: family, size, weight, and line height.
///
/// Uniqueness is the full 4-tuple, see [`FontToken::key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FontToken {
    pub family: String,
    pub size: String,
    /// Numeric weight string, `"100"` through `"900"`.
    pub weight: String,
    pub line_height: String,
}

impl FontToken {
    #[must_use]
    pub fn new(
        family: impl Into<String>,
        size: impl Into<String>,
        weight: impl Into<String>,
        line_height: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            size: size.into(),
            weight: weight.into(),
            line_height: line_height.into(),
        }
    }

    /// Dedup key in the form `family|size|weight|lineHeight`.
    #[must_use]
    pub fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.family, self.size, self.weight, self.line_height
        )
    }
}

// ---------------------------------------------------------------------------
// EffectKind / EffectToken
// ---------------------------------------------------------------------------

/// Broad category of a visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Shadow,
    Radius,
    Filter,
}

impl EffectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shadow => "shadow",
            Self::Radius => "radius",
            Self::Filter => "filter",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visual effect declaration (shadow, border radius, or filter).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct EffectToken {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    /// Originating CSS property (`box-shadow`, `text-shadow`, `border-radius`, `filter`).
    pub property: String,
    pub value: String,
}

impl EffectToken {
    #[must_use]
    pub fn new(kind: EffectKind, property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            property: property.into(),
            value: value.into(),
        }
    }

    /// Dedup key for this effect.
    ///
    /// Box shadows use `shadow:<value>` and text shadows `text-shadow:<value>`,
    /// so the same shadow text on both properties yields two tokens. Radius
    /// and filter keys ignore the originating property.
    #[must_use]
    pub fn key(&self) -> String {
        match self.kind {
            EffectKind::Shadow if self.property == "text-shadow" => {
                format!("text-shadow:{}", self.value)
            }
            kind => format!("{kind}:{}", self.value),
        }
    }
}

// ---------------------------------------------------------------------------
// AnimationToken
// ---------------------------------------------------------------------------

/// A named `@keyframes` block plus whatever timing its usage sites declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimationToken {
    pub name: String,
    /// Verbatim rule text, including the `@keyframes` header.
    pub keyframes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_count: Option<String>,
}

impl AnimationToken {
    /// A token with no resolved timing.
    #[must_use]
    pub fn new(name: impl Into<String>, keyframes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyframes: keyframes.into(),
            duration: None,
            timing_function: None,
            delay: None,
            iteration_count: None,
        }
    }

    /// `true` when none of the four optional timing fields were resolved.
    #[must_use]
    pub const fn is_unreferenced(&self) -> bool {
        self.duration.is_none()
            && self.timing_function.is_none()
            && self.delay.is_none()
            && self.iteration_count.is_none()
    }
}

// ---------------------------------------------------------------------------
// TokenSet
// ---------------------------------------------------------------------------

/// The five token collections extracted from one stylesheet payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TokenSet {
    /// Canonical colors: `#RRGGBB` or `rgba(r, g, b, a)`, sorted.
    pub colors: Vec<String>,
    pub fonts: Vec<FontToken>,
    /// `<number><unit>` values sorted by unit priority, then magnitude.
    pub spacing: Vec<String>,
    pub effects: Vec<EffectToken>,
    pub animations: Vec<AnimationToken>,
}

impl TokenSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        TokenCategory::ALL
            .iter()
            .all(|category| self.count(*category) == 0)
    }

    #[must_use]
    pub fn count(&self, category: TokenCategory) -> usize {
        match category {
            TokenCategory::Colors => self.colors.len(),
            TokenCategory::Fonts => self.fonts.len(),
            TokenCategory::Spacing => self.spacing.len(),
            TokenCategory::Effects => self.effects.len(),
            TokenCategory::Animations => self.animations.len(),
        }
    }

    /// Serialize a single collection.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if the collection cannot be serialized.
    pub fn select(&self, category: TokenCategory) -> Result<serde_json::Value, serde_json::Error> {
        match category {
            TokenCategory::Colors => serde_json::to_value(&self.colors),
            TokenCategory::Fonts => serde_json::to_value(&self.fonts),
            TokenCategory::Spacing => serde_json::to_value(&self.spacing),
            TokenCategory::Effects => serde_json::to_value(&self.effects),
            TokenCategory::Animations => serde_json::to_value(&self.animations),
        }
    }
}

/// Names the five collections of a [`TokenSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    Colors,
    Fonts,
    Spacing,
    Effects,
    Animations,
}

impl TokenCategory {
    pub const ALL: [Self; 5] = [
        Self::Colors,
        Self::Fonts,
        Self::Spacing,
        Self::Effects,
        Self::Animations,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Fonts => "fonts",
            Self::Spacing => "spacing",
            Self::Effects => "effects",
            Self::Animations => "animations",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_key_joins_all_four_fields() {
        let font = FontToken::new("Inter", "16px", "400", "1.5");
        assert_eq!(font.key(), "Inter|16px|400|1.5");
    }

    #[test]
    fn text_shadow_key_is_namespaced_by_property() {
        let boxed = EffectToken::new(EffectKind::Shadow, "box-shadow", "0 1px 2px #000");
        let text = EffectToken::new(EffectKind::Shadow, "text-shadow", "0 1px 2px #000");
        assert_eq!(boxed.key(), "shadow:0 1px 2px #000");
        assert_eq!(text.key(), "text-shadow:0 1px 2px #000");
    }

    #[test]
    fn radius_key_ignores_property() {
        let radius = EffectToken::new(EffectKind::Radius, "border-radius", "4px");
        assert_eq!(radius.key(), "radius:4px");
    }

    #[test]
    fn unresolved_animation_omits_optional_fields() {
        let token = AnimationToken::new("spin", "@keyframes spin{}");
        let json = serde_json::to_value(&token).expect("serializes");
        let object = json.as_object().expect("object");
        assert_eq!(object.len(), 2);
        assert!(!object.contains_key("duration"));
        assert!(!object.contains_key("timingFunction"));
        assert!(token.is_unreferenced());
    }

    #[test]
    fn category_parses_from_str() {
        assert_eq!(
            "spacing".parse::<TokenCategory>().expect("known"),
            TokenCategory::Spacing
        );
        assert!("borders".parse::<TokenCategory>().is_err());
    }

    #[test]
    fn unknown_category_error_names_the_input() {
        let error = "borders".parse::<TokenCategory>().unwrap_err();
        assert!(matches!(&error, CoreError::UnknownCategory(name) if name == "borders"));
        assert_eq!(error.to_string(), "Unknown token category: borders");
    }

    #[test]
    fn empty_token_set_reports_empty() {
        assert!(TokenSet::default().is_empty());
        let set = TokenSet {
            colors: vec!["#FFFFFF".into()],
            ..TokenSet::default()
        };
        assert!(!set.is_empty());
        assert_eq!(set.count(TokenCategory::Colors), 1);
    }
}
