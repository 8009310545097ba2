//! Token stylesheets: CSS custom properties, SCSS variables, and JSON.

use std::collections::BTreeMap;

use serde::Serialize;
use swatch_core::{EffectKind, FontToken};

use crate::error::ExportError;
use crate::naming::NamedTokens;

/// The four declarations a font token expands to, as `(suffix, value)`.
fn font_parts(font: &FontToken) -> [(&'static str, &str); 4] {
    [
        ("family", font.family.as_str()),
        ("size", font.size.as_str()),
        ("weight", font.weight.as_str()),
        ("line-height", font.line_height.as_str()),
    ]
}

/// `:root { --name: value; }` covering colors, fonts, spacing, and effects.
#[must_use]
pub fn build_css(named: &NamedTokens) -> String {
    let mut lines = Vec::new();
    for color in &named.colors {
        lines.push(format!("  --{}: {};", color.name, color.token));
    }
    for font in &named.fonts {
        for (suffix, value) in font_parts(&font.token) {
            lines.push(format!("  --{}-{suffix}: {value};", font.name));
        }
    }
    for spacing in &named.spacing {
        lines.push(format!("  --{}: {};", spacing.name, spacing.token));
    }
    for effect in &named.effects {
        lines.push(format!("  --{}: {};", effect.name, effect.token.value));
    }

    format!(":root {{\n{}\n}}\n", lines.join("\n"))
}

/// `$name: value;` lines grouped under one comment per category.
#[must_use]
pub fn build_scss(named: &NamedTokens) -> String {
    let mut lines = vec!["// Colors".to_string()];
    lines.extend(named.colors.iter().map(|c| format!("${}: {};", c.name, c.token)));
    lines.push(String::new());

    lines.push("// Typography".to_string());
    for font in &named.fonts {
        for (suffix, value) in font_parts(&font.token) {
            lines.push(format!("${}-{suffix}: {value};", font.name));
        }
    }
    lines.push(String::new());

    lines.push("// Spacing".to_string());
    lines.extend(named.spacing.iter().map(|s| format!("${}: {};", s.name, s.token)));
    lines.push(String::new());

    lines.push("// Effects".to_string());
    lines.extend(
        named
            .effects
            .iter()
            .map(|e| format!("${}: {};", e.name, e.token.value)),
    );
    lines.push(String::new());

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonTokens<'a> {
    colors: BTreeMap<&'a str, &'a str>,
    typography: BTreeMap<&'a str, JsonFont<'a>>,
    spacing: BTreeMap<&'a str, &'a str>,
    effects: BTreeMap<&'a str, JsonEffect<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFont<'a> {
    font_family: &'a str,
    font_size: &'a str,
    font_weight: &'a str,
    line_height: &'a str,
}

#[derive(Serialize)]
struct JsonEffect<'a> {
    #[serde(rename = "type")]
    kind: EffectKind,
    value: &'a str,
}

/// Pretty-printed `{colors, typography, spacing, effects}` object keyed by name.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn build_json(named: &NamedTokens) -> Result<String, ExportError> {
    let tokens = JsonTokens {
        colors: named
            .colors
            .iter()
            .map(|c| (c.name.as_str(), c.token.as_str()))
            .collect(),
        typography: named
            .fonts
            .iter()
            .map(|f| {
                let font = JsonFont {
                    font_family: &f.token.family,
                    font_size: &f.token.size,
                    font_weight: &f.token.weight,
                    line_height: &f.token.line_height,
                };
                (f.name.as_str(), font)
            })
            .collect(),
        spacing: named
            .spacing
            .iter()
            .map(|s| (s.name.as_str(), s.token.as_str()))
            .collect(),
        effects: named
            .effects
            .iter()
            .map(|e| {
                let effect = JsonEffect {
                    kind: e.token.kind,
                    value: &e.token.value,
                };
                (e.name.as_str(), effect)
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&tokens)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use swatch_core::EffectToken;

    use super::*;
    use crate::naming::Named;

    fn named<T>(name: &str, token: T) -> Named<T> {
        Named {
            name: name.to_string(),
            token,
        }
    }

    fn sample() -> NamedTokens {
        NamedTokens {
            colors: vec![named("primary", "#FF0000".to_string())],
            fonts: vec![named(
                "heading",
                FontToken::new("'Inter', sans-serif", "32px", "700", "1.2"),
            )],
            spacing: vec![named("gutter", "16px".to_string())],
            effects: vec![named(
                "card",
                EffectToken::new(EffectKind::Shadow, "box-shadow", "0 2px 4px #000"),
            )],
            animations: Vec::new(),
        }
    }

    #[test]
    fn css_custom_properties() {
        assert_eq!(
            build_css(&sample()),
            ":root {\n\
             \x20 --primary: #FF0000;\n\
             \x20 --heading-family: 'Inter', sans-serif;\n\
             \x20 --heading-size: 32px;\n\
             \x20 --heading-weight: 700;\n\
             \x20 --heading-line-height: 1.2;\n\
             \x20 --gutter: 16px;\n\
             \x20 --card: 0 2px 4px #000;\n\
             }\n"
        );
    }

    #[test]
    fn scss_groups_by_category() {
        let scss = build_scss(&sample());
        assert_eq!(
            scss,
            "// Colors\n$primary: #FF0000;\n\n\
             // Typography\n$heading-family: 'Inter', sans-serif;\n$heading-size: 32px;\n\
             $heading-weight: 700;\n$heading-line-height: 1.2;\n\n\
             // Spacing\n$gutter: 16px;\n\n\
             // Effects\n$card: 0 2px 4px #000;\n"
        );
    }

    #[test]
    fn empty_scss_still_has_headers() {
        let scss = build_scss(&NamedTokens::default());
        assert_eq!(scss, "// Colors\n\n// Typography\n\n// Spacing\n\n// Effects\n");
    }

    #[test]
    fn json_structure() {
        let json: serde_json::Value = serde_json::from_str(&build_json(&sample()).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "colors": { "primary": "#FF0000" },
                "typography": {
                    "heading": {
                        "fontFamily": "'Inter', sans-serif",
                        "fontSize": "32px",
                        "fontWeight": "700",
                        "lineHeight": "1.2"
                    }
                },
                "spacing": { "gutter": "16px" },
                "effects": { "card": { "type": "shadow", "value": "0 2px 4px #000" } }
            })
        );
    }

    #[test]
    fn empty_css_is_an_empty_root_block() {
        assert_eq!(build_css(&NamedTokens::default()), ":root {\n\n}\n");
    }
}
