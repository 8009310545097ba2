//! One standalone stylesheet per extracted animation.

use std::fmt::Write as _;

use swatch_core::AnimationToken;

use crate::naming::Named;

/// Render `<name>.css` for each animation, in order.
///
/// Each file carries the verbatim `@keyframes` rule followed by a commented
/// usage example that lists only the timing the source stylesheet declared.
#[must_use]
pub fn build_animation_css(animations: &[Named<AnimationToken>]) -> Vec<(String, String)> {
    animations
        .iter()
        .map(|named| (format!("{}.css", named.name), render(&named.name, &named.token)))
        .collect()
}

fn render(name: &str, animation: &AnimationToken) -> String {
    let original = &animation.name;
    let mut css = format!(
        "/* Animation: {name} */\n/* Original name: {original} */\n\n{}\n\n",
        animation.keyframes
    );

    css.push_str("/* Usage Example:\n.element {\n");
    let _ = writeln!(css, "  animation-name: {original};");
    let longhands = [
        ("animation-duration", &animation.duration),
        ("animation-timing-function", &animation.timing_function),
        ("animation-delay", &animation.delay),
        ("animation-iteration-count", &animation.iteration_count),
    ];
    for (property, value) in longhands {
        if let Some(value) = value {
            let _ = writeln!(css, "  {property}: {value};");
        }
    }
    css.push_str("}\n");

    if animation.duration.is_some() || animation.timing_function.is_some() {
        let mut shorthand = original.clone();
        for value in longhands.iter().filter_map(|(_, value)| value.as_deref()) {
            shorthand.push(' ');
            shorthand.push_str(value);
        }
        let _ = write!(css, "\n/* Shorthand: */\n.element {{\n  animation: {shorthand};\n}}\n");
    }

    css.push_str("*/\n");
    css
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn named(name: &str, token: AnimationToken) -> Named<AnimationToken> {
        Named {
            name: name.to_string(),
            token,
        }
    }

    #[test]
    fn fully_resolved_animation() {
        let mut token = AnimationToken::new("fadeIn", "@keyframes fadeIn { from { opacity: 0; } }");
        token.duration = Some("600ms".into());
        token.timing_function = Some("ease-out".into());
        token.delay = Some("200ms".into());
        token.iteration_count = Some("1".into());

        let files = build_animation_css(&[named("fade-in", token)]);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "fade-in.css");
        assert_eq!(
            files[0].1,
            "/* Animation: fade-in */\n\
             /* Original name: fadeIn */\n\n\
             @keyframes fadeIn { from { opacity: 0; } }\n\n\
             /* Usage Example:\n\
             .element {\n\
             \x20 animation-name: fadeIn;\n\
             \x20 animation-duration: 600ms;\n\
             \x20 animation-timing-function: ease-out;\n\
             \x20 animation-delay: 200ms;\n\
             \x20 animation-iteration-count: 1;\n\
             }\n\
             \n/* Shorthand: */\n\
             .element {\n\
             \x20 animation: fadeIn 600ms ease-out 200ms 1;\n\
             }\n\
             */\n"
        );
    }

    #[test]
    fn unreferenced_animation_has_no_optional_lines() {
        let token = AnimationToken::new("pulse", "@keyframes pulse {}");
        let files = build_animation_css(&[named("pulse", token)]);
        let css = &files[0].1;

        assert!(css.contains("  animation-name: pulse;\n}\n*/\n"));
        assert!(!css.contains("animation-duration"));
        assert!(!css.contains("undefined"));
        assert!(!css.contains("Shorthand"));
    }

    #[test]
    fn delay_alone_does_not_produce_shorthand() {
        let mut token = AnimationToken::new("late", "@keyframes late {}");
        token.delay = Some("1s".into());
        let css = &build_animation_css(&[named("late", token)])[0].1;

        assert!(css.contains("  animation-delay: 1s;\n"));
        assert!(!css.contains("Shorthand"));
    }
}
