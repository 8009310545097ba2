//! Motion reports: observed runtime animations turned into reusable code.
//!
//! Each [`ObservedAnimation`] becomes a [`MotionReport`] carrying a one-line
//! description and three re-implementations of the same motion: CSS
//! `@keyframes`, the Web Animations API, and GSAP.

use std::fmt::Write as _;

use swatch_core::{CodeSnippets, MotionReport, ObservedAnimation, PropertyChange, Trigger};

const DEFAULT_EASING: &str = "ease";

/// Generate one report per observation, in order.
#[must_use]
pub fn generate_reports(observed: &[ObservedAnimation]) -> Vec<MotionReport> {
    observed
        .iter()
        .enumerate()
        .map(|(index, animation)| generate_report(animation, index))
        .collect()
}

fn generate_report(animation: &ObservedAnimation, index: usize) -> MotionReport {
    let easing = animation
        .easing
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or(DEFAULT_EASING);
    let id = animation
        .id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| format!("motion-{}", index + 1));

    MotionReport {
        id,
        description: describe(animation),
        trigger: animation.trigger,
        duration_ms: animation.duration_ms,
        properties: animation.properties.clone(),
        element: animation.element.clone(),
        easing: easing.to_string(),
        code_snippets: CodeSnippets {
            css: css_snippet(animation, easing),
            js: js_snippet(animation, easing),
            gsap: gsap_snippet(animation, easing),
        },
    }
}

fn describe(animation: &ObservedAnimation) -> String {
    let properties = animation
        .properties
        .iter()
        .map(|p| p.property.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} animates {properties} over {}ms {}",
        animation.element,
        animation.duration_ms,
        animation.trigger.display_name()
    )
}

// ── Snippets ───────────────────────────────────────────────────────

fn css_snippet(animation: &ObservedAnimation, easing: &str) -> String {
    let name = sanitize_animation_name(&animation.element);
    let mut css = format!("@keyframes {name} {{\n  from {{\n");
    for change in &animation.properties {
        let _ = writeln!(css, "    {}: {};", change.property, change.from);
    }
    css.push_str("  }\n  to {\n");
    for change in &animation.properties {
        let _ = writeln!(css, "    {}: {};", change.property, change.to);
    }
    css.push_str("  }\n}\n\n");

    let _ = write!(
        css,
        "/* Apply the animation */\n{} {{\n  animation: {name} {}ms {easing};\n}}\n",
        animation.element, animation.duration_ms
    );
    css
}

fn js_snippet(animation: &ObservedAnimation, easing: &str) -> String {
    let element = &animation.element;
    let mut js = format!(
        "// Animation using the Web Animations API\n\
         const element = document.querySelector('{element}');\n\n"
    );

    let from = keyframe_object(&animation.properties, |c| &c.from);
    let to = keyframe_object(&animation.properties, |c| &c.to);
    let _ = write!(js, "const keyframes = [\n  {from},\n  {to}\n];\n\n");
    let _ = write!(
        js,
        "const options = {{\n  duration: {},\n  easing: '{easing}',\n  fill: 'forwards'\n}};\n\n",
        animation.duration_ms
    );

    match animation.trigger {
        Trigger::Scroll => js.push_str(
            "// Scroll trigger using IntersectionObserver\n\
             const observer = new IntersectionObserver((entries) => {\n\
             \x20 entries.forEach(entry => {\n\
             \x20   if (entry.isIntersecting) {\n\
             \x20     entry.target.animate(keyframes, options);\n\
             \x20     observer.unobserve(entry.target);\n\
             \x20   }\n\
             \x20 });\n\
             }, { threshold: 0.1 });\n\n\
             observer.observe(element);\n",
        ),
        Trigger::Hover => js.push_str(
            "// Hover listener\n\
             element.addEventListener('mouseenter', () => {\n\
             \x20 element.animate(keyframes, options);\n\
             });\n",
        ),
        Trigger::Load => js.push_str(
            "// Run immediately on page load\n\
             element.animate(keyframes, options);\n",
        ),
        Trigger::Other => {}
    }
    js
}

/// A pretty-printed JS object literal, indented to sit inside an array.
///
/// Keys keep first-seen order; a repeated property keeps its last value.
fn keyframe_object<'a>(
    changes: &'a [PropertyChange],
    value_of: impl Fn(&'a PropertyChange) -> &'a String,
) -> String {
    let mut entries: Vec<(&str, &str)> = Vec::new();
    for change in changes {
        let value = value_of(change).as_str();
        match entries.iter_mut().find(|(key, _)| *key == change.property) {
            Some(entry) => entry.1 = value,
            None => entries.push((change.property.as_str(), value)),
        }
    }
    if entries.is_empty() {
        return "{}".to_string();
    }

    let body = entries
        .iter()
        .map(|(key, value)| format!("    {}: {}", json_string(key), json_string(value)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{{\n{body}\n  }}")
}

fn json_string(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

fn gsap_snippet(animation: &ObservedAnimation, easing: &str) -> String {
    let element = &animation.element;
    let ease = to_gsap_ease(easing);
    #[allow(clippy::cast_precision_loss)]
    let seconds = animation.duration_ms as f64 / 1000.0;

    let mut gsap = String::from(
        "// Animation using GSAP\n// Install: npm install gsap\nimport gsap from 'gsap';\n",
    );
    let targets = |indent: &str| {
        animation
            .properties
            .iter()
            .map(|c| format!("{indent}{}: '{}',\n", c.property, c.to))
            .collect::<String>()
    };

    match animation.trigger {
        Trigger::Scroll => {
            let _ = write!(
                gsap,
                "import ScrollTrigger from 'gsap/ScrollTrigger';\n\
                 gsap.registerPlugin(ScrollTrigger);\n\n\
                 gsap.to('{element}', {{\n{}\
                 \x20 duration: {seconds},\n\
                 \x20 ease: '{ease}',\n\
                 \x20 scrollTrigger: {{\n\
                 \x20   trigger: '{element}',\n\
                 \x20   start: 'top 80%',\n\
                 \x20   toggleActions: 'play none none none'\n\
                 \x20 }}\n\
                 }});\n",
                targets("  ")
            );
        }
        Trigger::Hover => {
            let _ = write!(
                gsap,
                "\nconst element = document.querySelector('{element}');\n\n\
                 element.addEventListener('mouseenter', () => {{\n\
                 \x20 gsap.to(element, {{\n{}\
                 \x20   duration: {seconds},\n\
                 \x20   ease: '{ease}'\n\
                 \x20 }});\n\
                 }});\n",
                targets("    ")
            );
        }
        Trigger::Load => {
            let _ = write!(
                gsap,
                "\ngsap.to('{element}', {{\n{}\
                 \x20 duration: {seconds},\n\
                 \x20 ease: '{ease}'\n\
                 }});\n",
                targets("  ")
            );
        }
        Trigger::Other => {}
    }
    gsap
}

/// Map a CSS easing keyword to its closest GSAP ease.
#[must_use]
pub fn to_gsap_ease(css_easing: &str) -> &'static str {
    match css_easing {
        "ease-in" => "power1.in",
        "ease-out" => "power1.out",
        "linear" => "none",
        _ => "power1.inOut",
    }
}

/// Turn a selector into a keyframes identifier: `.hero > h1` becomes
/// `hero-h1-animation`.
#[must_use]
pub fn sanitize_animation_name(selector: &str) -> String {
    let mut name = String::with_capacity(selector.len() + 10);
    for c in selector.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' };
        if c == '-' && (name.is_empty() || name.ends_with('-')) {
            continue;
        }
        name.push(c.to_ascii_lowercase());
    }
    let trimmed = name.trim_end_matches('-');
    format!("{trimmed}-animation")
}

// ── Markdown ───────────────────────────────────────────────────────

/// Render a report as a standalone Markdown document.
#[must_use]
pub fn render_markdown(report: &MotionReport) -> String {
    let mut md = format!("# {}\n\n## Description\n\n{}\n\n", report.id, report.description);

    let _ = write!(
        md,
        "## Animation\n\n\
         - **Element**: `{}`\n\
         - **Trigger**: {}\n\
         - **Duration**: {}ms\n\
         - **Easing**: {}\n\n",
        report.element, report.trigger, report.duration_ms, report.easing
    );

    md.push_str("## Property changes\n\n");
    for change in &report.properties {
        let _ = writeln!(
            md,
            "- **{}**: `{}` → `{}`",
            change.property, change.from, change.to
        );
    }
    md.push('\n');

    md.push_str("## Reimplementation\n\n");
    let _ = write!(md, "### CSS @keyframes\n\n```css\n{}```\n\n", report.code_snippets.css);
    let _ = write!(
        md,
        "### Web Animations API (JavaScript)\n\n```javascript\n{}```\n\n",
        report.code_snippets.js
    );
    if !report.code_snippets.gsap.is_empty() {
        let _ = write!(
            md,
            "### GSAP (optional)\n\n```javascript\n{}```\n\n",
            report.code_snippets.gsap
        );
    }

    let _ = write!(
        md,
        "## Usage\n\n\
         1. Copy one of the snippets above into your project.\n\
         2. Replace the selector (`{}`) with the one used in your markup.\n\
         3. Adjust duration and easing as needed.\n\
         4. Put CSS snippets in a stylesheet and JavaScript snippets in a script.\n\n\
         ---\n\n\
         *Generated by Swatch*\n",
        report.element
    );
    md
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn observed(trigger: Trigger) -> ObservedAnimation {
        ObservedAnimation {
            id: None,
            element: ".hero h1".to_string(),
            trigger,
            duration_ms: 600,
            easing: Some("ease-out".to_string()),
            properties: vec![
                PropertyChange {
                    property: "opacity".into(),
                    from: "0".into(),
                    to: "1".into(),
                },
                PropertyChange {
                    property: "transform".into(),
                    from: "translateY(20px)".into(),
                    to: "none".into(),
                },
            ],
        }
    }

    #[test]
    fn ids_and_easing_default() {
        let mut bare = observed(Trigger::Load);
        bare.easing = None;
        let mut named = observed(Trigger::Load);
        named.id = Some("hero-fade".into());

        let reports = generate_reports(&[bare, named]);
        assert_eq!(reports[0].id, "motion-1");
        assert_eq!(reports[0].easing, "ease");
        assert_eq!(reports[1].id, "hero-fade");
        assert_eq!(reports[1].easing, "ease-out");
    }

    #[test]
    fn description_sentence() {
        let report = &generate_reports(&[observed(Trigger::Scroll)])[0];
        assert_eq!(
            report.description,
            ".hero h1 animates opacity, transform over 600ms on scroll"
        );
    }

    #[test]
    fn css_snippet_layout() {
        let report = &generate_reports(&[observed(Trigger::Load)])[0];
        assert_eq!(
            report.code_snippets.css,
            "@keyframes hero-h1-animation {\n\
             \x20 from {\n\
             \x20   opacity: 0;\n\
             \x20   transform: translateY(20px);\n\
             \x20 }\n\
             \x20 to {\n\
             \x20   opacity: 1;\n\
             \x20   transform: none;\n\
             \x20 }\n\
             }\n\n\
             /* Apply the animation */\n\
             .hero h1 {\n\
             \x20 animation: hero-h1-animation 600ms ease-out;\n\
             }\n"
        );
    }

    #[test]
    fn js_snippet_keyframes_and_scroll_observer() {
        let js = generate_reports(&[observed(Trigger::Scroll)])[0]
            .code_snippets
            .js
            .clone();
        assert!(js.contains("document.querySelector('.hero h1')"));
        assert!(js.contains(
            "const keyframes = [\n  {\n    \"opacity\": \"0\",\n    \"transform\": \"translateY(20px)\"\n  },\n"
        ));
        assert!(js.contains("  duration: 600,\n  easing: 'ease-out',\n  fill: 'forwards'\n"));
        assert!(js.contains("{ threshold: 0.1 }"));
        assert!(!js.contains("mouseenter"));
    }

    #[rstest]
    #[case(Trigger::Hover, "addEventListener('mouseenter'")]
    #[case(Trigger::Load, "// Run immediately on page load\nelement.animate(keyframes, options);\n")]
    fn js_trigger_wiring(#[case] trigger: Trigger, #[case] expected: &str) {
        let report = &generate_reports(&[observed(trigger)])[0];
        assert!(report.code_snippets.js.contains(expected), "{}", report.code_snippets.js);
    }

    #[test]
    fn other_trigger_adds_no_wiring() {
        let report = &generate_reports(&[observed(Trigger::Other)])[0];
        assert!(report.code_snippets.js.ends_with("fill: 'forwards'\n};\n\n"));
        assert_eq!(
            report.code_snippets.gsap,
            "// Animation using GSAP\n// Install: npm install gsap\nimport gsap from 'gsap';\n"
        );
    }

    #[test]
    fn gsap_scroll_trigger() {
        let gsap = generate_reports(&[observed(Trigger::Scroll)])[0]
            .code_snippets
            .gsap
            .clone();
        assert!(gsap.contains("gsap.registerPlugin(ScrollTrigger);"));
        assert!(gsap.contains("gsap.to('.hero h1', {\n  opacity: '1',\n  transform: 'none',\n"));
        assert!(gsap.contains("  duration: 0.6,\n  ease: 'power1.out',\n"));
        assert!(gsap.contains("start: 'top 80%'"));
    }

    #[test]
    fn gsap_whole_second_duration() {
        let mut animation = observed(Trigger::Load);
        animation.duration_ms = 1000;
        let report = &generate_reports(&[animation])[0];
        assert!(report.code_snippets.gsap.contains("  duration: 1,\n"));
    }

    #[rstest]
    #[case("ease", "power1.inOut")]
    #[case("ease-in", "power1.in")]
    #[case("ease-out", "power1.out")]
    #[case("ease-in-out", "power1.inOut")]
    #[case("linear", "none")]
    #[case("cubic-bezier(0.2, 0.8, 0.2, 1)", "power1.inOut")]
    fn gsap_ease_mapping(#[case] css: &str, #[case] gsap: &str) {
        assert_eq!(to_gsap_ease(css), gsap);
    }

    #[rstest]
    #[case(".hero h1", "hero-h1-animation")]
    #[case("#Main > .Card", "main-card-animation")]
    #[case("button:hover", "button-hover-animation")]
    #[case("--x--", "x-animation")]
    fn selector_sanitizing(#[case] selector: &str, #[case] expected: &str) {
        assert_eq!(sanitize_animation_name(selector), expected);
    }

    #[test]
    fn repeated_property_keeps_last_value() {
        let mut animation = observed(Trigger::Load);
        animation.properties.push(PropertyChange {
            property: "opacity".into(),
            from: "0.5".into(),
            to: "0.9".into(),
        });
        let js = &generate_reports(&[animation])[0].code_snippets.js;
        assert!(js.contains("\"opacity\": \"0.9\",\n    \"transform\": \"none\""));
    }

    #[test]
    fn markdown_sections() {
        let report = &generate_reports(&[observed(Trigger::Hover)])[0];
        let md = render_markdown(report);

        assert!(md.starts_with("# motion-1\n\n## Description\n\n"));
        assert!(md.contains("- **Element**: `.hero h1`\n- **Trigger**: hover\n"));
        assert!(md.contains("- **opacity**: `0` → `1`\n"));
        assert!(md.contains("```css\n@keyframes hero-h1-animation"));
        assert!(md.contains("### GSAP (optional)"));
        assert!(md.ends_with("*Generated by Swatch*\n"));
    }
}
