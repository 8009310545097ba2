//! Starter kit README.

use std::fmt::Write as _;

use swatch_core::AnalysisMetadata;

/// How many entries of each kind the kit contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KitCounts {
    pub colors: usize,
    pub fonts: usize,
    pub spacing: usize,
    pub effects: usize,
    pub animations: usize,
    pub motion_reports: usize,
}

/// Render `README.md`: source, token summary, file layout, and usage.
#[must_use]
pub fn build_readme(metadata: &AnalysisMetadata, counts: KitCounts) -> String {
    let mut readme = String::from("# Design System Starter Kit\n\nGenerated by Swatch\n\n");

    let source = if metadata.analyzed_source.is_empty() {
        "N/A"
    } else {
        metadata.analyzed_source.as_str()
    };
    let _ = write!(
        readme,
        "## Source\n- **Source**: {source}\n- **Generated**: {}\n\n",
        metadata.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );

    readme.push_str(
        "## Contents\n\nThis starter kit contains design tokens extracted from the analyzed page.\n\n",
    );
    readme.push_str("### Token Summary\n");
    for (label, count) in [
        ("Colors", counts.colors),
        ("Typography", counts.fonts),
        ("Spacing", counts.spacing),
        ("Effects", counts.effects),
        ("Animations", counts.animations),
    ] {
        let _ = writeln!(readme, "- **{label}**: {count} tokens");
    }
    if counts.motion_reports > 0 {
        let _ = writeln!(readme, "- **Motion Reports**: {} reports", counts.motion_reports);
    }

    readme.push_str(
        "\n## File Structure\n\n```\n\
         design_system/\n\
         ├── tokens.css          # CSS custom properties\n\
         ├── tokens.scss         # SCSS variables\n\
         └── tokens.json         # JSON format\n",
    );
    if counts.animations > 0 || counts.motion_reports > 0 {
        readme.push_str("\nmotion_library/\n");
        if counts.animations > 0 {
            readme.push_str("├── css/\n│   └── [animation files]\n");
        }
        if counts.motion_reports > 0 {
            readme.push_str("└── motion_reports/\n    └── [motion report markdown files]\n");
        }
    }
    readme.push_str("```\n\n");

    readme.push_str(USAGE);
    readme
}

const USAGE: &str = r"## Usage

### CSS
```css
@import './design_system/tokens.css';

.my-element {
  color: var(--primary-color);
  font-family: var(--heading-font-family);
}
```

### SCSS
```scss
@import './design_system/tokens';

.my-element {
  color: $primary-color;
  font-family: $heading-font-family;
}
```

### JavaScript/JSON
```javascript
import tokens from './design_system/tokens.json';

const primaryColor = tokens.colors.primary;
```

## Customization

These tokens are a starting point based on the analyzed page. Rename, prune, and extend them to fit your project.

---

Generated by Swatch
";

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(animations: usize, motion_reports: usize) -> KitCounts {
        KitCounts {
            colors: 4,
            fonts: 2,
            spacing: 3,
            effects: 1,
            animations,
            motion_reports,
        }
    }

    #[test]
    fn summary_lists_every_category() {
        let metadata = AnalysisMetadata::local("https://example.com/");
        let readme = build_readme(&metadata, counts(0, 0));

        assert!(readme.starts_with("# Design System Starter Kit\n"));
        assert!(readme.contains("- **Source**: https://example.com/\n"));
        assert!(readme.contains("- **Colors**: 4 tokens\n"));
        assert!(readme.contains("- **Typography**: 2 tokens\n"));
        assert!(readme.contains("- **Animations**: 0 tokens\n"));
        assert!(!readme.contains("Motion Reports"));
        assert!(!readme.contains("motion_library/"));
        assert!(readme.ends_with("Generated by Swatch\n"));
    }

    #[test]
    fn motion_library_tree_follows_contents() {
        let metadata = AnalysisMetadata::local("page.html");

        let animations_only = build_readme(&metadata, counts(2, 0));
        assert!(animations_only.contains("motion_library/\n├── css/"));
        assert!(!animations_only.contains("motion_reports/"));

        let reports_only = build_readme(&metadata, counts(0, 3));
        assert!(reports_only.contains("- **Motion Reports**: 3 reports\n"));
        assert!(reports_only.contains("motion_library/\n└── motion_reports/"));
    }

    #[test]
    fn missing_source_reads_not_available() {
        let metadata = AnalysisMetadata::local("");
        assert!(build_readme(&metadata, KitCounts::default()).contains("- **Source**: N/A\n"));
    }
}
