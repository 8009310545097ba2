use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use swatch_config::SourceConfig;
use swatch_core::{AnalysisMetadata, AnalysisResult};
use swatch_parser::TokenExtractor;
use swatch_source::{CollectOptions, FileFetcher, collect_from_html, file_base, warnings_for};

/// Read `path` and extract its tokens.
///
/// HTML pages have their inline and linked stylesheets collected first;
/// anything else is treated as CSS.
pub fn analyze_path(path: &Path, source: &SourceConfig) -> anyhow::Result<AnalysisResult> {
    let started = Instant::now();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut metadata = AnalysisMetadata::local(path.display().to_string());
    let css = if is_html(path) {
        let base = file_base(path)?;
        let options = CollectOptions {
            annotate_sources: source.annotate_sources,
            max_stylesheets: source.max_stylesheets,
        };
        let payload = collect_from_html(&text, &base, &FileFetcher, options);
        payload.summary.apply_to(&mut metadata);
        metadata.analyzed_source = base.to_string();
        metadata.warnings = warnings_for(&payload.summary);
        payload.content
    } else {
        text
    };

    let tokens = TokenExtractor::new().extract(css.as_str());
    metadata.duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    for warning in &metadata.warnings {
        tracing::warn!(kind = %warning.kind, details = %warning.details, "{}", warning.message);
    }

    Ok(AnalysisResult {
        tokens,
        metadata,
        motion_reports: None,
    })
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn css_files_are_extracted_directly() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("site.css");
        fs::write(&path, ".a{color:#ABCDEF;padding:4px}").expect("write css");

        let analysis = analyze_path(&path, &SourceConfig::default()).expect("analysis");
        assert_eq!(analysis.tokens.colors, vec!["#ABCDEF"]);
        assert_eq!(analysis.tokens.spacing, vec!["4px"]);
        assert_eq!(analysis.metadata.css_files_found, 0);
        assert!(analysis.metadata.warnings.is_empty());
    }

    #[test]
    fn html_pages_collect_linked_stylesheets() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("main.css"), ".b{margin:12px}").expect("write css");
        let page = dir.path().join("index.HTML");
        fs::write(
            &page,
            r#"<link rel="stylesheet" href="main.css"><link rel="stylesheet" href="gone.css"><style>.a{color:#fff}</style>"#,
        )
        .expect("write html");

        let analysis = analyze_path(&page, &SourceConfig::default()).expect("analysis");
        assert_eq!(analysis.tokens.colors, vec!["#FFFFFF"]);
        assert_eq!(analysis.tokens.spacing, vec!["12px"]);
        assert_eq!(analysis.metadata.css_files_found, 2);
        assert_eq!(analysis.metadata.files_failed, 1);
        assert!(analysis.metadata.analyzed_source.starts_with("file://"));
        assert_eq!(analysis.metadata.warnings.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let error = analyze_path(Path::new("/nonexistent/site.css"), &SourceConfig::default())
            .unwrap_err();
        assert!(error.to_string().contains("failed to read"));
    }
}
