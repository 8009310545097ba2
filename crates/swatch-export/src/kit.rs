//! The downloadable starter kit: every generated file keyed by relative path.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use swatch_core::{AnalysisMetadata, MotionReport, TokenSet};

use crate::animation_css::build_animation_css;
use crate::builders::{build_css, build_json, build_scss};
use crate::error::ExportError;
use crate::motion::render_markdown;
use crate::naming::{NamedTokens, TokenNames, UniqueNames};
use crate::readme::{KitCounts, build_readme};

/// A token stylesheet format emitted under `design_system/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
    Css,
    Scss,
    Json,
}

impl TokenFormat {
    pub const ALL: [Self; 3] = [Self::Css, Self::Scss, Self::Json];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for TokenFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "json" => Ok(Self::Json),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// What goes into a kit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Emit tokens without a user-chosen name under a generated one.
    pub include_unnamed: bool,
    pub formats: Vec<TokenFormat>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_unnamed: true,
            formats: TokenFormat::ALL.to_vec(),
        }
    }
}

/// Generated files keyed by `/`-separated path relative to the kit root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarterKit {
    files: BTreeMap<String, String>,
}

impl StarterKit {
    /// Assemble the kit.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] if the JSON token file cannot be rendered.
    pub fn build(
        tokens: &TokenSet,
        metadata: &AnalysisMetadata,
        names: &TokenNames,
        motion_reports: &[MotionReport],
        options: &ExportOptions,
    ) -> Result<Self, ExportError> {
        let named = NamedTokens::resolve(tokens, names, options.include_unnamed);
        let mut files = BTreeMap::new();

        for format in &options.formats {
            let content = match format {
                TokenFormat::Css => build_css(&named),
                TokenFormat::Scss => build_scss(&named),
                TokenFormat::Json => build_json(&named)?,
            };
            files.insert(format!("design_system/tokens.{}", format.extension()), content);
        }

        let mut stems = UniqueNames::default();
        for (file_name, css) in build_animation_css(&named.animations) {
            let stem = file_name.strip_suffix(".css").unwrap_or(&file_name);
            let stem = stems.claim(file_stem(stem));
            files.insert(format!("motion_library/css/{stem}.css"), css);
        }

        let mut stems = UniqueNames::default();
        for report in motion_reports {
            let stem = stems.claim(file_stem(&report.id));
            files.insert(
                format!("motion_library/motion_reports/{stem}.md"),
                render_markdown(report),
            );
        }

        let counts = KitCounts {
            colors: named.colors.len(),
            fonts: named.fonts.len(),
            spacing: named.spacing.len(),
            effects: named.effects.len(),
            animations: named.animations.len(),
            motion_reports: motion_reports.len(),
        };
        files.insert("README.md".to_string(), build_readme(metadata, counts));

        tracing::debug!(files = files.len(), "built starter kit");
        Ok(Self { files })
    }

    #[must_use]
    pub const fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every file below `dir`, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] naming the first path that could not be written.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        let mut written = Vec::with_capacity(self.files.len());
        for (relative, content) in &self.files {
            let path = relative.split('/').fold(dir.to_path_buf(), |p, part| p.join(part));
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, content).map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }
        tracing::info!(dir = %dir.display(), files = written.len(), "wrote starter kit");
        Ok(written)
    }
}

/// Keep user-chosen names from escaping their directory.
fn file_stem(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    match cleaned.trim_start_matches('.') {
        "" => "unnamed".to_string(),
        rest => rest.to_string(),
    }
}
