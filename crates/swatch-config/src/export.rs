//! Starter kit export settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Token file formats a starter kit can contain.
pub const TOKEN_FORMATS: [&str; 3] = ["css", "scss", "json"];

const fn default_include_unnamed() -> bool {
    true
}

fn default_out_dir() -> String {
    "starter-kit".to_string()
}

fn default_formats() -> Vec<String> {
    TOKEN_FORMATS.iter().map(|f| (*f).to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Give unnamed tokens a generated name instead of leaving them out.
    #[serde(default = "default_include_unnamed")]
    pub include_unnamed: bool,

    /// Directory the kit is written to when `--out` is not given.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Token files to emit under `design_system/`.
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_unnamed: default_include_unnamed(),
            out_dir: default_out_dir(),
            formats: default_formats(),
        }
    }
}

impl ExportConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.out_dir.trim().is_empty() {
            return Err(ConfigError::invalid("export.out_dir", "must not be empty"));
        }
        if self.formats.is_empty() {
            return Err(ConfigError::invalid(
                "export.formats",
                "at least one format is required",
            ));
        }
        if let Some(unknown) = self
            .formats
            .iter()
            .find(|f| !TOKEN_FORMATS.contains(&f.to_ascii_lowercase().as_str()))
        {
            return Err(ConfigError::invalid(
                "export.formats",
                format!("'{unknown}' is not one of {}", TOKEN_FORMATS.join(", ")),
            ));
        }
        Ok(())
    }
}
