//! Stylesheet collection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_annotate_sources() -> bool {
    true
}

const fn default_max_stylesheets() -> usize {
    50
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Precede each merged stylesheet with a comment naming its origin.
    #[serde(default = "default_annotate_sources")]
    pub annotate_sources: bool,

    /// Linked stylesheets beyond this many are ignored.
    #[serde(default = "default_max_stylesheets")]
    pub max_stylesheets: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            annotate_sources: default_annotate_sources(),
            max_stylesheets: default_max_stylesheets(),
        }
    }
}

impl SourceConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stylesheets == 0 {
            return Err(ConfigError::invalid(
                "source.max_stylesheets",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
