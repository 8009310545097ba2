//! # swatch-config
//!
//! Layered configuration loading for Swatch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SWATCH_*` prefix, `__` as separator)
//! 2. Project-level `.swatch/config.toml`
//! 3. User-level `~/.config/swatch/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `SWATCH_EXPORT__OUT_DIR` -> `export.out_dir`,
//! `SWATCH_SOURCE__MAX_STYLESHEETS` -> `source.max_stylesheets`, etc.
//!
//! ```no_run
//! use swatch_config::SwatchConfig;
//!
//! let config = SwatchConfig::load_with_dotenv().expect("config");
//! println!("kit goes to {}", config.export.out_dir);
//! ```

mod error;
mod export;
mod general;
mod source;

pub use error::ConfigError;
pub use export::{ExportConfig, TOKEN_FORMATS};
pub use general::{GeneralConfig, OUTPUT_FORMATS};
pub use source::SourceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SwatchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl SwatchConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the current directory, then [`Self::load`].
    ///
    /// Variables already present in the process environment are not replaced.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        report_dotenv(dotenvy::dotenv());
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".swatch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SWATCH_").split("__"))
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()?;
        self.source.validate()?;
        self.export.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("swatch").join("config.toml"))
    }
}

/// A missing `.env` is fine; anything else is logged and skipped.
/// Returns `true` when a problem was reported.
fn report_dotenv<T>(result: dotenvy::Result<T>) -> bool {
    match result {
        Ok(_) => false,
        Err(error) if error.not_found() => false,
        Err(error) => {
            tracing::warn!(%error, "ignoring unreadable .env file");
            true
        }
    }
}
