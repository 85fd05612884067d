//! User configuration for bookbits (stored in ~/.config/bookbits/config.toml)
//!
//! Every field is optional; anything left out falls back to the built-in
//! Apple Books locations and the Markdown export format.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BookbitsError, Result};
use crate::export::ExportFormat;
use crate::locate::{ANNOTATION_DB_PATTERN, LIBRARY_DB_PATTERN};

const CONFIG_DIR: &str = "bookbits";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "BOOKBITS_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob pattern for the BKLibrary catalog store
    #[serde(default)]
    pub library_pattern: Option<String>,
    /// Glob pattern for the AEAnnotation store
    #[serde(default)]
    pub annotation_pattern: Option<String>,
    /// Export format used when none is chosen explicitly
    #[serde(default)]
    pub default_format: Option<ExportFormat>,
}

impl Config {
    /// Location of the config file, honoring `BOOKBITS_CONFIG_DIR`
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    BookbitsError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user config, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| BookbitsError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| BookbitsError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn library_pattern(&self) -> &str {
        self.library_pattern.as_deref().unwrap_or(LIBRARY_DB_PATTERN)
    }

    pub fn annotation_pattern(&self) -> &str {
        self.annotation_pattern
            .as_deref()
            .unwrap_or(ANNOTATION_DB_PATTERN)
    }

    pub fn default_format(&self) -> ExportFormat {
        self.default_format.unwrap_or_default()
    }
}
