//!
//! Configuration file loading for htmlrep.
//!
//! A config file is optional. When no path is given, `.htmlrep.toml` or
//! `htmlrep.toml` is searched for from the starting directory upwards,
//! stopping at the first repository root (a directory containing `.git`).
//!
//! ```toml
//! [reports]
//! tags = true
//! attribute-links = true
//! text-links = false
//! ```

use crate::report::ReportSelection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File names recognised during discovery, in order of preference
pub const CONFIG_FILE_NAMES: &[&str] = &[".htmlrep.toml", "htmlrep.toml"];

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// Which reports are printed
    pub reports: ReportsConfig,
}

/// The `[reports]` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ReportsConfig {
    /// Print the tags and attributes report
    pub tags: bool,
    /// Print links found in attributes
    pub attribute_links: bool,
    /// Print probable links found in text content
    pub text_links: bool,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            tags: true,
            attribute_links: true,
            text_links: true,
        }
    }
}

impl From<ReportsConfig> for ReportSelection {
    fn from(reports: ReportsConfig) -> Self {
        Self {
            tags: reports.tags,
            attribute_links: reports.attribute_links,
            text_links: reports.text_links,
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load a configuration file from an explicit path
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::NotFound { path: display });
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: display.clone(),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::ParseError(msg) => ConfigError::ParseError(format!("{display}: {msg}")),
            other => other,
        })
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit `config_path` always wins. Otherwise, unless `isolated` is
    /// set, the nearest config file above `start_dir` (or the current
    /// directory) is loaded. With no file, built-in defaults apply.
    pub fn load_with_discovery(
        config_path: Option<&str>,
        start_dir: Option<&Path>,
        isolated: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            log::debug!("Loading config from explicit path {path}");
            return Self::load_from_file(Path::new(path));
        }
        if isolated {
            log::debug!("Isolated mode: using default config");
            return Ok(Self::default());
        }

        let start = match start_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().map_err(|source| ConfigError::IoError {
                source,
                path: ".".to_string(),
            })?,
        };

        match discover_config_file(&start) {
            Some(found) => {
                log::debug!("Discovered config file {}", found.display());
                Self::load_from_file(&found)
            }
            None => {
                log::debug!("No config file found above {}", start.display());
                Ok(Self::default())
            }
        }
    }
}

/// Find the nearest config file at or above `start`.
///
/// The search does not leave the repository containing `start`.
pub fn discover_config_file(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}
