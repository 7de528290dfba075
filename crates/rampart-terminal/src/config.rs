//! Terminal configuration file.
//!
//! ```toml
//! [app]
//! id_assignment = "monotonic"
//!
//! [ui]
//! color = true
//! show_menu = true
//!
//! [logging]
//! level = "info"
//! ```

use rampart_app::AppConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for [`TerminalConfig`]
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be written as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Everything the `rampart` binary reads from its config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Core settings
    pub app: AppConfig,
    /// Output toggles
    pub ui: UiConfig,
    /// Log level
    pub logging: LoggingConfig,
}

/// Cosmetic output toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// ANSI emphasis on headings
    pub color: bool,
    /// Print the sidebar after each navigation in the shell
    pub show_menu: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_menu: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when neither `--verbose` nor `RUST_LOG` is set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl TerminalConfig {
    /// `~/.rampart/config.toml`, or a relative `.rampart/config.toml` when
    /// no home directory is known.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(".rampart")
            .join("config.toml")
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_app::IdAssignment;

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = TerminalConfig::parse("[app]\nid_assignment = \"registry-size\"\n").unwrap();
        assert_eq!(config.app.id_assignment, IdAssignment::RegistrySize);
        assert_eq!(config.ui, UiConfig::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = TerminalConfig::default();
        config.ui.color = false;
        let text = config.to_toml().unwrap();
        assert_eq!(TerminalConfig::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(TerminalConfig::parse("[app]\nid_assignment = \"random\"\n").is_err());
    }

    #[test]
    fn test_default_path_ends_in_rampart_dir() {
        let path = TerminalConfig::default_path();
        assert!(path.ends_with(".rampart/config.toml"));
    }
}
