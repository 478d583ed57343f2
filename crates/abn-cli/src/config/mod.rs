//! Configuration management for abn-check
//!
//! Settings live in `~/.abn-check/config.toml`, created with defaults on first
//! run. `ABN_CHECK_FOLDER` moves the whole application folder.

use core::result::Result as CoreResult;
use std::env;
use std::fs;
use std::io::Error as IoError;
use std::path::{Path, PathBuf};
use std::time::Duration;

use abn_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use abn_proxy::{DEFAULT_LISTEN, DEFAULT_UPSTREAM};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::de::Error as TomlError;
use toml::ser::Error as TomlSerError;

use crate::ui::theme::Theme;

/// Env var that overrides the application folder
pub const ENV_APP_FOLDER: &str = "ABN_CHECK_FOLDER";

const CONFIG_FILE: &str = "config.toml";
const CONFIG_HEADER: &str = "# abn-check configuration file\n\
                             # This file is automatically generated on first run\n\
                             # Edit this file to customize your settings\n\n";

/// Result type for configuration operations.
pub type Result<T> = CoreResult<T, ConfigError>;

/// Errors raised while locating, reading or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `ABN_CHECK_FOLDER` nor a home directory is available.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Reading or writing the file failed.
    #[error("Config IO error at {path}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        source: IoError,
    },

    /// The file is not valid TOML for [`AppConfig`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] TomlError),

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] TomlSerError),
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Lookup service settings
    pub service: ServiceConfig,
    /// Terminal form settings
    pub ui: UiConfig,
    /// Development proxy settings
    pub proxy: ProxyConfig,
}

/// Where and how the lookup services are reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Origin that serves `/microsvc/...`; point it at a local proxy if needed
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Terminal form settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Colour theme
    pub theme: Theme,
}

/// Development proxy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Address the proxy listens on
    pub listen: String,
    /// Origin requests under `/microsvc` are forwarded to
    pub upstream: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_owned(),
            upstream: DEFAULT_UPSTREAM.to_owned(),
        }
    }
}

impl AppConfig {
    /// Application folder: `ABN_CHECK_FOLDER` if set, otherwise `~/.abn-check`
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn app_dir() -> Result<PathBuf> {
        if let Ok(folder) = env::var(ENV_APP_FOLDER) {
            return Ok(PathBuf::from(folder));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".abn-check"))
    }

    /// Default config file path (`{app_dir}/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join(CONFIG_FILE))
    }

    /// Load config from `path`, writing defaults there first if it is missing
    ///
    /// # Errors
    /// Returns an error if the config cannot be read, parsed or created
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            let config = Self::default();
            config.save_to_file(path)?;
            Ok(config)
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_owned(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, format!("{CONFIG_HEADER}{contents}")).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })
    }

    /// Request timeout for the lookup client. Zero falls back to the default.
    pub fn timeout(&self) -> Duration {
        if self.service.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.service.timeout_secs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.proxy.listen, DEFAULT_LISTEN);
        assert_eq!(config.proxy.upstream, DEFAULT_UPSTREAM);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("nested").join(CONFIG_FILE);

        let config = AppConfig::load_or_create(&path).expect("Failed to create config");

        assert_eq!(config, AppConfig::default());
        let written = fs::read_to_string(&path).expect("Config file should exist");
        assert!(written.starts_with("# abn-check configuration file"));
        assert!(written.contains("[service]"));
        assert_eq!(AppConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[service]\nbase_url = \"http://localhost:3000\"\n\n[ui]\ntheme = \"Nord\"\n",
        )
        .unwrap();

        let config = AppConfig::load_or_create(&path).unwrap();

        assert_eq!(config.service.base_url, "http://localhost:3000");
        assert_eq!(config.service.timeout_secs, DEFAULT_TIMEOUT.as_secs());
        assert_eq!(config.ui.theme, Theme::Nord);
        assert_eq!(config.proxy, ProxyConfig::default());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[service\nbase_url = ").unwrap();

        let error = AppConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let mut config = AppConfig::default();
        config.service.timeout_secs = 0;
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        config.service.timeout_secs = 5;
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}
