//! Local configuration management.
//!
//! Config is stored at `~/.config/ajimemo/config.toml` and contains:
//! - API base URL and request timeout
//! - Default uid/namespace for memory commands
//!
//! The bearer token lives next to it in `auth_token`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::{ClientOptions, DEFAULT_API_URL, DEFAULT_TIMEOUT};

const CONFIG_DIR: &str = "ajimemo";
const CONFIG_FILE: &str = "config.toml";
const TOKEN_FILE: &str = "auth_token";

/// Local configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Base URL of the AjiMemo API (default: http://localhost:8000).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// uid used by `memory` commands when none is given.
    #[serde(default)]
    pub default_uid: Option<String>,

    /// Namespace used by `memory` commands when none is given.
    #[serde(default)]
    pub default_namespace: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            default_uid: None,
            default_namespace: None,
        }
    }
}

impl LocalConfig {
    /// Load config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;
        // A zero reqwest timeout fails every request immediately.
        if config.timeout_secs == 0 {
            anyhow::bail!(
                "Invalid config file {}: timeout_secs must be at least 1",
                path.display()
            );
        }
        Ok(config)
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")
    }

    /// Client settings, with `api_url_override` (flag or env) taking
    /// precedence over the file.
    pub fn client_options(&self, api_url_override: Option<&str>) -> ClientOptions {
        ClientOptions {
            base_url: api_url_override
                .filter(|u| !u.is_empty())
                .unwrap_or(&self.api_url)
                .to_string(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Get the path of the stored auth token.
    pub fn token_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(TOKEN_FILE))
    }

    /// Get the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join(CONFIG_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = LocalConfig::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.default_uid.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: LocalConfig = toml::from_str(r#"default_uid = "user-1""#).unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.default_uid.as_deref(), Some("user-1"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ajimemo").join("config.toml");

        let mut config = LocalConfig::default();
        config.api_url = "https://api.ajimemo.com".to_string();
        config.default_namespace = Some("work".to_string());
        config.save_to(&path).unwrap();

        let loaded = LocalConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded = LocalConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(loaded, LocalConfig::default());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = 0\n").unwrap();

        let err = LocalConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("timeout_secs must be at least 1"));

        std::fs::write(&path, "timeout_secs = 1\n").unwrap();
        let loaded = LocalConfig::load_from(&path).unwrap();
        assert_eq!(loaded.client_options(None).timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_client_options_override() {
        let config = LocalConfig::default();

        let opts = config.client_options(Some("https://api.ajimemo.com"));
        assert_eq!(opts.base_url, "https://api.ajimemo.com");
        assert_eq!(opts.timeout, Duration::from_secs(10));

        let opts = config.client_options(Some(""));
        assert_eq!(opts.base_url, "http://localhost:8000");

        let opts = config.client_options(None);
        assert_eq!(opts.base_url, "http://localhost:8000");
    }
}
