//! Configuration management for the client.

use crate::{CoreError, CoreResult, Paths};
use journify_transport::{TransportConfig, DEFAULT_API_HOST};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Main client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Write key identifying this source to the collection API.
    #[serde(default)]
    pub write_key: String,
    /// Collection API origin.
    #[serde(default = "default_api_host")]
    pub api_host: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            write_key: String::new(),
            api_host: default_api_host(),
        }
    }
}

impl Config {
    /// Create a new Config with default values, then override from environment.
    pub fn new() -> Self {
        let mut config = Self::default();
        config.load_from_env();
        config
    }

    /// Load configuration from the config file if present, falling back to
    /// defaults, then apply environment overrides.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.load_from_env();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, paths: &Paths) -> CoreResult<()> {
        paths.ensure_dirs()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.config_file(), content)?;
        Ok(())
    }

    fn load_from_env(&mut self) {
        self.apply_env(|name| std::env::var(name).ok());
    }

    /// Override fields from `JOURNIFY_*` variables. Blank values are ignored.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(log_level) = read("JOURNIFY_LOG_LEVEL") {
            self.log_level = log_level;
        }
        if let Some(write_key) = read("JOURNIFY_WRITE_KEY") {
            self.write_key = write_key;
        }
        if let Some(api_host) = read("JOURNIFY_API_HOST") {
            self.api_host = api_host;
        }
    }

    /// Get the API host as a parsed URL.
    pub fn api_host_url(&self) -> CoreResult<Url> {
        Url::parse(&self.api_host).map_err(CoreError::from)
    }

    /// Transport settings, validated.
    pub fn transport_config(&self) -> CoreResult<TransportConfig> {
        if self.write_key.is_empty() {
            return Err(CoreError::Config(
                "write key is not set (JOURNIFY_WRITE_KEY or config.json)".to_string(),
            ));
        }
        self.api_host_url()?;

        Ok(TransportConfig::new(self.write_key.clone()).with_api_host(self.api_host.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.api_host, "https://api.journify.io");
        assert!(config.write_key.is_empty());
    }

    #[test]
    fn test_config_load_from_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "write_key": "abc123" }"#).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.write_key, "abc123");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.api_host, DEFAULT_API_HOST);
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config {
            log_level: "trace".to_string(),
            write_key: "abc123".to_string(),
            api_host: "http://localhost:8080".to_string(),
        };
        config.save(&paths).unwrap();

        let loaded = Config::load_from_file(&paths.config_file()).unwrap();
        assert_eq!(loaded.log_level, "trace");
        assert_eq!(loaded.write_key, "abc123");
        assert_eq!(loaded.api_host, "http://localhost:8080");
    }

    #[test]
    fn test_config_load_nonexistent_uses_defaults() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config::load(&paths).unwrap();
        assert!(config.api_host_url().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("JOURNIFY_LOG_LEVEL", "debug"),
            ("JOURNIFY_WRITE_KEY", " from-env "),
            ("JOURNIFY_API_HOST", ""),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.write_key, "from-env");
        // Blank values leave the field alone
        assert_eq!(config.api_host, DEFAULT_API_HOST);
    }

    #[test]
    fn test_transport_config() {
        let mut config = Config::default();
        assert!(matches!(config.transport_config(), Err(CoreError::Config(_))));

        config.write_key = "abc123".to_string();
        let transport = config.transport_config().unwrap();
        assert_eq!(transport.write_key, "abc123");
        assert_eq!(transport.api_host, DEFAULT_API_HOST);

        config.api_host = "not a valid url".to_string();
        assert!(matches!(config.transport_config(), Err(CoreError::InvalidUrl(_))));
    }
}
