use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. POSTVIEW_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.postview/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("POSTVIEW_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("postview").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".postview").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.url.trim().is_empty() {
            return Err(Error::Config("source.url must not be empty".to_string()));
        }
        if self.source.timeout_secs == 0 {
            return Err(Error::Config(
                "source.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = url {
            self.source.url = url;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.source.timeout_secs = timeout_secs;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.source.url, DEFAULT_URL);
        assert_eq!(config.source.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::default().with_overrides(Some("http://localhost:9/posts".into()), Some(3));
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[source]\ntimeout_secs = 2\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.source.url, DEFAULT_URL);
        assert_eq!(config.source.timeout_secs, 2);

        Ok(())
    }

    #[test]
    fn test_zero_timeout_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[source]\ntimeout_secs = 0\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/postview.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/postview.toml"));
        Ok(())
    }
}
