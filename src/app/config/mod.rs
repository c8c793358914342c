use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub mod user;

pub use user::{UserConfig, DEFAULT_PLAYLIST_NAME};

pub struct AppConfig; // Namespace only

impl AppConfig {
    pub fn get_config_path() -> PathBuf {
        PathBuf::from("/etc/queuerestore.toml")
    }

    /// Read and parse the config file. Unlike the optional keys, a missing
    /// file or a missing required key is fatal.
    pub fn load(path: &Path) -> Result<UserConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<UserConfig> {
        let config: UserConfig = toml::from_str(content)?;
        if config.api_url.trim().is_empty() {
            anyhow::bail!("api_url must not be empty");
        }
        Ok(config)
    }

    /// Default config.toml, for `--generate-config`
    pub fn default_toml() -> Result<String> {
        Ok(toml::to_string_pretty(&UserConfig::default())?)
    }
}
