use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

/// Connection settings for the directory server configuration API.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub insecure_trust_all_tls: bool,
    #[serde(default = "ServerConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServerConfig {
    const fn default_timeout_secs() -> u64 {
        30
    }

    /// Password with everything but the first and last two characters hidden.
    #[must_use]
    pub fn masked_password(&self) -> String {
        let chars: Vec<char> = self.password.chars().collect();
        if chars.len() > 8 {
            let head: String = chars[..2].iter().collect();
            let tail: String = chars[chars.len() - 2..].iter().collect();
            format!("{head}...{tail}")
        } else {
            "***".to_string()
        }
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "server": {
    "base_url": "https://localhost:1443",
    "username": "cn=administrator",
    "password": "your-password-here",
    "insecure_trust_all_tls": false,
    "timeout_secs": 30
  }
}"#;

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("dsconf"))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load from `path`, or from `~/dsconf/config.json` when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'dsconf init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", config_path.display())
        })?;

        if config.server.base_url.trim().is_empty() {
            anyhow::bail!("server.base_url must not be empty");
        }

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Write the config template to `path` (default `~/dsconf/config.json`).
    /// An existing file is never overwritten.
    pub fn create_config(path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        Ok(config_path)
    }
}
