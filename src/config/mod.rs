//! # Configuration
//!
//! TOML configuration for the `cornerstore` binary. The library core takes its
//! inputs as arguments; only the CLI reads this file.
//!
//! ```toml
//! [plugin]
//! mod_dir = "."
//!
//! [host]
//! globals_file = "globals.json"
//!
//! [logging]
//! level = "info"
//! file = "cornerstore.log"
//! ```
//!
//! The catalog location inside `mod_dir` is fixed
//! (`db/WTTBuffs/customBuffs.json`) and cannot be overridden.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub plugin: PluginConfig,
    pub host: HostConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Plugin install directory; the buff catalog is resolved under it.
    pub mod_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Host globals JSON holding the stimulator buffs table.
    pub globals_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level`; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            plugin: PluginConfig {
                mod_dir: ".".to_string(),
            },
            host: HostConfig {
                globals_file: "globals.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some("cornerstore.log".to_string()),
            },
        }
    }
}
