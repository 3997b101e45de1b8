//! Configuration management for FinVani
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, CONFIG_GENERATED, DEFAULT_API_BASE_URL, DEFAULT_HEALTH_POLL_SECS, DEFAULT_REFRESH_SETTLE_MS,
};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub health: HealthConfig,
    pub refresh: RefreshConfig,
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the inference backend
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Language code selected when the headlines view opens
    pub default_language: String,
}

/// Backend health polling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Seconds between health probes
    pub poll_interval_secs: u64,
}

/// Refresh workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Milliseconds to wait after triggering ingestion before re-fetching headlines
    pub settle_delay_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// Maximum level recorded (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_HEALTH_POLL_SECS,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_REFRESH_SETTLE_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl HealthConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl RefreshConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.level.trim()).map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Resolve the effective configuration: explicit file or discovered file,
    /// then the `FINVANI_API_URL` environment override, then the command-line
    /// URL. Validation runs once, on the merged result.
    pub fn resolve(explicit_path: Option<&Path>, cli_api_url: Option<String>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };

        config.apply_overrides(std::env::var(API_URL_ENV).ok());
        config.apply_overrides(cli_api_url);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file. Values are checked later, by `resolve`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Override the backend URL when one is supplied (environment or command line)
    pub fn apply_overrides(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api.base_url = url;
        }
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("finvani.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("finvani").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > 300 {
            anyhow::bail!(
                "api.timeout_secs must be between 1 and 300 seconds, got {}",
                self.api.timeout_secs
            );
        }

        if self.health.poll_interval_secs == 0 || self.health.poll_interval_secs > 3600 {
            anyhow::bail!(
                "health.poll_interval_secs must be between 1 and 3600 seconds, got {}",
                self.health.poll_interval_secs
            );
        }

        if self.refresh.settle_delay_ms > 60_000 {
            anyhow::bail!("refresh.settle_delay_ms cannot exceed 60000 (one minute)");
        }

        if self.ui.default_language.trim().is_empty() {
            anyhow::bail!("ui.default_language cannot be empty");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# FinVani Configuration File\n# Generated on {}\n# {} overrides api.base_url\n\n",
            chrono::Local::now().format("%Y-%m-%d"),
            API_URL_ENV
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("finvani"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
