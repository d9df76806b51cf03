//! Layered configuration for the gateway CLI

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use isir_client_core::Credentials;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub oauth: OauthConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// Token-endpoint settings for the OAuth-WRAP exchange
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct OauthConfig {
    pub url: String,

    #[serde(flatten)]
    pub credentials: Credentials,

    pub scope: String,
}

/// Record API location
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct ApiConfig {
    pub root_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NetworkConfig {
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { timeout_seconds: 30 }
    }
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_cli_overrides(&mut self, timeout: Option<u64>) {
        if let Some(timeout) = timeout {
            self.network.timeout_seconds = timeout;
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered
/// configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with the default XDG-compliant path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Get the default XDG-compliant configuration path
    fn default_config_path() -> PathBuf {
        // Check for XDG_CONFIG_HOME override first
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("isir/config.toml");
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("isir/config.toml")
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed("ISIR_").split("__"));

        figment.extract().context("Failed to load configuration")
    }
}

/// Get the configuration from the default location
pub fn get_config() -> Result<AppConfig> {
    ConfigManager::new().load()
}
