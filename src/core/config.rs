//! Configuration management for the heroes API.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{HeroesError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "heroes.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalogue: CatalogueConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Catalogue source configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogueConfig {
    /// JSON catalogue document; the built-in dataset is used when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// Response header and static file configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// `max-age` advertised in the Cache-Control header
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age_secs: u64,

    /// Directory served under `/images`
    #[serde(default)]
    pub images_dir: Option<PathBuf>,

    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cache_max_age() -> u64 {
    // one year
    365 * 24 * 60 * 60
}

fn default_cors_permissive() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            cache_max_age_secs: default_cache_max_age(),
            images_dir: None,
            cors_permissive: default_cors_permissive(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| HeroesError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. `explicit` path (from the command line)
    /// 2. HEROES_CONFIG env var
    /// 3. ./heroes.toml
    /// 4. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("HEROES_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        // Override with environment variables
        config.merge_env();

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("HEROES_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("HEROES_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Catalogue configuration
        if let Ok(data_file) = env::var("HEROES_DATA_FILE") {
            self.catalogue.data_file = Some(PathBuf::from(data_file));
        }

        // HTTP configuration
        if let Ok(images_dir) = env::var("HEROES_IMAGES_DIR") {
            self.http.images_dir = Some(PathBuf::from(images_dir));
        }
        if let Ok(max_age) = env::var("HEROES_CACHE_MAX_AGE_SECS") {
            if let Ok(secs) = max_age.parse() {
                self.http.cache_max_age_secs = secs;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(HeroesError::ConfigError(
                "Server host must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(HeroesError::ConfigError(
                "Server port must be non-zero".to_string(),
            ));
        }

        if let Some(data_file) = &self.catalogue.data_file {
            if !data_file.is_file() {
                return Err(HeroesError::ConfigError(format!(
                    "Catalogue data file not found: {}",
                    data_file.display()
                )));
            }
        }

        if let Some(images_dir) = &self.http.images_dir {
            if !images_dir.is_dir() {
                return Err(HeroesError::ConfigError(format!(
                    "Images directory not found: {}",
                    images_dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}", self.bind_addr());
        match &self.catalogue.data_file {
            Some(path) => tracing::info!("  Catalogue: {:?}", path),
            None => tracing::info!("  Catalogue: built-in"),
        }
        tracing::info!("  Cache max-age: {}s", self.http.cache_max_age_secs);
        match &self.http.images_dir {
            Some(dir) => tracing::info!("  Images dir: {:?}", dir),
            None => tracing::info!("  Images dir: disabled"),
        }
        tracing::info!("  Permissive CORS: {}", self.http.cors_permissive);
    }
}
