//! Configuration loading utilities
//!
//! Provides helper functions for loading configuration from various sources
//! with proper error handling and validation.

use crate::{Error, Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Get the config file path from OPENTOK_CONFIG environment variable or default location
    ///
    /// Priority:
    /// 1. OPENTOK_CONFIG environment variable
    /// 2. ~/.config/opentok/config.toml (or platform equivalent)
    pub fn get_config_path() -> Option<PathBuf> {
        if let Ok(config_path) = std::env::var("OPENTOK_CONFIG") {
            let path = PathBuf::from(config_path);
            if path.exists() {
                debug!("Using config file from OPENTOK_CONFIG: {:?}", path);
                return Some(path);
            } else {
                warn!("OPENTOK_CONFIG points to non-existent file: {:?}", path);
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("opentok").join("config.toml");
            if default_path.exists() {
                debug!("Using default config file: {:?}", default_path);
                return Some(default_path);
            }
        }

        debug!("No config file found");
        None
    }

    /// Load configuration with precedence order:
    /// 1. Environment variables
    /// 2. Configuration file
    /// 3. Default values (lowest priority)
    ///
    /// The result is validated. Callers that layer further overrides on top
    /// should use [`ConfigLoader::resolve`] and validate afterwards.
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let settings = self.resolve(config_file)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Merge defaults, the configuration file and the environment without validating
    ///
    /// A named file that does not exist is an error.
    pub fn resolve(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(Error::config(
                    "config",
                    &format!("Configuration file not found: {}", path.display()),
                ));
            }
            info!("Loading configuration from file: {:?}", path);
            settings = Settings::from_file(path)?;
        }

        debug!("Applying environment variable overrides");
        settings = settings.merge_with_env()?;

        debug!("Resolved configuration: {:?}", settings);

        Ok(settings)
    }

    /// Get default configuration
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
