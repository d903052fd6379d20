//! Configuration settings
//!
//! Settings are loaded from a TOML file and overridden by `OPENTOK_*`
//! environment variables.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production API endpoint
pub const DEFAULT_API_URL: &str = "https://api.opentok.com";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    crate::utils::user_agent()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Main configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Account credentials and endpoint
    #[serde(default)]
    pub api: ApiSettings,
    /// HTTP transport configuration
    #[serde(default)]
    pub network: NetworkSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Account credentials and API endpoint
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Numeric account key
    #[serde(default)]
    pub api_key: Option<u64>,
    /// Account secret
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Base URL of the REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whole-request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Proxy URL for all requests
    #[serde(default)]
    pub proxy: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            api_url: default_api_url(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
            proxy: None,
        }
    }
}

impl NetworkSettings {
    /// Configured timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Apply environment variable overrides; only variables that are set win
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(key) = std::env::var("OPENTOK_API_KEY") {
            self.api.api_key = Some(key.trim().parse().map_err(|e| {
                crate::Error::config("OPENTOK_API_KEY", &format!("Invalid api key: {}", e))
            })?);
        }

        if let Ok(secret) = std::env::var("OPENTOK_API_SECRET") {
            self.api.api_secret = Some(secret);
        }

        if let Ok(url) = std::env::var("OPENTOK_API_URL") {
            self.api.api_url = url;
        }

        if let Ok(user_agent) = std::env::var("OPENTOK_USER_AGENT") {
            self.network.user_agent = user_agent;
        }

        if let Ok(timeout) = std::env::var("OPENTOK_TIMEOUT") {
            self.network.timeout_secs = Some(timeout.parse().map_err(|e| {
                crate::Error::config("OPENTOK_TIMEOUT", &format!("Invalid timeout: {}", e))
            })?);
        }

        if let Ok(proxy) = std::env::var("OPENTOK_PROXY") {
            self.network.proxy = Some(proxy);
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(self)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        if let Err(e) = url::Url::parse(&self.api.api_url) {
            return Err(crate::Error::config(
                "api_url",
                &format!("Invalid API URL '{}': {}", self.api.api_url, e),
            ));
        }

        if self.network.timeout_secs == Some(0) {
            return Err(crate::Error::config(
                "timeout_secs",
                "Invalid timeout: cannot be 0",
            ));
        }

        if let Some(proxy_url) = &self.network.proxy
            && let Err(e) = url::Url::parse(proxy_url)
        {
            return Err(crate::Error::config(
                "proxy",
                &format!("Invalid proxy URL '{}': {}", proxy_url, e),
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        match self.logging.format.as_str() {
            "text" | "compact" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_format",
                    &format!("Invalid log format: {}", self.logging.format),
                ));
            }
        }

        Ok(())
    }

    /// Credentials needed to build a client
    pub fn require_credentials(&self) -> crate::Result<(u64, &str)> {
        let api_key = self.api.api_key.ok_or_else(|| {
            crate::Error::config("api_key", "Missing api key (set OPENTOK_API_KEY)")
        })?;
        let api_secret = self
            .api
            .api_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                crate::Error::config("api_secret", "Missing api secret (set OPENTOK_API_SECRET)")
            })?;
        Ok((api_key, api_secret))
    }
}
