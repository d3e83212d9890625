//! Probe configuration settings
//!
//! Provides configuration loading from environment variables, TOML
//! configuration files, and command-line overrides. The expected-behavior
//! constants of the backend contract (endpoint path, minimum message
//! length) are configurable rather than hard-coded.

use serde::{Deserialize, Serialize};
use url::Url;

// Helper functions for serde defaults
fn default_endpoint_path() -> String {
    "/api/contacts".to_string()
}

fn default_env_key() -> String {
    "REACT_APP_BACKEND_URL".to_string()
}

fn default_min_message_length() -> usize {
    10
}

fn default_request_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("contact-probe/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration settings for the probe
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Endpoint configuration
    #[serde(default)]
    pub endpoint: EndpointSettings,
    /// Expected backend behavior
    #[serde(default)]
    pub expect: ExpectationSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Network configuration
    #[serde(default)]
    pub network: NetworkSettings,
}

/// Target endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSettings {
    /// Backend base URL (scheme://host[:port])
    #[serde(default)]
    pub base_url: Option<String>,
    /// Path of the contact endpoint, appended to the base URL
    #[serde(default = "default_endpoint_path")]
    pub path: String,
    /// Env-style settings file that may carry the base URL
    #[serde(default)]
    pub env_file: Option<std::path::PathBuf>,
    /// Key looked up in the env-style settings file
    #[serde(default = "default_env_key")]
    pub env_key: String,
}

/// Expected backend validation behavior
///
/// The backend's exact validation rules are inferred from its observable
/// behavior, so the thresholds stay configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectationSettings {
    /// Minimum accepted message length; shorter messages must be rejected
    #[serde(default = "default_min_message_length")]
    pub min_message_length: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            path: default_endpoint_path(),
            env_file: None,
            env_key: default_env_key(),
        }
    }
}

impl Default for ExpectationSettings {
    fn default() -> Self {
        Self {
            min_message_length: default_min_message_length(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();

        if let Ok(base_url) = std::env::var("PROBE_BASE_URL") {
            settings.endpoint.base_url = Some(base_url);
        }

        if let Ok(env_file) = std::env::var("PROBE_ENV_FILE") {
            settings.endpoint.env_file = Some(std::path::PathBuf::from(env_file));
        }

        if let Ok(timeout) = std::env::var("PROBE_TIMEOUT") {
            settings.network.request_timeout = timeout.parse().map_err(|e| {
                crate::Error::config("PROBE_TIMEOUT", &format!("Invalid timeout: {}", e))
            })?;
        }

        if let Ok(min_len) = std::env::var("PROBE_MIN_MESSAGE_LENGTH") {
            settings.expect.min_message_length = min_len.parse().map_err(|e| {
                crate::Error::config(
                    "PROBE_MIN_MESSAGE_LENGTH",
                    &format!("Invalid length: {}", e),
                )
            })?;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            settings.logging.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(settings)
    }

    /// Load settings from a TOML configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", &format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings)
    }

    /// Merge settings with environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        let env_settings = Self::from_env()?;

        // Environment-provided values override file values
        if env_settings.endpoint.base_url.is_some() {
            self.endpoint.base_url = env_settings.endpoint.base_url;
        }
        if env_settings.endpoint.env_file.is_some() {
            self.endpoint.env_file = env_settings.endpoint.env_file;
        }

        if env_settings.network.request_timeout != Self::default().network.request_timeout {
            self.network.request_timeout = env_settings.network.request_timeout;
        }

        if env_settings.expect.min_message_length != Self::default().expect.min_message_length {
            self.expect.min_message_length = env_settings.expect.min_message_length;
        }

        if env_settings.logging.level != Self::default().logging.level {
            self.logging.level = env_settings.logging.level;
        }

        Ok(self)
    }

    /// Build the full endpoint URL from a base URL and the configured path
    ///
    /// Normalizes trailing slashes on the base before appending the path.
    pub fn endpoint_url(&self, base_url: &str) -> crate::Result<Url> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let joined = format!("{}{}", trimmed, self.endpoint.path);
        let url = Url::parse(&joined)?;
        Ok(url)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        if !self.endpoint.path.starts_with('/') {
            return Err(crate::Error::config(
                "endpoint.path",
                &format!("Endpoint path must start with '/': {}", self.endpoint.path),
            ));
        }

        if self.network.request_timeout == 0 {
            return Err(crate::Error::config(
                "request_timeout",
                "Invalid request timeout: cannot be 0",
            ));
        }

        if self.endpoint.env_key.is_empty() {
            return Err(crate::Error::config(
                "endpoint.env_key",
                "Env file key cannot be empty",
            ));
        }

        // Validate log level
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        // Validate base URL syntax if already present
        if let Some(url_str) = &self.endpoint.base_url
            && let Err(e) = Url::parse(url_str)
        {
            return Err(crate::Error::config(
                "base_url",
                &format!("Invalid base URL '{}': {}", url_str, e),
            ));
        }

        Ok(())
    }
}
