//! Configuration loading utilities
//!
//! Provides helper functions for loading configuration from various sources
//! with proper error handling and validation, including the env-style
//! settings file of the system under test that carries the backend URL.

use crate::{Result, config::Settings};
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

/// Read a single `KEY=VALUE` entry from an env-style settings file
///
/// Lines are matched on the exact key before the first `=`; comment and
/// blank lines are skipped. Returns `Ok(None)` when the key is absent.
pub fn read_env_file_key<P: AsRef<Path>>(path: P, key: &str) -> Result<Option<String>> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        crate::Error::config(
            "env_file",
            &format!("Failed to read env file {:?}: {}", path.as_ref(), e),
        )
    })?;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=')
            && k.trim() == key
        {
            let value = v.trim().trim_matches('"').to_string();
            if value.is_empty() {
                return Ok(None);
            }
            return Ok(Some(value));
        }
    }

    Ok(None)
}

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

    /// Get the config file path from PROBE_CONFIG environment variable or default location
    ///
    /// Priority:
    /// 1. PROBE_CONFIG environment variable
    /// 2. ~/.config/contact-probe/config.toml (or platform equivalent)
    pub fn get_config_path() -> Option<std::path::PathBuf> {
        // First try PROBE_CONFIG environment variable
        if let Ok(config_path) = std::env::var("PROBE_CONFIG") {
            let path = std::path::PathBuf::from(config_path);
            if path.exists() {
                debug!("Using config file from PROBE_CONFIG: {:?}", path);
                return Some(path);
            } else {
                warn!("PROBE_CONFIG points to non-existent file: {:?}", path);
            }
        }

        // Try default config location
        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("contact-probe").join("config.toml");
            if default_path.exists() {
                debug!("Using default config file: {:?}", default_path);
                return Some(default_path);
            }
        }

        debug!("No config file found");
        None
    }

    /// Load configuration with precedence order:
    /// 1. Command line arguments (highest priority, applied by the caller)
    /// 2. Environment variables
    /// 3. Configuration file
    /// 4. Default values (lowest priority)
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        // Load from config file if provided
        if let Some(path) = config_file {
            if path.exists() {
                info!("Loading configuration from file: {:?}", path);
                settings = Settings::from_file(path)?;
            } else {
                warn!("Configuration file not found: {:?}, using defaults", path);
            }
        }

        // Override with environment variables
        debug!("Applying environment variable overrides");
        settings = settings.merge_with_env()?;

        // Validate final configuration
        settings.validate()?;

        debug!("Final configuration: {:?}", settings);

        Ok(settings)
    }

    /// Resolve the full endpoint URL to probe
    ///
    /// Base URL precedence:
    /// 1. CLI `--base-url` argument
    /// 2. Settings value (environment variable or config file)
    /// 3. Env-style settings file lookup (`endpoint.env_key`)
    ///
    /// Fails when no source yields a base URL; the caller is expected to
    /// terminate the process without issuing any request.
    pub fn resolve_endpoint(
        &self,
        settings: &Settings,
        cli_base_url: Option<&str>,
    ) -> Result<Url> {
        let base_url = if let Some(url) = cli_base_url {
            debug!("Using base URL from command line");
            url.to_string()
        } else if let Some(url) = &settings.endpoint.base_url {
            debug!("Using base URL from settings");
            url.clone()
        } else if let Some(env_file) = &settings.endpoint.env_file {
            info!("Reading backend URL from env file: {:?}", env_file);
            read_env_file_key(env_file, &settings.endpoint.env_key)?.ok_or_else(|| {
                crate::Error::base_url(format!(
                    "key '{}' not found in {:?}",
                    settings.endpoint.env_key, env_file
                ))
            })?
        } else {
            return Err(crate::Error::base_url(
                "no base URL configured; pass --base-url, set PROBE_BASE_URL, or point \
                 --env-file at a settings file",
            ));
        };

        settings.endpoint_url(&base_url)
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
