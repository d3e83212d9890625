//! Error classification for the probe
//!
//! Covers configuration resolution, HTTP transport, and response
//! verification failures. Probe-level failures are recorded in the report
//! rather than propagated, so most variants surface only in logs.

use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// The backend base URL could not be resolved from any source
    #[error("Backend base URL could not be resolved: {reason}")]
    BaseUrl {
        /// Why resolution failed
        reason: String,
    },

    /// The backend answered with a status code other than the expected one
    #[error("Probe '{probe}' expected HTTP {expected}, got {actual}")]
    UnexpectedStatus {
        /// The probe that observed the mismatch
        probe: String,
        /// Expected status code
        expected: u16,
        /// Observed status code
        actual: u16,
    },

    /// The response body did not match the expected shape
    #[error("Probe '{probe}' got a malformed response: {detail}")]
    ResponseShape {
        /// The probe that observed the mismatch
        probe: String,
        /// What was wrong with the body
        detail: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a base URL resolution error
    pub fn base_url(reason: impl Into<String>) -> Self {
        Self::BaseUrl {
            reason: reason.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(probe: impl Into<String>, expected: u16, actual: u16) -> Self {
        Self::UnexpectedStatus {
            probe: probe.into(),
            expected,
            actual,
        }
    }

    /// Create a response shape error
    pub fn response_shape(probe: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ResponseShape {
            probe: probe.into(),
            detail: detail.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Http(..) => "http",
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
            Error::Config { .. } => "config",
            Error::BaseUrl { .. } => "base_url",
            Error::UnexpectedStatus { .. } => "unexpected_status",
            Error::ResponseShape { .. } => "response_shape",
        }
    }
}
