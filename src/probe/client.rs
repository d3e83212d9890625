//! HTTP client wrapper for the endpoint under test
//!
//! Builds a single reqwest client with the configured timeout and reuses
//! it for every probe. Each call is one POST with no retries.

use crate::{Result, config::NetworkSettings, types::ContactRequest};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for submitting contact payloads to the backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Shared HTTP client
    client: Client,
    /// Full endpoint URL the payloads are posted to
    endpoint: Url,
}

/// Captured response of a single probe request
///
/// The body is kept as raw text so probes can log it verbatim and decide
/// themselves whether to parse it.
#[derive(Debug, Clone)]
pub struct ProbeHttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw response body
    pub body: String,
}

impl ProbeHttpResponse {
    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let value = serde_json::from_str(&self.body)?;
        Ok(value)
    }
}

impl ApiClient {
    /// Create a new client for the given endpoint
    pub fn new(endpoint: Url, network: &NetworkSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(network.user_agent.as_str())
            .timeout(Duration::from_secs(network.request_timeout))
            .connect_timeout(Duration::from_secs(network.connect_timeout))
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit a contact payload and capture status plus raw body
    pub async fn submit(&self, payload: &ContactRequest) -> Result<ProbeHttpResponse> {
        debug!(
            "POST {} payload={}",
            self.endpoint,
            serde_json::to_string(payload)?
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("Response status={} body={}", status, body);

        Ok(ProbeHttpResponse { status, body })
    }
}
