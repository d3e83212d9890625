//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests, most
//! importantly mock contact-form backends with configurable behavior.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Minimum message length enforced by the well-behaved mock backend
pub const MOCK_MIN_MESSAGE_LENGTH: usize = 10;

/// A mock backend that implements the documented validation contract
///
/// Rejects payloads with missing fields, implausible emails, or short
/// messages with 422; accepts everything else with 200 and a unique
/// contact id.
pub struct WellBehavedBackend {
    counter: AtomicUsize,
}

impl WellBehavedBackend {
    pub fn new() -> Self {
        Self {
            counter: AtomicUsize::new(1),
        }
    }
}

impl Respond for WellBehavedBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let payload: serde_json::Value = match serde_json::from_slice(&request.body) {
            Ok(value) => value,
            Err(_) => return ResponseTemplate::new(422),
        };

        let name = payload.get("name").and_then(|v| v.as_str());
        let email = payload.get("email").and_then(|v| v.as_str());
        let message = payload.get("message").and_then(|v| v.as_str());

        let (Some(_name), Some(email), Some(message)) = (name, email, message) else {
            return ResponseTemplate::new(422);
        };

        if !is_plausible_email(email) {
            return ResponseTemplate::new(422);
        }

        if message.chars().count() < MOCK_MIN_MESSAGE_LENGTH {
            return ResponseTemplate::new(422);
        }

        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Thank you for contacting us!",
            "contact_id": format!("contact-{:04}", id),
        }))
    }
}

/// Rough email syntax check for the mock: non-empty local part and a
/// dotted domain
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Start a mock backend implementing the full validation contract
pub async fn start_contact_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(WellBehavedBackend::new())
        .mount(&server)
        .await;
    server
}

/// Start a mock backend that accepts every payload with the same response
///
/// Useful for checking that rejection probes fail against a backend that
/// skips validation entirely.
pub async fn start_accept_all_backend(contact_id: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Thank you for contacting us!",
            "contact_id": contact_id,
        })))
        .mount(&server)
        .await;
    server
}

/// Start a mock backend that rejects every payload with 422
pub async fn start_reject_all_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;
    server
}

/// Start a mock backend that answers every payload with a server error
pub async fn start_broken_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;
    server
}

/// Start a mock backend that returns 200 with an unparseable body
pub async fn start_garbage_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    server
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plausible_email() {
        assert!(is_plausible_email("marco.rossi@example.com"));
        assert!(!is_plausible_email("invalid-email-format"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@nodot"));
    }
}
