//! Request type definitions
//!
//! Defines the structure for contact-form submission requests. All three
//! fields are required by the backend, but each is optional here so probes
//! can deliberately omit fields to exercise the validation path; absent
//! fields are dropped from the serialized JSON entirely.

use serde::{Deserialize, Serialize};

/// A contact-form submission payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Submitter name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Submitter email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Message body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Create a new empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request with all three required fields present
    pub fn complete(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    /// Set the name field
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email field
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the message field
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Drop the named field from the payload
    ///
    /// Unknown field names are ignored.
    pub fn without_field(mut self, field: &str) -> Self {
        match field {
            "name" => self.name = None,
            "email" => self.email = None,
            "message" => self.message = None,
            _ => {}
        }
        self
    }

    /// Check whether all required fields are present
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.email.is_some() && self.message.is_some()
    }
}
