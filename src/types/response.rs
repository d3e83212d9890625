//! Response type definitions
//!
//! Defines the structure of successful contact-form submission responses.
//! Every field is optional on the wire so shape checks are made explicitly
//! by the probes instead of failing inside deserialization.

use serde::{Deserialize, Serialize};

/// Response returned by the backend for an accepted submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Whether the backend accepted the submission
    #[serde(default)]
    pub success: Option<bool>,

    /// Human-readable confirmation message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Opaque unique identifier assigned by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

impl SubmitResponse {
    /// Check whether the backend reported success
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }

    /// Get the contact id when it is present and non-empty
    pub fn contact_id(&self) -> Option<&str> {
        self.contact_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Check whether all fields of the documented response schema are present
    pub fn has_complete_shape(&self) -> bool {
        self.success.is_some() && self.message.is_some() && self.contact_id.is_some()
    }
}
