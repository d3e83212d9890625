//! Fixed request payloads sent by the probes
//!
//! The payloads mirror realistic contact-form traffic for the backend
//! under test. The invalid-message cases derive from the configured
//! minimum length rather than hard-coding the backend's rule.

use crate::types::ContactRequest;
use chrono::Utc;

/// Name used for the valid submission probe
pub const VALID_NAME: &str = "Marco Rossi";

/// Email used for the valid submission probe
pub const VALID_EMAIL: &str = "marco.rossi@example.com";

/// Message used for the valid submission probe
pub const VALID_MESSAGE: &str = "Sono molto interessato al libro 'Cronache dal fronte \
invisibile'. Vorrei sapere quando sarà disponibile in libreria.";

/// Name used for the invalid email probe
pub const INVALID_EMAIL_NAME: &str = "Giovanni Bianchi";

/// A syntactically invalid email address
pub const INVALID_EMAIL: &str = "invalid-email-format";

/// Message used for the invalid email probe
pub const INVALID_EMAIL_MESSAGE: &str = "Questo è un messaggio di test con email non valida \
per verificare la validazione.";

/// Email used for the persistence probe
pub const PERSISTENCE_EMAIL: &str = "storage.test@example.com";

/// Message used for the persistence probe
pub const PERSISTENCE_MESSAGE: &str = "Questo è un messaggio di test per verificare che i \
dati vengano salvati correttamente dal backend.";

/// The complete, well-formed submission
pub fn valid_submission() -> ContactRequest {
    ContactRequest::complete(VALID_NAME, VALID_EMAIL, VALID_MESSAGE)
}

/// A submission whose email fails syntax validation
pub fn invalid_email_submission() -> ContactRequest {
    ContactRequest::complete(INVALID_EMAIL_NAME, INVALID_EMAIL, INVALID_EMAIL_MESSAGE)
}

/// One sub-case per required field, each omitting exactly that field
pub fn missing_field_cases() -> Vec<(&'static str, ContactRequest)> {
    let base = ContactRequest::complete(
        "Test User",
        "test@example.com",
        "Missing field test message",
    );

    ["name", "email", "message"]
        .into_iter()
        .map(|field| (field, base.clone().without_field(field)))
        .collect()
}

/// Sub-cases with messages the backend must reject: one just below the
/// configured minimum length and one empty
pub fn invalid_message_cases(min_message_length: usize) -> Vec<(&'static str, ContactRequest)> {
    let short = "x".repeat(min_message_length.saturating_sub(1));

    vec![
        (
            "too_short",
            ContactRequest::complete("Test User", "test@example.com", short),
        ),
        (
            "empty",
            ContactRequest::complete("Test User", "test@example.com", ""),
        ),
    ]
}

/// A valid submission with a unique name, so a repeated run still creates
/// a distinct record on the backend
pub fn unique_persistence_submission() -> ContactRequest {
    let suffix = format!("{:08x}", Utc::now().timestamp_micros() as u64 & 0xffff_ffff);
    ContactRequest::complete(
        format!("Test User {}", suffix),
        PERSISTENCE_EMAIL,
        PERSISTENCE_MESSAGE,
    )
}
