//! Contact-Form API Probe
//!
//! A black-box integration probe for a contact-form backend. The probe
//! resolves the backend base URL from layered configuration, sends a fixed
//! sequence of JSON payloads to `POST /api/contacts`, and checks observed
//! HTTP status codes and response shapes against the expected contract.
//!
//! # Probe sequence
//!
//! 1. Valid submission: expects `200` with `success: true` and a non-empty
//!    `contact_id`
//! 2. Invalid email format: expects `422`
//! 3. Missing required field (name, email, message): expects `422` each
//! 4. Message below the minimum length (including empty): expects `422` each
//! 5. Persistence check with a uniquely-named payload: expects `200` with a
//!    complete response body and a fresh `contact_id`
//!
//! Probes run strictly one after another over a single shared HTTP client.
//! A network failure or malformed response counts as a failed probe, never
//! a crash; the process exit code is 0 only when every probe passed.
//!
//! # Usage
//!
//! ```bash
//! contact-probe --base-url https://backend.example.com
//! contact-probe --env-file /app/frontend/.env --verbose
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use probe::{ApiClient, ProbeOutcome, ProbeSuite};
pub use report::ProbeReport;
pub use types::{ContactRequest, SubmitResponse};
