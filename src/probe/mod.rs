//! Probe execution
//!
//! This module contains the HTTP client wrapper, the fixed request
//! fixtures, and the sequential probe suite that exercises the
//! contact-form endpoint.

pub mod client;
pub mod fixtures;
pub mod outcome;
pub mod suite;

pub use client::{ApiClient, ProbeHttpResponse};
pub use outcome::ProbeOutcome;
pub use suite::ProbeSuite;
