//! Type definitions for the probe
//!
//! This module contains the data structures exchanged with the contact-form
//! endpoint under test.

pub mod request;
pub mod response;

pub use request::ContactRequest;
pub use response::SubmitResponse;
