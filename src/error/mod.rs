//! Error handling for the probe
//!
//! Provides the crate-wide error type and result alias.

pub mod types;

pub use types::{Error, Result};
