//! CLI functionality
//!
//! Contains the run-mode logic driven by the binary entry point.

pub mod run;

pub use run::{RunArgs, run_probe_suite};
