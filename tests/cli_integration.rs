//! CLI integration tests
//!
//! Tests end-to-end binary behavior: flag handling, configuration
//! resolution failures, and full probe runs against mock backends.

mod common;

use assert_cmd::Command;
use common::{start_broken_backend, start_contact_backend};
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn probe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("contact-probe").unwrap();
    // Isolate each invocation from ambient probe configuration
    cmd.env_remove("PROBE_BASE_URL")
        .env_remove("PROBE_ENV_FILE")
        .env_remove("PROBE_CONFIG")
        .env_remove("PROBE_TIMEOUT")
        .env_remove("PROBE_MIN_MESSAGE_LENGTH")
        .env_remove("LOG_LEVEL")
        .env_remove("VERBOSE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_flag() {
    probe_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-url"))
        .stdout(predicate::str::contains("env-file"))
        .stdout(predicate::str::contains("timeout"));
}

#[test]
fn test_version_flag() {
    probe_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unresolvable_base_url_exits_one() {
    probe_cmd()
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not be resolved"));
}

#[test]
fn test_env_file_without_backend_key_exits_one() {
    let mut env_file = NamedTempFile::new().unwrap();
    writeln!(env_file, "WDS_SOCKET_PORT=443").unwrap();
    env_file.flush().unwrap();

    probe_cmd()
        .args(["--env-file", env_file.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not be resolved"));
}

#[test]
fn test_missing_env_file_exits_one() {
    probe_cmd()
        .args(["--env-file", "/nonexistent/.env"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_invalid_timeout_value_rejected() {
    probe_cmd()
        .args(["--timeout", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_run_against_conforming_backend() {
    let server = start_contact_backend().await;

    probe_cmd()
        .args(["--base-url", &server.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall: 5/5 probes passed"))
        .stdout(predicate::str::contains("All probes passed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_run_via_env_file() {
    let server = start_contact_backend().await;

    let mut env_file = NamedTempFile::new().unwrap();
    writeln!(env_file, "REACT_APP_BACKEND_URL={}", server.uri()).unwrap();
    env_file.flush().unwrap();

    probe_cmd()
        .args(["--env-file", env_file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall: 5/5 probes passed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_run_via_env_var() {
    let server = start_contact_backend().await;

    probe_cmd()
        .env("PROBE_BASE_URL", server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall: 5/5 probes passed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failing_backend_exits_one() {
    let server = start_broken_backend().await;

    probe_cmd()
        .args(["--base-url", &server.uri()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Overall: 0/5 probes passed"))
        .stdout(predicate::str::contains("Some probes failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_file_supplies_base_url() {
    let server = start_contact_backend().await;

    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        r#"
[endpoint]
base_url = "{}"
"#,
        server.uri()
    )
    .unwrap();
    config.flush().unwrap();

    probe_cmd()
        .args(["--config", config.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall: 5/5 probes passed"));
}
