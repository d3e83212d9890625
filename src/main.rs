//! Command-line entry point for the contact-form API probe
//!
//! Runs the fixed probe sequence against a configured backend and exits
//! with code 0 when every probe passes, 1 otherwise.
//!
//! # Usage
//!
//! ```bash
//! contact-probe
//! contact-probe --base-url https://backend.example.com
//! contact-probe --env-file /app/frontend/.env --verbose
//! contact-probe --config /etc/contact-probe/config.toml --timeout 5
//! ```

use clap::Parser;

use contact_probe::cli::run::{RunArgs, run_probe_suite};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "contact-probe")]
struct Cli {
    /// Backend base URL (overrides every other configuration source)
    #[arg(short, long, value_name = "URL")]
    base_url: Option<String>,

    /// Env-style settings file carrying the backend URL
    #[arg(short, long, value_name = "ENV_FILE")]
    env_file: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "CONFIG")]
    config: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = RunArgs {
        base_url: cli.base_url,
        env_file: cli.env_file,
        config: cli.config,
        timeout: cli.timeout,
        verbose: cli.verbose,
    };

    run_probe_suite(args).await
}
