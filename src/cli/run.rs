//! Run mode CLI logic
//!
//! Contains the core logic for one probe run: configuration resolution,
//! logging setup, suite execution, report printing, and exit code mapping.

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    Settings,
    config::ConfigLoader,
    probe::{ApiClient, ProbeSuite},
    utils::version,
};

/// Arguments for run mode
#[derive(Debug)]
pub struct RunArgs {
    pub base_url: Option<String>,
    pub env_file: Option<String>,
    pub config: Option<String>,
    pub timeout: Option<u64>,
    pub verbose: bool,
}

/// Run the probe suite with the given arguments
///
/// Exits the process with code 1 when the base URL cannot be resolved or
/// any probe fails.
pub async fn run_probe_suite(args: RunArgs) -> Result<()> {
    // Load configuration FIRST, before initializing logging, so the
    // logging.level from the config file can take effect.
    //
    // Configuration precedence:
    // 1. Command line arguments (highest priority)
    // 2. Environment variables
    // 3. Configuration file (from --config, PROBE_CONFIG or default location)
    // 4. Default values (lowest priority)
    let config_loader = ConfigLoader::new();

    let config_path = if let Some(config) = &args.config {
        Some(std::path::PathBuf::from(config))
    } else {
        ConfigLoader::get_config_path()
    };

    let mut settings = config_loader
        .load(config_path.as_deref())
        .unwrap_or_else(|e| {
            // Can't use tracing here since it's not initialized yet
            eprintln!(
                "Warning: Failed to load configuration: {}. Using defaults.",
                e
            );
            Settings::default()
        });

    // Override with CLI arguments if provided (highest priority)
    if let Some(env_file) = args.env_file {
        settings.endpoint.env_file = Some(std::path::PathBuf::from(env_file));
    }
    if let Some(timeout) = args.timeout {
        settings.network.request_timeout = timeout;
    }
    settings.logging.verbose = args.verbose;

    // Initialize logging with proper precedence:
    // 1. CLI --verbose flag (highest priority) -> debug level
    // 2. RUST_LOG environment variable
    // 3. Config file logging.level
    // 4. Default: info (lowest priority)
    let env_filter = if args.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.logging.level)
    };

    // Diagnostics go to stderr; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Resolved settings: {:?}", settings);

    // Resolve the endpoint before issuing any request; an unresolvable base
    // URL terminates the run immediately.
    let endpoint = match config_loader.resolve_endpoint(&settings, args.base_url.as_deref()) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "contact-probe v{} probing endpoint {}",
        version::get_version(),
        endpoint
    );

    let client = ApiClient::new(endpoint, &settings.network)?;
    let suite = ProbeSuite::new(client, settings.expect.clone());

    let report = suite.run().await;
    println!("{}", report.render());

    if !report.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}
