//! Telemetry and logging initialization
//!
//! stdout carries JSON-RPC frames, so every log line goes to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug,hyper=info,reqwest=info"
    } else {
        "info,hyper=warn,reqwest=warn"
    }
}

/// Install the global tracing subscriber
///
/// # Arguments
/// * `verbose` - DEBUG level for our crates instead of INFO
/// * `json_format` - one JSON object per log line
///
/// Returns false when a subscriber was already installed.
///
/// # Example
/// ```
/// guide_common::telemetry::init_tracing(false, false);
/// tracing::info!("server started");
/// ```
pub fn init_tracing(verbose: bool, json_format: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let installed = if json_format {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .with(env_filter)
            .try_init()
    };

    installed.is_ok()
}
