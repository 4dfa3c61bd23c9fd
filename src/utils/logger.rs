//! Logging setup for the `golf-scores` binary.
//!
//! Logs go to stderr so stdout carries only the Airtable response.
//! `RUST_LOG` overrides the default filter in both output modes.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        // 顯示每個請求的方法與端點
        "airtable_golf=debug,info"
    } else {
        "airtable_golf=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Human-readable compact output.
pub fn init_cli_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(layer)
        .init();
}

/// One JSON object per event, for `--json-logs`.
pub fn init_json_logger() {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(layer)
        .init();
}
