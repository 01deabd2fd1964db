//! Prow Watcher binary.
//!
//! Meant to be started by an external scheduler. Exits with a non-zero
//! status on any configuration, input, store or webhook error.

use std::process::ExitCode;

use clap::Parser;
use prow_watcher::{cli::Cli, config::WatcherConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Prow Watcher.
///
/// # Examples
///
/// ```bash
/// prow-watcher \
///     --job-file-path jobs.json \
///     --webhook-url https://hooks.slack.com/services/T000/B000/XXXX \
///     --mentioned-group-id S0123 \
///     --job-group-name "Interop AWS"
/// ```
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prow_watcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match WatcherConfig::from_cli(Cli::parse()) {
        Ok(config) => prow_watcher::run(&config).await.map(|_| ()),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}. Exiting...");
            ExitCode::FAILURE
        }
    }
}
