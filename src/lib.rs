//! Prow Watcher
//!
//! Posts a run report of a group of periodic Prow jobs to a Slack webhook.
//! For every job in the job list the watcher:
//!
//! 1. Reads `logs/{job}/latest-build.txt` from the results bucket to find
//!    the latest build
//! 2. Reads `logs/{job}/{build}/finished.json` to classify that build as
//!    succeeded, failed or still running
//!
//! It then counts succeeded, failed, inactive and running jobs, renders the
//! report and sends it. A missing object is a normal answer; any other store
//! or webhook failure aborts the run without posting anything.

pub mod aggregate;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod job;
pub mod prelude;
pub mod report;
pub mod resolver;
pub mod storage;
pub mod webhook;

use tracing::info;

use crate::{
    aggregate::aggregate,
    config::WatcherConfig,
    job::load_jobs,
    prelude::*,
    report::{BuildLinks, format_report},
    storage::GcsStore,
    webhook::WebhookClient,
};

/// Build the report text for the jobs listed in `config`.
pub async fn build_report(config: &WatcherConfig) -> Result<String> {
    let jobs = load_jobs(&config.job_file_path)?;
    let store = GcsStore::new(&config.storage_url)?;

    info!("Finding latest build IDs and statuses of jobs");
    let run = aggregate(&store, &config.bucket, jobs, config.concurrency).await?;

    let links = BuildLinks::new(&config.prow_url, &config.bucket);
    Ok(format_report(
        &config.job_group_name,
        &config.mentioned_group_id,
        &run.summary,
        &run.statuses,
        &links,
    ))
}

/// Run the watcher once.
///
/// Returns the webhook response body, or `None` on a dry run where the
/// report is printed instead.
pub async fn run(config: &WatcherConfig) -> Result<Option<String>> {
    let report = build_report(config).await?;

    if config.dry_run {
        println!("{report}");
        return Ok(None);
    }

    let webhook = WebhookClient::new(&config.webhook_url)?;
    Ok(Some(webhook.send(&report).await?))
}
