//! Validated settings for a single watcher run.

use std::path::PathBuf;

use crate::{cli::Cli, prelude::*};

/// Settings for a single run, built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherConfig {
    /// JSON list of jobs to report on.
    pub job_file_path: PathBuf,
    /// Slack incoming webhook.
    pub webhook_url: String,
    /// User group mentioned in the greeting.
    pub mentioned_group_id: String,
    /// Display name of the job group.
    pub job_group_name: String,
    /// Results bucket.
    pub bucket: String,
    /// Object store HTTP endpoint.
    pub storage_url: String,
    /// Base of build links.
    pub prow_url: String,
    /// Maximum number of jobs looked up at once.
    pub concurrency: usize,
    /// Print the report instead of sending it.
    pub dry_run: bool,
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::MissingArgument(name)),
    }
}

impl WatcherConfig {
    /// Validate the parsed command line.
    ///
    /// Every required setting must be present and non-blank, otherwise
    /// the run is refused with [`Error::MissingArgument`] before anything
    /// remote is touched.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let job_file_path = cli
            .job_file_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(Error::MissingArgument("job_file_path"))?;
        let webhook_url = required(cli.webhook_url, "webhook_url")?;
        let mentioned_group_id = required(cli.mentioned_group_id, "mentioned_group_id")?;
        let job_group_name = required(cli.job_group_name, "job_group_name")?;

        Ok(Self {
            job_file_path,
            webhook_url,
            mentioned_group_id,
            job_group_name,
            bucket: cli.bucket,
            storage_url: cli.storage_url.trim_end_matches('/').to_string(),
            prow_url: cli.prow_url.trim_end_matches('/').to_string(),
            concurrency: usize::from(cli.concurrency.max(1)),
            dry_run: cli.dry_run,
        })
    }
}
