//! Command-line interface for the prow watcher.
//!
//! Every flag can also be supplied through a `WATCHER_*` environment
//! variable. The underscore spellings used by the previous bot
//! (`--job_file_path`, ...) are kept as aliases so existing cron entries
//! keep working.

use clap::Parser;
use std::path::PathBuf;

/// Default results bucket read by Prow's spyglass.
pub const DEFAULT_BUCKET: &str = "test-platform-results";
/// Default anonymous GCS endpoint.
pub const DEFAULT_STORAGE_URL: &str = "https://storage.googleapis.com";
/// Default base for build links in the report.
pub const DEFAULT_PROW_URL: &str = "https://prow.ci.openshift.org/view/gs";

/// Command-line interface for the prow watcher.
#[derive(Parser, Debug)]
#[command(name = "prow-watcher")]
#[command(about = "Prow Watcher - Post a run report of periodic jobs to a Slack webhook")]
pub struct Cli {
    /// Path to JSON file holding list of active jobs
    #[arg(long, env = "WATCHER_JOB_FILE_PATH", alias = "job_file_path")]
    pub job_file_path: Option<PathBuf>,

    /// The Slack webhook URL to use when sending a message
    #[arg(long, env = "WATCHER_WEBHOOK_URL", alias = "webhook_url")]
    pub webhook_url: Option<String>,

    /// The user group ID of the group to mention in the message
    #[arg(long, env = "WATCHER_MENTIONED_GROUP_ID", alias = "mentioned_group_id")]
    pub mentioned_group_id: Option<String>,

    /// The name of the group of jobs to use in the message
    #[arg(long, env = "WATCHER_JOB_GROUP_NAME", alias = "job_group_name")]
    pub job_group_name: Option<String>,

    /// Bucket holding the job results
    #[arg(long, env = "WATCHER_BUCKET", default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Base URL of the object store HTTP endpoint
    #[arg(long, env = "WATCHER_STORAGE_URL", default_value = DEFAULT_STORAGE_URL)]
    pub storage_url: String,

    /// Base URL used to link builds in the report
    #[arg(long, env = "WATCHER_PROW_URL", default_value = DEFAULT_PROW_URL)]
    pub prow_url: String,

    /// Number of jobs looked up at the same time
    #[arg(
        long,
        env = "WATCHER_CONCURRENCY",
        default_value_t = 8,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub concurrency: u16,

    /// Print the report instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}
