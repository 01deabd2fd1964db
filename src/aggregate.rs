//! Per-job lookup fan-out and run statistics.

use futures::{StreamExt, TryStreamExt, stream};
use tracing::info;

use crate::{
    classifier::classify,
    job::{Job, JobStatus},
    prelude::*,
    resolver::resolve_latest_build,
    storage::ObjectStore,
};

/// Counts over all jobs of a run.
///
/// `succeeded + failed + inactive` always equals the number of jobs. An
/// active job counts as failed unless its latest build succeeded, so an
/// active job that is still running shows up in both `failed` and `running`.
/// Inactive jobs are only ever counted as inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub inactive: usize,
    /// Active jobs without a terminal result.
    pub running: usize,
}

impl RunSummary {
    pub fn from_statuses(statuses: &[JobStatus]) -> Self {
        let mut summary = Self::default();
        for status in statuses {
            if !status.is_active() {
                summary.inactive += 1;
            } else if status.outcome.is_succeeded() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }

            if status.is_running() {
                summary.running += 1;
            }
        }
        summary
    }

    /// Jobs that were expected to run.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Share of succeeded jobs, rounded up to a whole percent.
    ///
    /// `None` when no active job exists.
    pub fn passing_percentage(&self) -> Option<u32> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let percentage = (self.succeeded * 100).div_ceil(total);
        u32::try_from(percentage).ok()
    }
}

/// Everything known after looking up every job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// One entry per job, in job list order.
    pub statuses: Vec<JobStatus>,
    pub summary: RunSummary,
}

/// Resolve the latest build of `job`, then classify it.
pub async fn resolve_job<S: ObjectStore>(store: &S, bucket: &str, job: Job) -> Result<JobStatus> {
    let mut status = JobStatus::new(job);
    status.latest_build = resolve_latest_build(store, bucket, status.name()).await?;
    status.outcome = classify(store, bucket, status.name(), &status.latest_build).await?;
    Ok(status)
}

/// Look up every job and compute the run statistics.
///
/// At most `concurrency` jobs are in flight. Results keep the job list
/// order and the first store error aborts the whole run.
pub async fn aggregate<S: ObjectStore>(
    store: &S,
    bucket: &str,
    jobs: Vec<Job>,
    concurrency: usize,
) -> Result<RunReport> {
    info!("Retrieving latest builds and statuses of {} jobs", jobs.len());
    let statuses: Vec<JobStatus> = stream::iter(jobs)
        .map(|job| resolve_job(store, bucket, job))
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    let summary = RunSummary::from_statuses(&statuses);
    info!(
        "{} succeeded, {} failed, {} inactive, {} running",
        summary.succeeded, summary.failed, summary.inactive, summary.running
    );
    Ok(RunReport { statuses, summary })
}
