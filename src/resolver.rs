//! Latest build lookup.

use tracing::debug;

use crate::{prelude::*, storage::ObjectStore};

/// Path of the pointer to the latest build of a job.
pub fn latest_build_path(job_name: &str) -> String {
    format!("logs/{job_name}/latest-build.txt")
}

/// Resolve the latest build identifier of `job_name`.
///
/// Returns an empty string when the job has no `latest-build.txt`. The
/// identifier is opaque; only surrounding whitespace is dropped.
pub async fn resolve_latest_build<S: ObjectStore>(
    store: &S,
    bucket: &str,
    job_name: &str,
) -> Result<String> {
    let build = store
        .fetch(bucket, &latest_build_path(job_name))
        .await?
        .map(|content| content.trim().to_string())
        .unwrap_or_default();
    debug!("{job_name} latest build: '{build}'");
    Ok(build)
}
