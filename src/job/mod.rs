//! Job list and per-run job state.

use std::{collections::HashSet, fmt, path::Path};

use serde::Deserialize;
use tracing::{info, warn};

use crate::prelude::*;

/// A job entry from the job list file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    /// Prow job name, used to build the result paths.
    #[serde(rename = "Job_Name", alias = "job_name", alias = "name")]
    pub name: String,
    /// Whether the job is expected to run at all.
    #[serde(rename = "Active", alias = "active", default)]
    pub active: bool,
}

impl Job {
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }
}

/// Why a job has no terminal result yet.
///
/// Every variant is reported as "running"; the reason only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    /// No `latest-build.txt` for the job.
    NoBuild,
    /// The build has no `finished.json` yet.
    InProgress,
    /// `finished.json` is not JSON or carries no string `result`.
    Malformed,
    /// `result` holds something other than `SUCCESS` or `FAILURE`.
    Unrecognized(String),
}

/// Classification of the latest build of a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    Running(Pending),
}

impl Outcome {
    pub fn is_running(&self) -> bool {
        matches!(self, Outcome::Running(_))
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Running(Pending::InProgress)
    }
}

/// A job together with what was found for it in the results bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatus {
    pub job: Job,
    /// Latest build identifier, empty when no build was found.
    pub latest_build: String,
    pub outcome: Outcome,
}

impl JobStatus {
    /// Fresh state for a job: no build known, outcome pending.
    pub fn new(job: Job) -> Self {
        Self {
            job,
            latest_build: String::new(),
            outcome: Outcome::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.job.name
    }

    pub fn is_active(&self) -> bool {
        self.job.active
    }

    /// Active job whose latest build has no terminal result.
    ///
    /// Inactive jobs are never reported as running.
    pub fn is_running(&self) -> bool {
        self.job.active && self.outcome.is_running()
    }

    /// Active job without a successful latest build.
    pub fn is_failing(&self) -> bool {
        self.job.active && !self.outcome.is_succeeded()
    }
}

impl fmt::Display for Pending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pending::NoBuild => write!(f, "no build found"),
            Pending::InProgress => write!(f, "build in progress"),
            Pending::Malformed => write!(f, "unreadable result file"),
            Pending::Unrecognized(result) => write!(f, "unrecognized result '{result}'"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Succeeded => write!(f, "succeeded"),
            Outcome::Failed => write!(f, "failed"),
            Outcome::Running(reason) => write!(f, "running ({reason})"),
        }
    }
}

/// Parse a job list from its JSON text.
pub fn parse_jobs(content: &str) -> serde_json::Result<Vec<Job>> {
    serde_json::from_str(content)
}

/// Load the job list file.
///
/// Fails on an unreadable file, malformed JSON or a job without a name.
/// Duplicate names are kept but reported.
pub fn load_jobs(path: &Path) -> Result<Vec<Job>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::JobList {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Successfully opened {}", path.display());

    let jobs = parse_jobs(&content).map_err(|source| Error::JobListFormat {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for (index, job) in jobs.iter().enumerate() {
        if job.name.trim().is_empty() {
            return Err(Error::EmptyJobName { index });
        }
        if !seen.insert(job.name.as_str()) {
            warn!("Job {} is listed more than once", job.name);
        }
    }
    info!("Loaded {} jobs", jobs.len());
    Ok(jobs)
}
