//! Build result classification.
//!
//! A build is only terminal once its `finished.json` carries a `result` of
//! exactly `SUCCESS` or `FAILURE`. Anything else, including a missing or
//! unreadable file, counts as still running.

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    job::{Outcome, Pending},
    prelude::*,
    storage::ObjectStore,
};

const SUCCESS: &str = "SUCCESS";
const FAILURE: &str = "FAILURE";

/// Path of the result file of a build.
pub fn finished_path(job_name: &str, build: &str) -> String {
    format!("logs/{job_name}/{build}/finished.json")
}

/// Classify the content of a `finished.json` file.
pub fn parse_outcome(content: &str) -> Outcome {
    let Ok(value) = serde_json::from_str::<Value>(content) else {
        return Outcome::Running(Pending::Malformed);
    };
    match value.get("result").and_then(Value::as_str) {
        Some(SUCCESS) => Outcome::Succeeded,
        Some(FAILURE) => Outcome::Failed,
        Some(other) => Outcome::Running(Pending::Unrecognized(other.to_string())),
        None => Outcome::Running(Pending::Malformed),
    }
}

/// Classify build `build` of `job_name`.
///
/// An empty `build` is still looked up; the lookup then misses and the job
/// is reported as having no build.
pub async fn classify<S: ObjectStore>(
    store: &S,
    bucket: &str,
    job_name: &str,
    build: &str,
) -> Result<Outcome> {
    let outcome = match store.fetch(bucket, &finished_path(job_name, build)).await? {
        Some(content) => parse_outcome(&content),
        None if build.is_empty() => Outcome::Running(Pending::NoBuild),
        None => Outcome::Running(Pending::InProgress),
    };

    match &outcome {
        Outcome::Running(Pending::Malformed | Pending::Unrecognized(_)) => {
            warn!("{job_name} build {build} counted as running: {outcome}")
        }
        _ => debug!("{job_name} build {build}: {outcome}"),
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn result_file_path() {
        assert_eq!(
            finished_path("job-a", "100"),
            "logs/job-a/100/finished.json"
        );
        assert_eq!(finished_path("job-a", ""), "logs/job-a//finished.json");
    }

    #[test]
    fn terminal_results() {
        assert_eq!(
            parse_outcome(r#"{"timestamp": 1700000000, "passed": true, "result": "SUCCESS"}"#),
            Outcome::Succeeded
        );
        assert_eq!(parse_outcome(r#"{"result": "FAILURE"}"#), Outcome::Failed);
    }

    #[test]
    fn other_results_are_running() {
        assert_eq!(
            parse_outcome(r#"{"result": "ABORTED"}"#),
            Outcome::Running(Pending::Unrecognized("ABORTED".to_string()))
        );
        assert_eq!(
            parse_outcome(r#"{"result": ""}"#),
            Outcome::Running(Pending::Unrecognized(String::new()))
        );
        assert_eq!(
            parse_outcome(r#"{"result": "success"}"#),
            Outcome::Running(Pending::Unrecognized("success".to_string()))
        );
    }

    #[test]
    fn unreadable_results_are_running() {
        assert_eq!(parse_outcome(""), Outcome::Running(Pending::Malformed));
        assert_eq!(parse_outcome("{not json"), Outcome::Running(Pending::Malformed));
        assert_eq!(
            parse_outcome(r#"{"passed": false}"#),
            Outcome::Running(Pending::Malformed)
        );
        assert_eq!(
            parse_outcome(r#"{"result": 1}"#),
            Outcome::Running(Pending::Malformed)
        );
    }

    #[tokio::test]
    async fn missing_result_file() -> Result<()> {
        let store = MemoryStore::new();
        assert_eq!(
            classify(&store, "bucket", "job-a", "100").await?,
            Outcome::Running(Pending::InProgress)
        );
        assert_eq!(
            classify(&store, "bucket", "job-a", "").await?,
            Outcome::Running(Pending::NoBuild)
        );
        Ok(())
    }

    #[tokio::test]
    async fn fetched_result_file() -> Result<()> {
        let store = MemoryStore::new()
            .with("logs/job-a/100/finished.json", r#"{"result": "FAILURE"}"#);
        assert_eq!(classify(&store, "bucket", "job-a", "100").await?, Outcome::Failed);
        Ok(())
    }
}
