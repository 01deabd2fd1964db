//! Main Crate Error

use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing argument {0}. Set it on the command line or through its environment variable")]
    MissingArgument(&'static str),

    #[error("Unable to open {path}: {source}")]
    JobList {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error encountered while unmarshalling {path}: {source}")]
    JobListFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Job entry {index} has an empty name")]
    EmptyJobName { index: usize },

    #[error("Object store returned {status} for gs://{bucket}/{path}")]
    ObjectStore {
        bucket: String,
        path: String,
        status: StatusCode,
    },

    #[error("Bucket {bucket} does not exist")]
    NoSuchBucket { bucket: String },

    #[error("Invalid storage URL {url}: {reason}")]
    InvalidStorageUrl { url: String, reason: String },

    #[error("Webhook rejected the message with {status}: {body}")]
    WebhookRejected { status: StatusCode, body: String },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
