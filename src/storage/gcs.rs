//! Anonymous HTTP access to a public GCS bucket.

use reqwest::{StatusCode, Url};
use tracing::{debug, info};

use super::ObjectStore;
use crate::prelude::*;

/// Error code GCS puts in a 404 body when the bucket itself is unknown.
const NO_SUCH_BUCKET: &str = "NoSuchBucket";

/// Reads objects through the public `storage.googleapis.com` endpoint.
#[derive(Debug, Clone)]
pub struct GcsStore {
    base_url: Url,
    client: reqwest::Client,
}

impl GcsStore {
    /// Creates a store reading from `base_url`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prow_watcher::storage::GcsStore;
    ///
    /// let store = GcsStore::new("https://storage.googleapis.com").unwrap();
    /// assert_eq!(
    ///     store.object_url("test-platform-results", "logs/job/latest-build.txt").as_str(),
    ///     "https://storage.googleapis.com/test-platform-results/logs/job/latest-build.txt"
    /// );
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::ClientBuilder::new().build()?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidStorageUrl {
            url: base_url.to_string(),
            reason,
        };
        let base_url = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }
        Ok(Self { base_url, client })
    }

    /// Full URL of an object.
    ///
    /// The bucket and every `/`-separated segment of `path` are
    /// percent-encoded, so names holding `#`, `?` or `%` address the object
    /// of that exact name.
    pub fn object_url(&self, bucket: &str, path: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(bucket).extend(path.split('/'));
        }
        url
    }
}

impl ObjectStore for GcsStore {
    async fn fetch(&self, bucket: &str, path: &str) -> Result<Option<String>> {
        let url = self.object_url(bucket, path);
        debug!("Fetching {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.text().await?;
            if body.contains(NO_SUCH_BUCKET) {
                return Err(Error::NoSuchBucket {
                    bucket: bucket.to_string(),
                });
            }
            info!("File {path} doesn't seem to exist");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::ObjectStore {
                bucket: bucket.to_string(),
                path: path.to_string(),
                status,
            });
        }
        Ok(Some(response.text().await?))
    }
}
