use std::collections::{HashMap, HashSet};

use reqwest::StatusCode;

use super::ObjectStore;
use crate::prelude::*;

/// In-memory bucket used by unit tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: HashMap<String, String>,
    broken: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.objects.insert(path.to_string(), content.to_string());
        self
    }

    /// Any fetch of `path` fails as if access was denied.
    pub fn broken(mut self, path: &str) -> Self {
        self.broken.insert(path.to_string());
        self
    }
}

impl ObjectStore for MemoryStore {
    async fn fetch(&self, bucket: &str, path: &str) -> Result<Option<String>> {
        if self.broken.contains(path) {
            return Err(Error::ObjectStore {
                bucket: bucket.to_string(),
                path: path.to_string(),
                status: StatusCode::FORBIDDEN,
            });
        }
        Ok(self.objects.get(path).cloned())
    }
}
