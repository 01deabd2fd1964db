//! Read access to the results bucket.
//!
//! The watcher only ever needs two things from the store: the content of an
//! object, or the knowledge that the object is not there. Absence is a
//! normal answer ([`None`]); every other failure is an [`Error`] and ends
//! the run.

pub mod gcs;
#[cfg(test)]
pub(crate) mod memory;

use std::future::Future;

use crate::prelude::*;

pub use gcs::GcsStore;

/// Object store holding the job results.
pub trait ObjectStore {
    /// Fetch `path` from `bucket` as text.
    ///
    /// Returns `Ok(None)` when the object does not exist.
    fn fetch(&self, bucket: &str, path: &str)
    -> impl Future<Output = Result<Option<String>>> + Send;
}
