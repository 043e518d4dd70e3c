//! The record store: one JSON blob holding the whole riff collection.

use riffmaker_domain::{Riff, RIFFS_KEY};

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::retry::{with_retry, RetryOptions};

/// Durable storage of the riff collection under its fixed key.
///
/// Raw reads and writes are retried; parsing is not, since a blob that fails to
/// parse is [`StoreError::Corrupt`] no matter how many times it is reread.
pub struct RiffStore<B> {
    backend: B,
    retry: RetryOptions,
}

impl<B: StorageBackend> RiffStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_retry_options(backend, RetryOptions::default())
    }

    pub fn with_retry_options(backend: B, retry: RetryOptions) -> Self {
        RiffStore { backend, retry }
    }

    /// Load the collection. An absent blob is an empty collection.
    pub async fn load(&self) -> Result<Vec<Riff>, StoreError> {
        let raw = with_retry(&self.retry, || self.backend.get(RIFFS_KEY)).await?;
        match raw {
            None => Ok(Vec::new()),
            Some(json) => serde_json::from_str(&json).map_err(StoreError::Corrupt),
        }
    }

    /// Serialize and write the whole collection, replacing prior contents.
    pub async fn save(&self, riffs: &[Riff]) -> Result<(), StoreError> {
        let json = serde_json::to_string(riffs).map_err(StoreError::Corrupt)?;
        with_retry(&self.retry, || self.backend.set(RIFFS_KEY, &json)).await
    }

    /// Wipe all stored data (the settings screen's "clear everything").
    pub async fn clear(&self) -> Result<(), StoreError> {
        with_retry(&self.retry, || self.backend.clear()).await
    }
}
