//! Errors from the storage layer.
//!
//! Not-found conditions are deliberately absent: operations addressed by id
//! resolve missing entities as no-op successes or `Option::None`, never as
//! errors.

/// Errors from the record store and everything built on it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage medium could not complete a read or write, even after
    /// retries. In-memory state is unchanged; the user may retry.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The stored blob could not be parsed as a riff collection. Never
    /// retried and never auto-repaired; callers must not discard the blob.
    #[error("stored data is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}
