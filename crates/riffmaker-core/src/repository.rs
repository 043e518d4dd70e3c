//! Entity-level operations over the riff collection.
//!
//! Every operation is one load, one in-memory transform, one save. Nothing
//! here synchronizes concurrent callers: if two operations interleave, the
//! second save fully replaces the first (last-writer-wins over the whole
//! collection). Storage errors propagate unchanged; a missing id is never
//! an error.

use riffmaker_domain::{now_ms, Riff};

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::store::RiffStore;

/// CRUD plus duplicate and favorite-toggle over the riff collection.
pub struct RiffRepository<B> {
    store: RiffStore<B>,
}

impl<B: StorageBackend> RiffRepository<B> {
    pub fn new(backend: B) -> Self {
        Self::with_store(RiffStore::new(backend))
    }

    pub fn with_store(store: RiffStore<B>) -> Self {
        RiffRepository { store }
    }

    /// The full collection, newest first.
    pub async fn list(&self) -> Result<Vec<Riff>, StoreError> {
        let mut riffs = self.store.load().await?;
        riffs.sort_by_key(|riff| std::cmp::Reverse(riff.created_at));
        Ok(riffs)
    }

    /// Look up one riff by id.
    pub async fn find(&self, id: &str) -> Result<Option<Riff>, StoreError> {
        let riffs = self.store.load().await?;
        Ok(riffs.into_iter().find(|riff| riff.id == id))
    }

    /// Persist a new riff at the head of the collection.
    ///
    /// The caller assigns `id` and `created_at` (usually via [`Riff::new`]).
    pub async fn create(&self, riff: Riff) -> Result<(), StoreError> {
        let riffs = self.store.load().await?;
        let mut updated = Vec::with_capacity(riffs.len() + 1);
        updated.push(riff);
        updated.extend(riffs);
        self.store.save(&updated).await
    }

    /// Delete by id. Deleting an id that is already gone is a success.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut riffs = self.store.load().await?;
        riffs.retain(|riff| riff.id != id);
        self.store.save(&riffs).await
    }

    /// Replace the riff with the matching id, stamping `updated_at`.
    ///
    /// The stored `created_at` is kept regardless of what the caller passes.
    /// If the id has vanished this is a no-op success; callers must not
    /// assume the write affected anything.
    pub async fn update(&self, riff: Riff) -> Result<(), StoreError> {
        let mut riffs = self.store.load().await?;
        match riffs.iter_mut().find(|existing| existing.id == riff.id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = riff;
                existing.created_at = created_at;
                existing.updated_at = Some(now_ms());
            }
            None => return Ok(()),
        }
        self.store.save(&riffs).await
    }

    /// Duplicate a riff as a brand-new entity and return it.
    ///
    /// `None` when the source id does not exist; the collection is left
    /// untouched and the caller decides how to react.
    pub async fn duplicate(&self, id: &str) -> Result<Option<Riff>, StoreError> {
        let riffs = self.store.load().await?;
        let Some(source) = riffs.iter().find(|riff| riff.id == id) else {
            return Ok(None);
        };
        let copy = source.duplicate_of();
        self.create(copy.clone()).await?;
        Ok(Some(copy))
    }

    /// Flip the favorite state of the matching riff. Absent id is a no-op.
    pub async fn toggle_favorite(&self, id: &str) -> Result<(), StoreError> {
        let mut riffs = self.store.load().await?;
        match riffs.iter_mut().find(|riff| riff.id == id) {
            Some(riff) => {
                riff.favorite = Some(!riff.is_favorite());
                riff.updated_at = Some(now_ms());
            }
            None => return Ok(()),
        }
        self.store.save(&riffs).await
    }

    /// Wipe the whole collection (settings screen's "clear everything").
    pub async fn clear_all(&self) -> Result<(), StoreError> {
        self.store.clear().await
    }
}
