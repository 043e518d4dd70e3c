//! User preferences, persisted as their own blob.

use serde::{Deserialize, Serialize};

use riffmaker_domain::PREFERENCES_KEY;

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::query::SortOption;
use crate::retry::{with_retry, RetryOptions};

/// The handful of settings the app remembers between launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub sort_by: SortOption,
    pub onboarding_completed: bool,
}

/// Storage for [`Preferences`] under its fixed key.
pub struct PreferencesStore<B> {
    backend: B,
    retry: RetryOptions,
}

impl<B: StorageBackend> PreferencesStore<B> {
    pub fn new(backend: B) -> Self {
        PreferencesStore {
            backend,
            retry: RetryOptions::default(),
        }
    }

    /// Load stored preferences, falling back to defaults when absent.
    pub async fn load(&self) -> Result<Preferences, StoreError> {
        let raw = with_retry(&self.retry, || self.backend.get(PREFERENCES_KEY)).await?;
        match raw {
            None => Ok(Preferences::default()),
            Some(json) => serde_json::from_str(&json).map_err(StoreError::Corrupt),
        }
    }

    pub async fn save(&self, preferences: &Preferences) -> Result<(), StoreError> {
        let json = serde_json::to_string(preferences).map_err(StoreError::Corrupt)?;
        with_retry(&self.retry, || self.backend.set(PREFERENCES_KEY, &json)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    #[tokio::test]
    async fn absent_preferences_are_defaults() {
        let store = PreferencesStore::new(MemoryBackend::new());
        assert_eq!(store.load().await.unwrap(), Preferences::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = PreferencesStore::new(MemoryBackend::new());
        let prefs = Preferences {
            sort_by: SortOption::BpmDesc,
            onboarding_completed: true,
        };
        store.save(&prefs).await.unwrap();
        assert_eq!(store.load().await.unwrap(), prefs);
    }

    #[tokio::test]
    async fn partial_blob_fills_in_defaults() {
        let backend = MemoryBackend::new();
        backend
            .set(PREFERENCES_KEY, r#"{"sortBy":"name-asc"}"#)
            .await
            .unwrap();
        let store = PreferencesStore::new(backend);

        let prefs = store.load().await.unwrap();
        assert_eq!(prefs.sort_by, SortOption::NameAsc);
        assert!(!prefs.onboarding_completed);
    }
}
