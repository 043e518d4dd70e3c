//! The riff record, the sole persisted entity.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DUPLICATE_SUFFIX, MAX_NOTES_LEN, MAX_TITLE_LEN};
use crate::tuning::Tuning;

/// Current wall clock as integer milliseconds since the epoch.
///
/// All riff timestamps use this representation for wire compatibility with
/// collections persisted by earlier versions of the app.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Generate a fresh riff id: creation time in ms plus a short random suffix.
///
/// Collision-resistant for human-driven creation rates, not cryptographically
/// unique.
pub fn generate_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now_ms(), &suffix[..9])
}

/// A short structured note about a musical idea.
///
/// Serialized with camelCase field names; optional fields are omitted when
/// absent so the JSON matches what existing installs have on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Riff {
    /// Unique, assigned at creation, never changes.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning: Option<Tuning>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Opaque reference to a recorded voice memo. The audio subsystem owns
    /// the resource; we only store and clear the reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    /// Creation time in ms since epoch, immutable.
    pub created_at: i64,
    /// Set on every successful mutation after creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Riff {
    /// A fresh riff with a generated id and creation timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        Riff {
            id: generate_id(),
            title: title.into(),
            bpm: None,
            tuning: None,
            notes: None,
            audio_uri: None,
            favorite: None,
            created_at: now_ms(),
            updated_at: None,
        }
    }

    /// A copy of this riff as a brand-new entity: fresh id, creation and
    /// update timestamps set to now, title marked as a copy, everything
    /// else carried over verbatim.
    pub fn duplicate_of(&self) -> Self {
        let now = now_ms();
        Riff {
            id: generate_id(),
            title: format!("{}{}", self.title, DUPLICATE_SUFFIX),
            created_at: now,
            updated_at: Some(now),
            ..self.clone()
        }
    }

    /// Favorite state, with absence meaning false.
    pub fn is_favorite(&self) -> bool {
        self.favorite.unwrap_or(false)
    }

    /// Check the bounds the editor enforces before persisting.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong(MAX_TITLE_LEN));
        }
        if let Some(notes) = &self.notes {
            if notes.chars().count() > MAX_NOTES_LEN {
                return Err(ValidationError::NotesTooLong(MAX_NOTES_LEN));
            }
        }
        if let Some(bpm) = self.bpm {
            if !bpm.is_finite() || bpm <= 0.0 {
                return Err(ValidationError::InvalidBpm(bpm));
            }
        }
        Ok(())
    }
}

/// Why a riff failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("title exceeds {0} characters")]
    TitleTooLong(usize),

    #[error("notes exceed {0} characters")]
    NotesTooLong(usize),

    #[error("bpm must be a positive finite number, got {0}")]
    InvalidBpm(f64),
}
