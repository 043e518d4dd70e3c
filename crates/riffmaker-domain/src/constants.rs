//! Fixed configuration constants.
//!
//! All tunables are compile-time constants; there is no environment or
//! file-based configuration surface.

use std::time::Duration;

/// Storage key for the serialized riff collection.
pub const RIFFS_KEY: &str = "@riffmaker:riffs";

/// Storage key for user preferences (sort order, onboarding state).
pub const PREFERENCES_KEY: &str = "@riffmaker:preferences";

/// Maximum riff title length, in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum notes length, in characters.
pub const MAX_NOTES_LEN: usize = 500;

/// Voice memo recordings are capped at one minute.
pub const MAX_RECORDING_SECONDS: u32 = 60;

/// Quiet period after the last edit before the editor autosaves.
pub const AUTOSAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// How long the "saved" indicator stays visible before reverting to idle.
pub const SAVED_STATUS_DISPLAY: Duration = Duration::from_secs(2);

/// Appended to the title when a riff is duplicated.
pub const DUPLICATE_SUFFIX: &str = " (cópia)";
