//! riffmaker-core: the persistence and data-consistency layer for Riff Maker.
//!
//! The whole riff collection is persisted as one JSON blob under a fixed
//! storage key. Entity-level operations are read-modify-write cycles over
//! that blob: one load, one in-memory transform, one save. There is no
//! locking and no per-record versioning: the app is single-process and
//! single-editor, and the last completed write wins.
//!
//! Layers, bottom up:
//! - [`backend`]: durable key-value storage behind an async trait.
//! - [`retry`]: fixed-delay retry for transient storage failures.
//! - [`store`]: the riff collection blob, serialized and retried.
//! - [`repository`]: CRUD plus duplicate and favorite-toggle.
//! - [`query`]: pure filtering and ordering for display.
//! - [`preferences`]: the user preferences blob.
//! - [`autosave`]: debounced commit of in-progress edits.

pub mod autosave;
pub mod backend;
pub mod error;
pub mod preferences;
pub mod query;
pub mod repository;
pub mod retry;
pub mod store;

pub use autosave::*;
pub use backend::*;
pub use error::*;
pub use preferences::*;
pub use query::*;
pub use repository::*;
pub use retry::*;
pub use store::*;
