//! Debounced autosave for the riff editor.
//!
//! The editor calls [`AutosaveCoordinator::note_edit`] on every keystroke;
//! the coordinator collapses a burst of edits into a single committed
//! `update` once a quiet period passes. Each new edit supersedes the
//! previous pending timer, and disposing the coordinator (screen teardown)
//! suppresses anything still in flight. The snapshot loaded from storage is
//! never committed on its own; only edits handed to `note_edit` are.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;

use riffmaker_domain::{Riff, AUTOSAVE_DEBOUNCE, SAVED_STATUS_DISPLAY};

use crate::backend::StorageBackend;
use crate::repository::RiffRepository;

/// What the editor's save indicator shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutosaveStatus {
    #[default]
    Idle,
    /// An edit is waiting out the debounce window.
    Pending,
    Saving,
    /// Shown briefly after a successful commit, then back to [`Idle`].
    Saved,
    /// The commit failed; the form still holds the unsaved state and the
    /// next edit restarts the debounce, which doubles as the retry trigger.
    Failed,
}

struct Inner<B> {
    repository: Arc<RiffRepository<B>>,
    pending: Mutex<Option<Riff>>,
    /// Bumped on every edit and on dispose; a timer whose generation no
    /// longer matches has been superseded.
    generation: AtomicU64,
    disposed: AtomicBool,
    status: watch::Sender<AutosaveStatus>,
    debounce: Duration,
    saved_display: Duration,
}

impl<B> Inner<B> {
    fn is_current(&self, generation: u64) -> bool {
        !self.disposed.load(Ordering::SeqCst)
            && self.generation.load(Ordering::SeqCst) == generation
    }
}

/// Debounced commit of in-progress edits to one riff.
pub struct AutosaveCoordinator<B: StorageBackend + 'static> {
    inner: Arc<Inner<B>>,
}

impl<B: StorageBackend + 'static> AutosaveCoordinator<B> {
    pub fn new(repository: Arc<RiffRepository<B>>) -> Self {
        Self::with_timing(repository, AUTOSAVE_DEBOUNCE, SAVED_STATUS_DISPLAY)
    }

    pub fn with_timing(
        repository: Arc<RiffRepository<B>>,
        debounce: Duration,
        saved_display: Duration,
    ) -> Self {
        let (status, _) = watch::channel(AutosaveStatus::Idle);
        AutosaveCoordinator {
            inner: Arc::new(Inner {
                repository,
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
                disposed: AtomicBool::new(false),
                status,
                debounce,
                saved_display,
            }),
        }
    }

    /// Watch the save indicator state.
    pub fn status(&self) -> watch::Receiver<AutosaveStatus> {
        self.inner.status.subscribe()
    }

    /// Record the latest form state and restart the debounce timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn note_edit(&self, snapshot: Riff) {
        if self.inner.disposed.load(Ordering::SeqCst) {
            return;
        }
        *self.inner.pending.lock().unwrap() = Some(snapshot);
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.inner.status.send(AutosaveStatus::Pending);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            if !inner.is_current(generation) {
                return;
            }
            let snapshot = inner.pending.lock().unwrap().take();
            let Some(snapshot) = snapshot else { return };

            let _ = inner.status.send(AutosaveStatus::Saving);
            match inner.repository.update(snapshot).await {
                Ok(()) => {
                    if !inner.is_current(generation) {
                        return;
                    }
                    let _ = inner.status.send(AutosaveStatus::Saved);
                    tokio::time::sleep(inner.saved_display).await;
                    if inner.is_current(generation) {
                        let _ = inner.status.send(AutosaveStatus::Idle);
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "autosave commit failed");
                    if inner.is_current(generation) {
                        let _ = inner.status.send(AutosaveStatus::Failed);
                    }
                }
            }
        });
    }

    /// Terminal: suppress any pending timer. Called on screen teardown,
    /// and automatically on drop.
    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::SeqCst);
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl<B: StorageBackend + 'static> Drop for AutosaveCoordinator<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}
