//! Change notifications for the presentation layer.
//!
//! With the `emitter` feature the controller owns an `EventEmitter` and
//! announces every fetch it starts and how it ended. Listeners receive the
//! payload structs below; they run on the emitter's own threads, so they
//! should hand work back to the UI loop rather than block.
//!
//! Without the feature the notifier is a no-op.

use serde::{Deserialize, Serialize};

#[cfg(feature = "emitter")]
use std::sync::{Mutex, PoisonError};

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

/// Emitted when a page request goes out. Payload: [`FetchStarted`].
pub const LOADING: &str = "gallery.loading";
/// Emitted when a page was applied to the session. Payload: [`PageLoaded`].
pub const LOADED: &str = "gallery.loaded";
/// Emitted when a page request failed. Payload: [`FetchFailed`].
pub const FAILED: &str = "gallery.failed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchStarted {
    pub page: u32,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLoaded {
    pub page: u32,
    pub total_pages: u32,
    /// Records added by this page.
    pub appended: u64,
    /// Records in the session after applying the page.
    pub records: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailed {
    pub page: u32,
    pub message: String,
}

pub(crate) struct Notifier {
    #[cfg(feature = "emitter")]
    emitter: Mutex<EventEmitter>,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        Self {
            #[cfg(feature = "emitter")]
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    #[cfg(feature = "emitter")]
    pub(crate) fn emit<T: Serialize>(&self, event: &str, payload: T) {
        self.emitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .emit(event, payload);
    }

    #[cfg(not(feature = "emitter"))]
    pub(crate) fn emit<T: Serialize>(&self, _event: &str, _payload: T) {}

    #[cfg(feature = "emitter")]
    pub(crate) fn on<T, F>(&self, event: &str, listener: F) -> String
    where
        for<'de> T: Deserialize<'de>,
        F: Fn(T) + Send + Sync + 'static,
    {
        self.emitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on(event, listener)
    }

    #[cfg(feature = "emitter")]
    pub(crate) fn remove(&self, listener_id: &str) -> bool {
        self.emitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove_listener(listener_id)
            .is_some()
    }
}
