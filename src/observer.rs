//! Download lifecycle events
//!
//! The client never logs on its own. It reports what happened to a
//! `DownloadObserver` supplied at construction; `TracingObserver` is the
//! default and forwards everything to `tracing`.

use std::path::Path;
use std::sync::Arc;

use crate::error::ForvoError;

/// Something that happened during a download call
#[derive(Debug)]
pub enum DownloadEvent<'a> {
    /// The audio file already existed; no request was made
    CacheHit { word: &'a str, path: &'a Path },
    /// The audio file was fetched and written
    Downloaded {
        word: &'a str,
        path: &'a Path,
        bytes: usize,
    },
    /// The call failed; the error is terminal for this call
    Failed { word: &'a str, error: &'a ForvoError },
}

/// Receives download events from a `ForvoClient`
pub trait DownloadObserver: Send + Sync {
    fn on_event(&self, event: &DownloadEvent<'_>);
}

impl<T: DownloadObserver + ?Sized> DownloadObserver for Arc<T> {
    fn on_event(&self, event: &DownloadEvent<'_>) {
        (**self).on_event(event)
    }
}

/// Default observer: info on success, error on failure
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DownloadObserver for TracingObserver {
    fn on_event(&self, event: &DownloadEvent<'_>) {
        match event {
            DownloadEvent::CacheHit { word, path } => {
                tracing::info!(word, path = %path.display(), "Audio for word '{}' already exists", word);
            }
            DownloadEvent::Downloaded { word, path, bytes } => {
                tracing::info!(word, path = %path.display(), bytes, "Downloaded audio for word '{}'", word);
            }
            DownloadEvent::Failed { word, error } => match error.status() {
                Some(status) => tracing::error!(word, status, "{}", error),
                None => tracing::error!(word, "{}", error),
            },
        }
    }
}
