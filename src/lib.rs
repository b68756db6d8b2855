//! Forvo pronunciation downloader
//!
//! Looks up a word through the Forvo API, picks the most up-voted recording
//! and caches its MP3 on disk. The binary wraps this for command-line use.

pub mod cache;
pub mod cli;
pub mod data;
pub mod error;
pub mod observer;

pub use cache::{AudioCache, CacheLayout};
pub use data::{
    ForvoClient, HttpResponse, PronunciationItem, PronunciationListing, ReqwestTransport,
    Transport, FORVO_BASE_URL,
};
pub use error::ForvoError;
pub use observer::{DownloadEvent, DownloadObserver, TracingObserver};
