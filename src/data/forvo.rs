//! Forvo API client
//!
//! This module looks up pronunciations through the Forvo `word-pronunciations`
//! action, picks the most up-voted sample and stores its MP3 in the audio cache.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use super::transport::{ReqwestTransport, Transport};
use super::PronunciationListing;
use crate::cache::{AudioCache, CacheLayout};
use crate::error::ForvoError;
use crate::observer::{DownloadEvent, DownloadObserver, TracingObserver};

/// Base URL for the Forvo API
pub const FORVO_BASE_URL: &str = "https://apifree.forvo.com";

/// Client for downloading pronunciations from the Forvo API
#[derive(Clone)]
pub struct ForvoClient<T = ReqwestTransport> {
    api_key: String,
    base_url: String,
    cache: AudioCache,
    transport: T,
    observer: Arc<dyn DownloadObserver>,
}

impl ForvoClient<ReqwestTransport> {
    /// Create a client that stores audio under `download_dir`
    ///
    /// The directory and any missing parents are created here.
    ///
    /// # Returns
    /// * `Ok(ForvoClient)` once the download directory exists
    /// * `Err(ForvoError::DirectoryCreation)` if it cannot be created
    pub fn new(
        api_key: impl Into<String>,
        download_dir: impl Into<PathBuf>,
    ) -> Result<Self, ForvoError> {
        Self::with_transport(api_key, download_dir, ReqwestTransport::new())
    }
}

impl<T: Transport> ForvoClient<T> {
    /// Create a client that issues its requests through `transport`
    pub fn with_transport(
        api_key: impl Into<String>,
        download_dir: impl Into<PathBuf>,
        transport: T,
    ) -> Result<Self, ForvoError> {
        Ok(Self {
            api_key: api_key.into(),
            base_url: FORVO_BASE_URL.to_string(),
            cache: AudioCache::open(download_dir)?,
            transport,
            observer: Arc::new(TracingObserver),
        })
    }

    /// Replace the default `TracingObserver`
    pub fn with_observer(mut self, observer: impl DownloadObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Point the client at a different API endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_cache_layout(mut self, layout: CacheLayout) -> Self {
        self.cache = self.cache.with_layout(layout);
        self
    }

    pub fn download_dir(&self) -> &Path {
        self.cache.dir()
    }

    /// Build the request URL for an ordered list of parameters
    ///
    /// Produces `{base}/key/{api_key}/{name}/{value}/...`, percent-encoding
    /// every segment and keeping the parameters in the order given.
    pub fn build_request_url(&self, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}/key/{}", self.base_url, urlencoding::encode(&self.api_key));
        for (name, value) in params {
            url.push('/');
            url.push_str(&urlencoding::encode(name));
            url.push('/');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Fetch the raw pronunciation listing for `word` in `language`
    ///
    /// # Arguments
    /// * `language` - Forvo language code, e.g. "en" or "ru"
    /// * `word` - The word to look up
    /// * `extra` - Additional `name/value` parameters appended after the fixed ones
    ///
    /// # Returns
    /// * `Ok(Value)` - The parsed JSON document
    /// * `Err(ForvoError)` - On network failure, a non-200 status, or a non-JSON body
    pub async fn fetch_pronunciations(
        &self,
        language: &str,
        word: &str,
        extra: &[(&str, &str)],
    ) -> Result<Value, ForvoError> {
        let body = self.fetch_listing_body(language, word, extra).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch and decode the pronunciation listing for `word` in `language`
    pub async fn fetch_listing(
        &self,
        language: &str,
        word: &str,
        extra: &[(&str, &str)],
    ) -> Result<PronunciationListing, ForvoError> {
        let body = self.fetch_listing_body(language, word, extra).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Download the best-rated pronunciation of `word`, reporting failures to the observer
    ///
    /// Returns the path of the audio file, or `None` if anything went wrong.
    pub async fn download_audio(
        &self,
        language: &str,
        word: &str,
        extra: &[(&str, &str)],
    ) -> Option<PathBuf> {
        self.try_download_audio(language, word, extra).await.ok()
    }

    /// Download the best-rated pronunciation of `word`
    ///
    /// If the audio file already exists it is returned without any request.
    /// Every failure is reported to the observer once before being returned.
    pub async fn try_download_audio(
        &self,
        language: &str,
        word: &str,
        extra: &[(&str, &str)],
    ) -> Result<PathBuf, ForvoError> {
        let result = self.download_inner(language, word, extra).await;
        if let Err(error) = &result {
            self.observer.on_event(&DownloadEvent::Failed { word, error });
        }
        result
    }

    async fn download_inner(
        &self,
        language: &str,
        word: &str,
        extra: &[(&str, &str)],
    ) -> Result<PathBuf, ForvoError> {
        if let Some(path) = self.cache.lookup(language, word)? {
            self.observer.on_event(&DownloadEvent::CacheHit { word, path: &path });
            return Ok(path);
        }
        let path = self.cache.audio_path(language, word)?;

        let listing = self.fetch_listing(language, word, extra).await?;
        let best = listing.best().ok_or_else(|| {
            ForvoError::MalformedResponse(format!("no pronunciations listed for '{}'", word))
        })?;
        let audio_url = best.pathmp3.as_deref().ok_or_else(|| {
            ForvoError::MalformedResponse(format!("selected pronunciation for '{}' has no pathmp3", word))
        })?;

        let response = self.transport.get(audio_url).await?;
        if !response.is_ok() {
            return Err(ForvoError::AudioStatus(response.status));
        }

        self.cache.store(&path, &response.body)?;
        self.observer.on_event(&DownloadEvent::Downloaded {
            word,
            path: &path,
            bytes: response.body.len(),
        });
        Ok(path)
    }

    async fn fetch_listing_body(
        &self,
        language: &str,
        word: &str,
        extra: &[(&str, &str)],
    ) -> Result<Vec<u8>, ForvoError> {
        let mut params = vec![
            ("format", "json"),
            ("action", "word-pronunciations"),
            ("word", word),
            ("language", language),
        ];
        params.extend_from_slice(extra);

        let url = self.build_request_url(&params);
        let response = self.transport.get(&url).await?;
        if !response.is_ok() {
            return Err(ForvoError::ListingStatus(response.status));
        }
        Ok(response.body)
    }
}

impl<T> fmt::Debug for ForvoClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForvoClient")
            .field("base_url", &self.base_url)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
