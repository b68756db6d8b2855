//! Error types for the Forvo client

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while looking up or downloading a pronunciation
#[derive(Debug, Error)]
pub enum ForvoError {
    /// The download directory could not be created
    #[error("Failed to create download directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed at the network level
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The pronunciation listing request returned a non-200 status
    #[error("Failed to retrieve pronunciations JSON, status code: {0}")]
    ListingStatus(u16),

    /// The audio request returned a non-200 status
    #[error("Failed to download audio, status code: {0}")]
    AudioStatus(u16),

    /// The listing was not JSON, had no usable `items`, or was empty
    #[error("Malformed pronunciation listing: {0}")]
    MalformedResponse(String),

    /// Writing the audio file failed
    #[error("Failed to write audio file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A word or language cannot be used as a file name
    #[error("Invalid file name component: '{0}'")]
    InvalidName(String),
}

impl From<serde_json::Error> for ForvoError {
    fn from(err: serde_json::Error) -> Self {
        ForvoError::MalformedResponse(err.to_string())
    }
}

impl ForvoError {
    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ForvoError::ListingStatus(code) | ForvoError::AudioStatus(code) => Some(*code),
            _ => None,
        }
    }
}
