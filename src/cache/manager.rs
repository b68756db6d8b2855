//! Audio cache for downloaded pronunciations
//!
//! Provides an `AudioCache` that maps a word (and optionally its language) to a
//! file inside the download directory. Existence of that file is the only
//! freshness signal: a present file is never re-validated.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;

use crate::error::ForvoError;

/// How cache file names are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheLayout {
    /// `{dir}/{word}.mp3`; the same word in two languages shares one file
    #[default]
    WordOnly,
    /// `{dir}/{language}/{word}.mp3`
    PerLanguage,
}

/// Manages the directory that downloaded audio files live in
#[derive(Debug, Clone)]
pub struct AudioCache {
    /// Directory where audio files are stored
    dir: PathBuf,
    layout: CacheLayout,
}

impl AudioCache {
    /// Opens a cache rooted at `dir`, creating it and any missing parents
    ///
    /// # Returns
    /// * `Ok(AudioCache)` once the directory exists
    /// * `Err(ForvoError::DirectoryCreation)` if it cannot be created
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ForvoError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ForvoError::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            layout: CacheLayout::default(),
        })
    }

    /// Platform cache directory for downloaded audio (`~/.cache/forvo-dl/audio` on Linux)
    ///
    /// Returns `None` if no home directory can be determined.
    pub fn default_dir() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "forvo-dl")?;
        Some(project_dirs.cache_dir().join("audio"))
    }

    pub fn with_layout(mut self, layout: CacheLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path the audio for `word` is stored at
    ///
    /// Fails with `InvalidName` if the word (or, for `PerLanguage`, the
    /// language) cannot be used as a single path component.
    pub fn audio_path(&self, language: &str, word: &str) -> Result<PathBuf, ForvoError> {
        validate_component(word)?;
        let file_name = format!("{}.mp3", word);
        match self.layout {
            CacheLayout::WordOnly => Ok(self.dir.join(file_name)),
            CacheLayout::PerLanguage => {
                validate_component(language)?;
                Ok(self.dir.join(language).join(file_name))
            }
        }
    }

    /// Returns the cached path if the audio is already on disk
    pub fn lookup(&self, language: &str, word: &str) -> Result<Option<PathBuf>, ForvoError> {
        let path = self.audio_path(language, word)?;
        Ok(path.exists().then_some(path))
    }

    /// Writes `bytes` to `path` through a temp file in the same directory
    ///
    /// The target only appears once the data is fully written, so a failed
    /// write never leaves a truncated file behind.
    pub fn store(&self, path: &Path, bytes: &[u8]) -> Result<(), ForvoError> {
        let write_err = |source: std::io::Error| ForvoError::Write {
            path: path.to_path_buf(),
            source,
        };
        let parent = path.parent().unwrap_or(&self.dir);
        fs::create_dir_all(parent).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
        tmp.write_all(bytes).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

fn validate_component(name: &str) -> Result<(), ForvoError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(ForvoError::InvalidName(name.to_string()));
    }
    Ok(())
}
