//! Cache module for storing downloaded audio on disk
//!
//! This module provides the audio cache that backs `ForvoClient`. A cached
//! file is identified by its path alone; there is no expiry and no content
//! check. Writes go through a temp file and an atomic rename.

mod manager;

pub use manager::{AudioCache, CacheLayout};
