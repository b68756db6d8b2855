//! Command-line interface parsing for forvo-dl
//!
//! This module handles parsing of CLI arguments using clap, including the
//! repeatable `--param NAME=VALUE` option for extra API parameters.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::cache::{AudioCache, CacheLayout};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// A `--param` value is not of the form NAME=VALUE
    #[error("Invalid parameter: '{0}'. Expected NAME=VALUE, e.g. sex=f")]
    InvalidParam(String),

    /// No `--dir` was given and no platform cache directory exists
    #[error("Could not determine a download directory; pass --dir")]
    NoDownloadDir,
}

/// forvo-dl - Download the best-rated Forvo pronunciation of each word
#[derive(Parser, Debug)]
#[command(name = "forvo-dl")]
#[command(about = "Download the most up-voted Forvo pronunciation for each word")]
#[command(version)]
pub struct Cli {
    /// Forvo API key
    #[arg(long, env = "FORVO_API_KEY", hide_env_values = true)]
    pub key: String,

    /// Directory to store MP3 files in (defaults to the user cache directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Forvo language code
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Keep a separate file per language instead of one per word
    #[arg(long)]
    pub per_language: bool,

    /// Extra API parameter appended to the request
    ///
    /// Examples:
    ///   forvo-dl --param sex=f hello
    ///   forvo-dl --param country=GBR --param order=rate-desc hello
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param_arg)]
    pub params: Vec<(String, String)>,

    /// Words to download, one after another
    #[arg(required = true)]
    pub words: Vec<String>,
}

/// Settings derived from CLI arguments for the download run
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub download_dir: PathBuf,
    pub layout: CacheLayout,
}

/// Parses a `NAME=VALUE` argument into its two parts.
///
/// The value may itself contain `=`; only the first one splits.
pub fn parse_param_arg(s: &str) -> Result<(String, String), CliError> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(CliError::InvalidParam(s.to_string())),
    }
}

impl DownloadConfig {
    /// Creates a DownloadConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(DownloadConfig)` with the directory and cache layout to use
    /// * `Err(CliError::NoDownloadDir)` if no directory was given and none can be derived
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let download_dir = match &cli.dir {
            Some(dir) => dir.clone(),
            None => AudioCache::default_dir().ok_or(CliError::NoDownloadDir)?,
        };
        let layout = if cli.per_language {
            CacheLayout::PerLanguage
        } else {
            CacheLayout::WordOnly
        };
        Ok(DownloadConfig {
            download_dir,
            layout,
        })
    }
}

impl Cli {
    /// Extra parameters as borrowed pairs, in the order given
    pub fn extra_params(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}
