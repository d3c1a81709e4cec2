//! Run configuration loaded from a TOML file.
//!
//! The config names the source folder, the output folder, and the final
//! output filename. All three keys are required; a missing key is a parse
//! error and ends the run before any work starts.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading the config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Read(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Raw config file contents. Paths stay as written by the operator.
#[derive(Debug, Deserialize)]
struct RawConfig {
    source_folder: String,
    output_folder: String,
    output_filename: String,
}

/// Resolved run settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the numbered source FLAC files.
    pub source_folder: PathBuf,
    /// Directory receiving the final FLAC and the run summary.
    pub output_folder: PathBuf,
    /// Name of the final FLAC file inside `output_folder`.
    pub output_filename: String,
}

/// Load settings from a TOML config file.
///
/// Relative folder paths are resolved against the current working directory
/// at load time. No existence checks are made here; a bad source folder
/// surfaces later as an ordinary stage failure.
pub fn load(config_path: impl AsRef<Path>) -> ConfigResult<Settings> {
    let config_path = config_path.as_ref();
    if !config_path.exists() {
        return Err(ConfigError::NotFound(config_path.to_path_buf()));
    }

    let content = fs::read_to_string(config_path)?;
    let raw: RawConfig = toml::from_str(&content)?;

    Ok(Settings {
        source_folder: absolutize(&raw.source_folder)?,
        output_folder: absolutize(&raw.output_folder)?,
        output_filename: raw.output_filename,
    })
}

/// Resolve a possibly-relative path against the working directory.
fn absolutize(path: &str) -> io::Result<PathBuf> {
    let path = Path::new(path);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
