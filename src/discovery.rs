//! Source file discovery and ordering.
//!
//! Track order is taken from the leading whitespace-delimited numeric token
//! of each filename ("1 intro.flac", "2 verse.flac", ...). A matching file
//! whose first token is not a number cannot be placed in the sequence, and
//! that is a hard error: silently guessing an order would corrupt the merge.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from scanning a directory for numbered files.
#[derive(Error, Debug)]
pub enum OrderingError {
    #[error("cannot order '{name}': filename does not start with a number")]
    BadPrefix { name: String },

    #[error("failed to list directory: {0}")]
    Io(#[from] io::Error),
}

/// List the files in `dir` with the given extension, sorted ascending by
/// their leading numeric token. Ties keep directory order.
pub fn numbered_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, OrderingError> {
    let mut numbered: Vec<(i64, PathBuf)> = Vec::new();

    for entry in dir.read_dir()? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let number = name
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<i64>().ok())
            .ok_or_else(|| OrderingError::BadPrefix { name: name.clone() })?;

        numbered.push((number, path));
    }

    numbered.sort_by_key(|(number, _)| *number);
    Ok(numbered.into_iter().map(|(_, path)| path).collect())
}
