//! Audio metadata introspection via lofty.
//!
//! Used to read back durations after each transcode and to dump the tags
//! and stream properties of the final file. Failures here are always
//! recovered by the caller; nothing in this module is fatal to a run.

use std::io;
use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::prelude::*;
use lofty::probe::Probe;
use thiserror::Error;

/// Metadata read errors.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to read file: {0}")]
    Read(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn probe(path: &Path) -> Result<lofty::file::TaggedFile, MetadataError> {
    // Sniff the format from content, not the extension.
    Probe::open(path)
        .map_err(|e| MetadataError::Read(e.to_string()))?
        .guess_file_type()?
        .read()
        .map_err(|e| MetadataError::Read(e.to_string()))
}

/// Duration of an audio file in fractional seconds.
pub fn duration_seconds(path: &Path) -> Result<f64, MetadataError> {
    let tagged_file = probe(path)?;
    Ok(tagged_file.properties().duration().as_secs_f64())
}

/// Human-readable dump of stream properties and every tag item.
pub fn pretty_dump(path: &Path) -> Result<String, MetadataError> {
    let tagged_file = probe(path)?;
    let properties = tagged_file.properties();

    let mut lines = vec![format!(
        "{:?}, {:.2} seconds, {} Hz, {} channel(s), {} bit",
        tagged_file.file_type(),
        properties.duration().as_secs_f64(),
        properties.sample_rate().unwrap_or(0),
        properties.channels().unwrap_or(0),
        properties.bit_depth().unwrap_or(0),
    )];

    for tag in tagged_file.tags() {
        for item in tag.items() {
            let value = item.value().text().unwrap_or("<binary>");
            lines.push(format!("{:?}={}", item.key(), value));
        }
    }

    Ok(lines.join("\n"))
}
