//! flacmerge - joins a numbered sequence of FLAC files into one FLAC file.
//!
//! The run is a fixed sequence of stages: each source file is re-encoded to
//! WAV, the WAVs are listed in a concat manifest, joined with a stream copy,
//! encoded back to FLAC, and a plain-text summary of the run is written next
//! to the final file. All transcoding is delegated to ffmpeg.

pub mod config;
pub mod discovery;
pub mod logging;
pub mod metadata;
pub mod pipeline;
pub mod tools;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
