//! Run context and accumulating state shared by the pipeline steps.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::logging::RunLogger;
use crate::tools::Transcoder;

/// Every path the run touches, resolved once up front.
#[derive(Debug, Clone)]
pub struct RunPaths {
    /// Directory holding the numbered source FLAC files.
    pub source_dir: PathBuf,
    /// Scratch directory for intermediate WAVs, under the source directory.
    pub scratch_dir: PathBuf,
    /// Concat manifest inside the scratch directory.
    pub manifest_path: PathBuf,
    /// Merged intermediate WAV inside the scratch directory.
    pub merged_wav: PathBuf,
    /// Final FLAC output.
    pub final_flac: PathBuf,
    /// Plain-text run summary next to the final output.
    pub summary_path: PathBuf,
}

impl RunPaths {
    pub fn from_settings(settings: &Settings) -> Self {
        let scratch_dir = settings.source_folder.join("temp");
        Self {
            source_dir: settings.source_folder.clone(),
            manifest_path: scratch_dir.join("wav_list.txt"),
            merged_wav: scratch_dir.join("merged_file.wav"),
            final_flac: settings.output_folder.join(&settings.output_filename),
            summary_path: settings.output_folder.join("merge_summary.txt"),
            scratch_dir,
        }
    }
}

/// Read-only context passed to every step.
pub struct RunContext<'a> {
    pub paths: RunPaths,
    pub logger: Arc<RunLogger>,
    pub transcoder: &'a dyn Transcoder,
}

/// Mutable state accumulated across steps: the ordered summary lines and
/// the running total of successfully decoded duration.
#[derive(Debug, Default)]
pub struct RunState {
    pub summary: Vec<String>,
    pub total_duration: f64,
}

/// Duration of a produced file, or the failure that stood in its way.
///
/// Either arm is formatted straight into log and summary text, so a failed
/// merge reads "Merged WAV file duration: Failed to merge files: ... seconds"
/// exactly where a number would appear.
#[derive(Debug)]
pub enum DurationOutcome {
    Seconds(f64),
    Failed(String),
}

impl fmt::Display for DurationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationOutcome::Seconds(seconds) => write!(f, "{seconds}"),
            DurationOutcome::Failed(message) => write!(f, "{message}"),
        }
    }
}
