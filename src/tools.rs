//! External transcoder invocation.
//!
//! All audio conversion is delegated to ffmpeg, run as a blocking child
//! process. The [`Transcoder`] trait is the seam between the pipeline and
//! the binary, so tests can substitute a fake without spawning anything.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors from running an external tool.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The tool ran and exited non-zero.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    /// The tool could not be started at all.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
}

/// The external transcoding capability the pipeline depends on.
pub trait Transcoder: Send + Sync {
    /// Convert `input` to `output`, with the format inferred from the
    /// output extension (used for the FLAC to WAV step).
    fn transcode(&self, input: &Path, output: &Path) -> Result<(), ToolError>;

    /// Stream-copy concatenate the files listed in `manifest` into `output`.
    fn concat(&self, manifest: &Path, output: &Path) -> Result<(), ToolError>;

    /// Encode `input` to FLAC at `output`.
    fn encode_flac(&self, input: &Path, output: &Path) -> Result<(), ToolError>;
}

/// [`Transcoder`] backed by the ffmpeg binary.
///
/// Invocations block until ffmpeg exits; no timeout is enforced, so a hung
/// ffmpeg hangs the run.
pub struct FfmpegRunner {
    binary: PathBuf,
}

impl FfmpegRunner {
    /// Runner using `ffmpeg` from `PATH`.
    pub fn new() -> Self {
        Self::with_binary("ffmpeg")
    }

    /// Runner using an explicit binary path.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn run(&self, args: &[&OsStr]) -> Result<(), ToolError> {
        let tool = self.binary.to_string_lossy().into_owned();
        tracing::debug!(tool = %tool, ?args, "running external tool");

        let output = Command::new(&self.binary)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| ToolError::Spawn {
                tool: tool.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ToolError::CommandFailed {
                tool,
                exit_code: output.status.code().unwrap_or(-1),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for FfmpegRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcoder for FfmpegRunner {
    fn transcode(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        self.run(&[
            OsStr::new("-i"),
            input.as_os_str(),
            output.as_os_str(),
        ])
    }

    fn concat(&self, manifest: &Path, output: &Path) -> Result<(), ToolError> {
        self.run(&[
            OsStr::new("-f"),
            OsStr::new("concat"),
            OsStr::new("-safe"),
            OsStr::new("0"),
            OsStr::new("-i"),
            manifest.as_os_str(),
            OsStr::new("-c"),
            OsStr::new("copy"),
            output.as_os_str(),
        ])
    }

    fn encode_flac(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        self.run(&[
            OsStr::new("-i"),
            input.as_os_str(),
            OsStr::new("-c:a"),
            OsStr::new("flac"),
            output.as_os_str(),
        ])
    }
}
