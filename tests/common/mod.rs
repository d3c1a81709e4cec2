//! Shared test support: a fake transcoder and WAV fixture generation.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use flacmerge::tools::{ToolError, Transcoder};

pub const SAMPLE_RATE: u32 = 44100;

/// Write a minimal valid mono 16-bit PCM WAV of the given length.
pub fn write_wav(path: &Path, seconds: f64) {
    let num_samples = (seconds * SAMPLE_RATE as f64).round() as u32;
    let data_len = num_samples * 2;

    let mut file = File::create(path).unwrap();
    file.write_all(b"RIFF").unwrap();
    file.write_all(&(36 + data_len).to_le_bytes()).unwrap();
    file.write_all(b"WAVE").unwrap();
    file.write_all(b"fmt ").unwrap();
    file.write_all(&16u32.to_le_bytes()).unwrap();
    file.write_all(&1u16.to_le_bytes()).unwrap(); // PCM
    file.write_all(&1u16.to_le_bytes()).unwrap(); // mono
    file.write_all(&SAMPLE_RATE.to_le_bytes()).unwrap();
    file.write_all(&(SAMPLE_RATE * 2).to_le_bytes()).unwrap();
    file.write_all(&2u16.to_le_bytes()).unwrap();
    file.write_all(&16u16.to_le_bytes()).unwrap();
    file.write_all(b"data").unwrap();
    file.write_all(&data_len.to_le_bytes()).unwrap();
    file.write_all(&vec![0u8; data_len as usize]).unwrap();
}

fn simulated_failure(message: &str) -> ToolError {
    ToolError::CommandFailed {
        tool: "ffmpeg".to_string(),
        exit_code: 1,
        message: message.to_string(),
    }
}

/// Transcoder double that writes real WAV fixtures instead of running
/// ffmpeg. Failures are injected per source filename or per operation.
#[derive(Default)]
pub struct FakeTranscoder {
    /// Duration given to every decoded WAV, in seconds.
    pub wav_seconds: f64,
    /// Source filenames whose transcode should exit non-zero.
    pub fail_transcode_of: Vec<String>,
    /// Source filenames whose transcode succeeds but emits an unreadable
    /// output file.
    pub write_garbage_for: Vec<String>,
    pub fail_concat: bool,
    pub fail_encode: bool,
}

impl FakeTranscoder {
    pub fn new(wav_seconds: f64) -> Self {
        Self {
            wav_seconds,
            ..Default::default()
        }
    }
}

impl Transcoder for FakeTranscoder {
    fn transcode(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        let name = input.file_name().unwrap().to_string_lossy().into_owned();
        if self.fail_transcode_of.contains(&name) {
            return Err(simulated_failure("simulated transcode failure"));
        }
        if self.write_garbage_for.contains(&name) {
            fs::write(output, b"not audio at all").unwrap();
            return Ok(());
        }
        write_wav(output, self.wav_seconds);
        Ok(())
    }

    fn concat(&self, manifest: &Path, output: &Path) -> Result<(), ToolError> {
        if self.fail_concat {
            return Err(simulated_failure("simulated concat failure"));
        }

        let content = fs::read_to_string(manifest)
            .map_err(|e| simulated_failure(&format!("cannot read manifest: {e}")))?;

        let mut total_seconds = 0.0;
        let mut entries = 0usize;
        for line in content.lines() {
            let path = line
                .strip_prefix("file '")
                .and_then(|rest| rest.strip_suffix('\''))
                .unwrap_or_else(|| panic!("malformed manifest line: {line}"));
            let data_len = fs::metadata(path)
                .map_err(|e| simulated_failure(&format!("missing entry {path}: {e}")))?
                .len()
                .saturating_sub(44);
            total_seconds += data_len as f64 / 2.0 / SAMPLE_RATE as f64;
            entries += 1;
        }

        // ffmpeg exits non-zero when the concat list has no entries.
        if entries == 0 {
            return Err(simulated_failure("manifest is empty"));
        }

        write_wav(output, total_seconds);
        Ok(())
    }

    fn encode_flac(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        if self.fail_encode {
            return Err(simulated_failure("simulated encode failure"));
        }
        fs::copy(input, output)
            .map_err(|e| simulated_failure(&format!("cannot read {}: {e}", input.display())))?;
        Ok(())
    }
}
