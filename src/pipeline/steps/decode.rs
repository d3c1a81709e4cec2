//! Decode step: re-encode each source FLAC to a WAV in the scratch
//! directory and accumulate the total decoded duration.
//!
//! Per-file failures do not abort the run. A file that fails to transcode
//! simply produces no intermediate and a failure line; a file that
//! transcodes but cannot be probed still counts as present, contributing
//! zero to the total.

use crate::discovery;
use crate::metadata;
use crate::pipeline::context::{RunContext, RunState};
use crate::pipeline::errors::StepResult;
use crate::pipeline::step::MergeStep;

pub struct DecodeStep;

impl MergeStep for DecodeStep {
    fn name(&self) -> &str {
        "decode"
    }

    fn execute(&self, ctx: &RunContext<'_>, state: &mut RunState) -> StepResult<()> {
        let sources = discovery::numbered_files(&ctx.paths.source_dir, "flac")?;

        for input in sources {
            let file_name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let output = ctx.paths.scratch_dir.join(format!("{file_name}.wav"));

            ctx.logger.info(&format!(
                "Re-encoding {} to {}",
                input.display(),
                output.display()
            ));

            match ctx.transcoder.transcode(&input, &output) {
                Ok(()) => match metadata::duration_seconds(&output) {
                    Ok(duration) => {
                        state.total_duration += duration;
                        let line = format!(
                            "Re-encoded {} - Duration: {} seconds",
                            output.display(),
                            duration
                        );
                        ctx.logger.info(&line);
                        state.summary.push(line);
                    }
                    Err(e) => {
                        let line =
                            format!("Failed to get duration of {}: {e}", output.display());
                        ctx.logger.warn(&line);
                        state.summary.push(line);
                    }
                },
                Err(e) => {
                    let line = format!("Failed to re-encode {}: {e}", input.display());
                    ctx.logger.warn(&line);
                    state.summary.push(line);
                }
            }
        }

        let line = format!(
            "Total duration of re-encoded files: {} seconds",
            state.total_duration
        );
        ctx.logger.info(&line);
        state.summary.push(line);

        Ok(())
    }
}
