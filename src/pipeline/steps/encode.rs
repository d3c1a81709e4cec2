//! Encode step: compress the merged WAV to the final FLAC.

use crate::metadata;
use crate::pipeline::context::{DurationOutcome, RunContext, RunState};
use crate::pipeline::errors::StepResult;
use crate::pipeline::step::MergeStep;

pub struct EncodeStep;

impl MergeStep for EncodeStep {
    fn name(&self) -> &str {
        "encode"
    }

    fn execute(&self, ctx: &RunContext<'_>, state: &mut RunState) -> StepResult<()> {
        ctx.logger.info(&format!(
            "Converting {} to FLAC format as {}",
            ctx.paths.merged_wav.display(),
            ctx.paths.final_flac.display()
        ));

        let outcome = match ctx
            .transcoder
            .encode_flac(&ctx.paths.merged_wav, &ctx.paths.final_flac)
        {
            Ok(()) => match metadata::duration_seconds(&ctx.paths.final_flac) {
                Ok(duration) => {
                    ctx.logger
                        .info(&format!("Converted file duration: {duration} seconds"));
                    DurationOutcome::Seconds(duration)
                }
                Err(e) => {
                    let message = format!("Failed to get duration of converted file: {e}");
                    ctx.logger.warn(&message);
                    DurationOutcome::Failed(message)
                }
            },
            Err(e) => {
                let message = format!(
                    "Failed to convert {} to FLAC: {e}",
                    ctx.paths.merged_wav.display()
                );
                ctx.logger.warn(&message);
                DurationOutcome::Failed(message)
            }
        };

        state
            .summary
            .push(format!("Final FLAC file duration: {outcome} seconds"));

        Ok(())
    }
}
