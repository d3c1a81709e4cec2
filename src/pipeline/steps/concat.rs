//! Concat step: stream-copy merge of the manifest entries into one WAV.
//!
//! Tool and probe failures land in the `Failed` arm of the outcome and the
//! step still succeeds; the run carries on to encode whatever exists.

use crate::metadata;
use crate::pipeline::context::{DurationOutcome, RunContext, RunState};
use crate::pipeline::errors::StepResult;
use crate::pipeline::step::MergeStep;

pub struct ConcatStep;

impl MergeStep for ConcatStep {
    fn name(&self) -> &str {
        "concat"
    }

    fn execute(&self, ctx: &RunContext<'_>, state: &mut RunState) -> StepResult<()> {
        ctx.logger.info(&format!(
            "Merging files listed in {} to {}",
            ctx.paths.manifest_path.display(),
            ctx.paths.merged_wav.display()
        ));

        let outcome = match ctx
            .transcoder
            .concat(&ctx.paths.manifest_path, &ctx.paths.merged_wav)
        {
            Ok(()) => match metadata::duration_seconds(&ctx.paths.merged_wav) {
                Ok(duration) => {
                    ctx.logger
                        .info(&format!("Merged file duration: {duration} seconds"));
                    DurationOutcome::Seconds(duration)
                }
                Err(e) => {
                    let message = format!("Failed to get duration of merged file: {e}");
                    ctx.logger.warn(&message);
                    DurationOutcome::Failed(message)
                }
            },
            Err(e) => {
                let message = format!("Failed to merge files: {e}");
                ctx.logger.warn(&message);
                DurationOutcome::Failed(message)
            }
        };

        state
            .summary
            .push(format!("Merged WAV file duration: {outcome} seconds"));

        Ok(())
    }
}
