//! Cleanup step: remove the intermediate WAVs, the manifest, and the
//! scratch directory.
//!
//! Every removal is best effort. A file that will not delete is warned
//! about and left behind, which in turn makes the final directory removal
//! fail non-fatally. Running against an already-empty or missing scratch
//! directory is not an error.

use std::fs;

use crate::pipeline::context::{RunContext, RunState};
use crate::pipeline::errors::StepResult;
use crate::pipeline::step::MergeStep;

pub struct CleanupStep;

impl MergeStep for CleanupStep {
    fn name(&self) -> &str {
        "cleanup"
    }

    fn execute(&self, ctx: &RunContext<'_>, _state: &mut RunState) -> StepResult<()> {
        let scratch = &ctx.paths.scratch_dir;

        match scratch.read_dir() {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) != Some("wav") {
                        continue;
                    }
                    ctx.logger
                        .info(&format!("Removing temporary file {}", path.display()));
                    if let Err(e) = fs::remove_file(&path) {
                        ctx.logger
                            .warn(&format!("Failed to remove {}: {e}", path.display()));
                    }
                }
            }
            Err(e) => {
                ctx.logger.warn(&format!(
                    "Failed to list scratch directory {}: {e}",
                    scratch.display()
                ));
            }
        }

        if let Err(e) = fs::remove_file(&ctx.paths.manifest_path) {
            ctx.logger.warn(&format!(
                "Failed to remove {}: {e}",
                ctx.paths.manifest_path.display()
            ));
        }

        if let Err(e) = fs::remove_dir(scratch) {
            ctx.logger
                .warn(&format!("Failed to remove {}: {e}", scratch.display()));
        }

        Ok(())
    }
}
