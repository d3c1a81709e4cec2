//! Report step: dump the final file's metadata, close out the summary,
//! and write it to disk.
//!
//! Writing the summary file is the one fatal filesystem operation left at
//! this point; everything before it has already been recovered into lines.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::metadata;
use crate::pipeline::context::{RunContext, RunState};
use crate::pipeline::errors::StepResult;
use crate::pipeline::step::MergeStep;

pub struct ReportStep;

impl MergeStep for ReportStep {
    fn name(&self) -> &str {
        "report"
    }

    fn execute(&self, ctx: &RunContext<'_>, state: &mut RunState) -> StepResult<()> {
        let final_flac = &ctx.paths.final_flac;

        let dump = match metadata::pretty_dump(final_flac) {
            Ok(info) => {
                ctx.logger.info(&format!(
                    "Metadata dump for {}: {info}",
                    final_flac.display()
                ));
                info
            }
            Err(e) => {
                ctx.logger.warn(&format!(
                    "Failed to dump metadata for {}: {e}",
                    final_flac.display()
                ));
                format!("Failed to dump metadata: {e}")
            }
        };
        state
            .summary
            .push(format!("Metadata dump for {}: {dump}", final_flac.display()));

        state
            .summary
            .push(format!("Expected duration: {} seconds", state.total_duration));

        ctx.logger.info("Process completed.");
        state.summary.push("Process completed.".to_string());

        let mut writer = BufWriter::new(File::create(&ctx.paths.summary_path)?);
        for line in &state.summary {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        ctx.logger.info(&format!(
            "Summary written to {}",
            ctx.paths.summary_path.display()
        ));

        Ok(())
    }
}
