//! Manifest step: write the ordered concat list for ffmpeg.
//!
//! The scratch directory is re-scanned rather than carrying the decode
//! step's list forward, so only intermediates that actually exist get a
//! manifest entry. Ordering uses the same numeric-prefix rule as the
//! sources; the decode output names keep their prefix.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::discovery;
use crate::pipeline::context::{RunContext, RunState};
use crate::pipeline::errors::StepResult;
use crate::pipeline::step::MergeStep;

pub struct ManifestStep;

impl MergeStep for ManifestStep {
    fn name(&self) -> &str {
        "manifest"
    }

    fn execute(&self, ctx: &RunContext<'_>, _state: &mut RunState) -> StepResult<()> {
        let intermediates = discovery::numbered_files(&ctx.paths.scratch_dir, "wav")?;

        let mut writer = BufWriter::new(File::create(&ctx.paths.manifest_path)?);
        for path in &intermediates {
            ctx.logger
                .info(&format!("Adding {} to list", path.display()));
            // ffmpeg concat demuxer entry syntax.
            writeln!(writer, "file '{}'", path.display())?;
        }
        writer.flush()?;

        ctx.logger.info(&format!(
            "Created list file with {} entries",
            intermediates.len()
        ));

        Ok(())
    }
}
