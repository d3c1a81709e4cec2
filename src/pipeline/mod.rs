//! The merge pipeline: a fixed sequence of steps run in order.

mod context;
mod errors;
mod step;
pub mod steps;

pub use context::{DurationOutcome, RunContext, RunPaths, RunState};
pub use errors::{PipelineError, PipelineResult, StepError, StepResult};
pub use step::MergeStep;

use steps::{CleanupStep, ConcatStep, DecodeStep, EncodeStep, ManifestStep, ReportStep};

/// Sequential pipeline of merge steps.
pub struct Pipeline {
    steps: Vec<Box<dyn MergeStep>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step (builder pattern).
    pub fn with_step<S: MergeStep + 'static>(mut self, step: S) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// The full merge run: decode, manifest, concat, encode, cleanup, report.
    pub fn standard() -> Self {
        Self::new()
            .with_step(DecodeStep)
            .with_step(ManifestStep)
            .with_step(ConcatStep)
            .with_step(EncodeStep)
            .with_step(CleanupStep)
            .with_step(ReportStep)
    }

    /// Run every step in order. The first step error aborts the run.
    pub fn run(&self, ctx: &RunContext<'_>, state: &mut RunState) -> PipelineResult<()> {
        for step in &self.steps {
            tracing::debug!(step = step.name(), "executing step");
            step.execute(ctx, state).map_err(|e| {
                ctx.logger
                    .error(&format!("Step '{}' failed: {e}", step.name()));
                PipelineError::step_failed(step.name(), e)
            })?;
        }
        Ok(())
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
