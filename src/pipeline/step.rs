//! Pipeline step trait.

use super::context::{RunContext, RunState};
use super::errors::StepResult;

/// One stage of the merge run.
///
/// A step returning `Err` aborts the run; that path is reserved for the
/// fatal conditions (ordering failures, filesystem errors). Recoverable
/// trouble — a transcode that exits non-zero, an unreadable duration — is
/// handled inside the step by logging and pushing a summary line.
pub trait MergeStep: Send + Sync {
    /// Step name, for logging and error context.
    fn name(&self) -> &str;

    /// Do the step's work, recording results in `state`.
    fn execute(&self, ctx: &RunContext<'_>, state: &mut RunState) -> StepResult<()>;
}
