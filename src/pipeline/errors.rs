//! Error types for the merge pipeline.
//!
//! Only the fatal classes travel through these types: ordering failures and
//! filesystem errors the run cannot continue past. Transcoder and metadata
//! failures are recovered inside the steps as summary lines and never reach
//! the pipeline runner.

use std::io;

use thiserror::Error;

use crate::discovery::OrderingError;

/// Top-level pipeline error with step context.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("run failed at step '{step_name}': {source}")]
    StepFailed {
        step_name: String,
        #[source]
        source: StepError,
    },
}

impl PipelineError {
    pub fn step_failed(step_name: impl Into<String>, source: StepError) -> Self {
        Self::StepFailed {
            step_name: step_name.into(),
            source,
        }
    }
}

/// Error from a single pipeline step.
#[derive(Error, Debug)]
pub enum StepError {
    #[error(transparent)]
    Ordering(#[from] OrderingError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type StepResult<T> = Result<T, StepError>;
pub type PipelineResult<T> = Result<T, PipelineError>;
