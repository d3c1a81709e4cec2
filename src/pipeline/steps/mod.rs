//! The individual merge steps, one module per stage.

mod cleanup;
mod concat;
mod decode;
mod encode;
mod manifest;
mod report;

pub use cleanup::CleanupStep;
pub use concat::ConcatStep;
pub use decode::DecodeStep;
pub use encode::EncodeStep;
pub use manifest::ManifestStep;
pub use report::ReportStep;
