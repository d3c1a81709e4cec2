//! Logging infrastructure.
//!
//! Two layers:
//! - a global `tracing` subscriber for diagnostics (`RUST_LOG` aware)
//! - [`RunLogger`], the run log written to a fixed file and mirrored to the
//!   console, passed explicitly to every pipeline stage

mod run_logger;

pub use run_logger::RunLogger;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`, falling back to `info`. Call once at process start.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}
