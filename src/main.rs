//! flacmerge entry point.
//!
//! No arguments: the run is driven entirely by `config.toml` in the
//! working directory. Fatal errors (bad config, unorderable filenames,
//! filesystem trouble) propagate out of `main`; everything else ends up
//! in the run log and the summary file.

use std::error::Error;
use std::fs;
use std::sync::Arc;

use flacmerge::config;
use flacmerge::logging::{self, RunLogger};
use flacmerge::pipeline::{Pipeline, RunContext, RunPaths, RunState};
use flacmerge::tools::FfmpegRunner;

const CONFIG_FILE: &str = "config.toml";
const RUN_LOG_FILE: &str = "merge_flac_files.log";

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_tracing();
    tracing::info!("flacmerge {}", flacmerge::version());

    let settings = config::load(CONFIG_FILE)?;
    let logger = Arc::new(RunLogger::new(RUN_LOG_FILE)?);

    let paths = RunPaths::from_settings(&settings);
    fs::create_dir_all(&paths.scratch_dir)?;

    let transcoder = FfmpegRunner::new();
    let ctx = RunContext {
        paths,
        logger: Arc::clone(&logger),
        transcoder: &transcoder,
    };

    let mut state = RunState::default();
    let result = Pipeline::standard().run(&ctx, &mut state);

    logger.close();
    result?;
    Ok(())
}
