/*!
 * Scoring Worker - Entry Point
 * Stage 2: writes requirement notes and exchanges the mean score
 */

use anyhow::Context;
use grader::core::limits::{DEFAULT_CHANNEL_PATH, DEFAULT_ROSTER_PATH};
use grader::monitoring::init_tracing;
use grader::workers::{score, Roster};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let roster = Roster::load(DEFAULT_ROSTER_PATH).context("could not load roster")?;

    // blocks until the supervisor holds the read end open; the spawn
    // ordering guarantees it already does
    let mut channel = OpenOptions::new()
        .write(true)
        .open(DEFAULT_CHANNEL_PATH)
        .context("could not open exchange channel for writing")?;

    let mean = score(&roster, Path::new("."), &mut channel)?;
    info!(mean = %mean, "average score written to exchange channel");
    Ok(())
}
