/*!
 * Provisioning Worker - Entry Point
 * Stage 1: creates per-student directories from the roster
 */

use anyhow::Context;
use grader::core::limits::DEFAULT_ROSTER_PATH;
use grader::monitoring::init_tracing;
use grader::workers::{provision, Roster};
use std::path::Path;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let roster = Roster::load(DEFAULT_ROSTER_PATH).context("could not load roster")?;
    provision(&roster, Path::new("."))?;
    info!(students = roster.len(), "done creating directories");
    Ok(())
}
