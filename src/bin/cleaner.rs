/*!
 * Cleanup Worker - Entry Point
 * Deletes generated artifacts, preserving the .gitignore whitelist
 */

use anyhow::Context;
use grader::monitoring::init_tracing;
use grader::workers::{clean, load_whitelist};
use std::path::Path;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let whitelist =
        load_whitelist(Path::new(".gitignore")).context("could not load whitelist")?;
    let deleted = clean(Path::new("."), &whitelist)?;
    info!(deleted, "cleanup finished");
    Ok(())
}
