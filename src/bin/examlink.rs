/*!
 * Exam Attachment Worker - Entry Point
 * Stage 2: links the matching exam variant into each student directory
 */

use anyhow::Context;
use grader::core::limits::{DEFAULT_EXAM_DIR, DEFAULT_ROSTER_PATH};
use grader::monitoring::init_tracing;
use grader::workers::{attach_exams, Roster};
use std::path::Path;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let roster = Roster::load(DEFAULT_ROSTER_PATH).context("could not load roster")?;
    attach_exams(&roster, Path::new("."), Path::new(DEFAULT_EXAM_DIR))?;
    info!(students = roster.len(), "done attaching exams");
    Ok(())
}
