/*!
 * Scoring Worker
 * Writes per-student requirement notes and exchanges the mean score
 */

use super::roster::Roster;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Write each student's requirement note under `workdir`, then write the
/// roster's mean score to `sink` as one native-endian f32.
///
/// The binary passes the exchange channel's write end as the sink; its
/// open blocks until the supervisor holds the read end, which the
/// spawn ordering guarantees is already the case.
pub fn score(roster: &Roster, workdir: &Path, sink: &mut impl Write) -> io::Result<f32> {
    for student in roster.students() {
        let required = student.required_score();
        info!(
            student = %student.id,
            score = student.score,
            required,
            "writing requirement note"
        );
        let note = format!(
            "In order to pass this course, you'll need a minimum of {required} marks in this exam.\n"
        );
        std::fs::write(workdir.join(&student.id).join("note.txt"), note)?;
    }

    let mean = roster.mean_score();
    info!(mean = %mean, "average score computed");
    sink.write_all(&mean.to_ne_bytes())?;
    sink.flush()?;
    Ok(mean)
}
