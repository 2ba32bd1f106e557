/*!
 * Exam Attachment Worker
 * Hard-links the matching exam variant into each student directory
 */

use super::roster::Roster;
use std::io;
use std::path::Path;
use tracing::info;

/// Link `<exam_dir>/MODEL<VARIANT>.pdf` to `<workdir>/<id>/Exam.pdf`
/// for every student. Variant letters are matched case-insensitively;
/// an existing link from a previous run is tolerated.
pub fn attach_exams(roster: &Roster, workdir: &Path, exam_dir: &Path) -> io::Result<()> {
    for student in roster.students() {
        let variant = student.variant.to_ascii_uppercase();
        let template = exam_dir.join(format!("MODEL{variant}.pdf"));
        let dest = workdir.join(&student.id).join("Exam.pdf");
        info!(student = %student.id, variant = %variant, "attaching exam");
        match std::fs::hard_link(&template, &dest) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
