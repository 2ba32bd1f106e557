/*!
 * Provisioning Worker
 * Creates one working directory per roster entry
 */

use super::roster::Roster;
use std::io;
use std::path::Path;
use tracing::info;

/// Create a directory under `workdir` for every student in the roster.
/// A directory left over from a previous run is tolerated.
pub fn provision(roster: &Roster, workdir: &Path) -> io::Result<()> {
    for student in roster.students() {
        info!(student = %student.id, "creating student directory");
        match std::fs::create_dir(workdir.join(&student.id)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
