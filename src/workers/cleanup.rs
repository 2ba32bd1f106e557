/*!
 * Cleanup Worker
 * Deletes generated artifacts, preserving a whitelist from .gitignore
 */

use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Load the preservation whitelist: the negated (`!/name`) entries of
/// the repository's .gitignore.
pub fn load_whitelist(gitignore: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(gitignore)?;
    Ok(text
        .lines()
        .filter_map(|line| line.trim().strip_prefix("!/"))
        .map(str::to_string)
        .collect())
}

/// Remove every top-level entry of `workdir` not named by the
/// whitelist. The whitelist source itself is always preserved.
/// Per-entry failures are logged and skipped; cleanup is best-effort.
pub fn clean(workdir: &Path, whitelist: &[String]) -> io::Result<usize> {
    let mut deleted = 0;
    for entry in fs::read_dir(workdir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name == ".gitignore" || whitelist.iter().any(|kept| *kept == name) {
            continue;
        }

        let path = entry.path();
        info!(path = %path.display(), "deleting");
        let result = if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        match result {
            Ok(()) => deleted += 1,
            Err(e) => warn!(path = %path.display(), error = %e, "could not delete entry"),
        }
    }
    Ok(deleted)
}
