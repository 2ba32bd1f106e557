/*!
 * Backup Daemon Logic
 * Periodic full-tree copy into a sibling backup directory
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copy the tree rooted at `src` into `dest`, preserving the relative
/// layout. Returns the number of files copied. If `dest` lives inside
/// `src` it is skipped rather than copied into itself.
pub fn backup_tree(src: &Path, dest: &Path) -> io::Result<u64> {
    fs::create_dir_all(dest)?;
    let skip = dest.canonicalize()?;
    copy_dir(src, dest, &skip)
}

fn copy_dir(src: &Path, dest: &Path, skip: &PathBuf) -> io::Result<u64> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        if path.canonicalize().map(|p| p == *skip).unwrap_or(false) {
            continue;
        }

        let target = dest.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_dir(&path, &target, skip)?;
        } else if file_type.is_file() {
            debug!(path = %path.display(), "backing up");
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
