/*!
 * Shared Test Helpers
 * Shell-script worker images for supervisor integration tests
 */

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable /bin/sh script worker into `dir`.
pub fn write_worker(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// Script body writing 4.0f32 to `fifo` as its little-endian bytes
/// (00 00 80 40 — every supported target is little-endian).
pub fn mean_writer_body(fifo: &Path) -> String {
    format!("printf '\\000\\000\\200\\100' > {}", fifo.display())
}
