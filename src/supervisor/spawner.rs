/*!
 * Worker Spawner
 * OS-level process creation for pipeline workers
 */

use super::types::{SupervisorError, SupervisorResult};
use nix::sys::signal::{self, SigHandler, Signal};
use std::io;
use std::path::Path;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::debug;

/// Spawn a worker image with no arguments and an empty environment.
///
/// Workers inherit nothing from the supervisor: the environment starts
/// from a clean slate, stdin is closed, and the child's SIGINT
/// disposition is reset to the platform default before the new image
/// loads, so an interrupt delivered to the process group reaches only
/// the supervisor's own handler.
pub fn spawn_worker(image: &Path) -> SupervisorResult<Child> {
    let mut cmd = Command::new(image);
    cmd.env_clear()
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    // runs in the child between fork and exec; async-signal-safe only
    unsafe {
        cmd.pre_exec(|| {
            signal::signal(Signal::SIGINT, SigHandler::SigDfl)
                .map(drop)
                .map_err(io::Error::from)
        });
    }

    let child = cmd.spawn().map_err(|e| SupervisorError::SpawnFailed {
        image: image.display().to_string(),
        source: e,
    })?;
    debug!(image = %image.display(), pid = ?child.id(), "spawned worker");
    Ok(child)
}
