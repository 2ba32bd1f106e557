/*!
 * Process Registry
 * Append-only, bounded list of spawned worker pids used for teardown
 */

use super::types::{RegistryError, RegistryResult};
use crate::core::limits::MAX_TRACKED_PROCESSES;
use crate::core::types::Pid;
use crate::journal::Journal;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid as NixPid;
use parking_lot::Mutex;
use tracing::debug;

/// Bounded, append-only registry of spawned process identifiers.
///
/// A process is registered exactly once, immediately after a successful
/// spawn, and entries are never mutated afterwards. The registry exists
/// only for emergency teardown: `terminate_all` drains it newest-first.
/// Capacity is a hard ceiling, not a dynamic one.
pub struct ProcessRegistry {
    pids: Mutex<Vec<Pid>>,
    journal: Journal,
}

impl ProcessRegistry {
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            pids: Mutex::new(Vec::with_capacity(MAX_TRACKED_PROCESSES)),
            journal,
        }
    }

    /// Append a pid, returning its insertion index.
    pub fn register(&self, pid: Pid) -> RegistryResult<usize> {
        let mut pids = self.pids.lock();
        if pids.len() >= MAX_TRACKED_PROCESSES {
            return Err(RegistryError::CapacityExceeded {
                current: pids.len(),
                limit: MAX_TRACKED_PROCESSES,
            });
        }
        pids.push(pid);
        let index = pids.len() - 1;
        drop(pids);
        self.journal.record(format!("registered process {pid}"));
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.pids.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pids.lock().is_empty()
    }

    /// Snapshot of tracked pids in registration order.
    pub fn tracked(&self) -> Vec<Pid> {
        self.pids.lock().clone()
    }

    /// Send SIGKILL to every registered process, newest-first, draining
    /// the registry. Downstream workers are more likely still alive, so
    /// they are targeted first; the signal is forceful, so the order has
    /// no correctness impact and exists for deterministic logs.
    ///
    /// Per-process failures (the process may already be gone) are
    /// journaled and skipped. Returns the number of attempts made.
    pub fn terminate_all(&self) -> usize {
        let pids = std::mem::take(&mut *self.pids.lock());
        let attempts = pids.len();
        for pid in pids.into_iter().rev() {
            self.journal.record(format!("killing process {pid}"));
            if let Err(errno) = kill(NixPid::from_raw(pid as i32), Signal::SIGKILL) {
                let err = RegistryError::TerminationFailed {
                    pid,
                    reason: errno.to_string(),
                };
                self.journal.record(err.to_string());
            }
        }
        debug!(attempts, "registry drained");
        attempts
    }
}
