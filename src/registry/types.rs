/*!
 * Registry Types
 * Errors for the bounded process registry
 */

use crate::core::types::Pid;
use thiserror::Error;

/// Registry operation result
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Registry capacity exceeded: {current}/{limit} tracked processes")]
    CapacityExceeded { current: usize, limit: usize },

    /// Non-fatal: journaled during teardown, never aborts the drain loop.
    #[error("Failed to terminate process {pid}: {reason}")]
    TerminationFailed { pid: Pid, reason: String },
}
