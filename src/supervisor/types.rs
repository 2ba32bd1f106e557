/*!
 * Supervisor Types
 * Run state machine and error taxonomy
 */

use crate::channel::ChannelError;
use crate::registry::RegistryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supervisor operation result
pub type SupervisorResult<T> = Result<T, SupervisorError>;

/// Supervisor errors. All variants are fatal to the run except where
/// noted on the originating module; fatal errors share one unified
/// cleanup path (channel destroy, journal flush) before a nonzero exit.
#[derive(Error, Debug)]
pub enum SupervisorError {
    #[error("Spawn failed: {image}: {source}")]
    SpawnFailed {
        image: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Signal registration failed: {0}")]
    SignalRegistrationFailed(#[source] std::io::Error),

    #[error("Journal open failed: {0}")]
    JournalOpen(#[source] std::io::Error),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidStateTransition { from: RunState, to: RunState },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}

/// Pipeline run state.
///
/// Normal progression is strictly forward; any state may move to
/// `Interrupted` when the external interrupt arrives, and every path
/// ends in `Terminated`, the sole terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Init,
    Stage1Running,
    Stage1Done,
    Stage2Running,
    Stage2Done,
    ResultRead,
    Interrupted,
    Terminated,
}

impl RunState {
    /// Whether moving to `next` is a legal transition.
    pub fn can_advance_to(self, next: RunState) -> bool {
        use RunState::*;
        match (self, next) {
            (Terminated, _) => false,
            // interrupt may arrive at any live point; a second interrupt
            // during teardown is not guarded against
            (_, Interrupted) => true,
            // unified cleanup path: both success and failure end here
            (_, Terminated) => true,
            (Init, Stage1Running)
            | (Stage1Running, Stage1Done)
            | (Stage1Done, Stage2Running)
            | (Stage2Running, Stage2Done)
            | (Stage2Done, ResultRead) => true,
            _ => false,
        }
    }
}

/// How a supervisor run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// Pipeline completed; carries the exchanged mean score
    Completed(f32),
    /// Interrupt received; teardown ran to completion
    Interrupted,
}
