/*!
 * Grader Library
 * Exam grading pipeline: orchestration supervisor and worker logic
 */

pub mod channel;
pub mod core;
pub mod journal;
pub mod monitoring;
pub mod registry;
pub mod supervisor;
pub mod workers;

// Re-exports
pub use channel::{ChannelError, ExchangeChannel};
pub use journal::Journal;
pub use registry::{ProcessRegistry, RegistryError};
pub use supervisor::{
    RunOutcome, RunState, Supervisor, SupervisorConfig, SupervisorError, SupervisorResult,
};
