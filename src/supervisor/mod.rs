/*!
 * Supervisor
 * Pipeline orchestration: ordered spawning, interrupt teardown, and the
 * run state machine
 */

mod config;
mod spawner;
mod supervisor;
mod types;

pub use config::SupervisorConfig;
pub use spawner::spawn_worker;
pub use supervisor::Supervisor;
pub use types::{RunOutcome, RunState, SupervisorError, SupervisorResult};
