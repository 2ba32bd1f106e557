/*!
 * Worker Logic
 * Single-pass file I/O performed by the pipeline worker binaries
 */

mod backup;
mod cleanup;
mod exams;
mod provision;
mod roster;
mod scoring;

pub use backup::backup_tree;
pub use cleanup::{clean, load_whitelist};
pub use exams::attach_exams;
pub use provision::provision;
pub use roster::{Roster, RosterError, RosterResult, Student};
pub use scoring::score;
