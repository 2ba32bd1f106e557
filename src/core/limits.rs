/*!
 * System Limits and Constants
 *
 * Centralized location for system-wide limits and well-known paths.
 * Values include rationale comments explaining why they exist.
 */

use std::time::Duration;

/// Program name prefixed to every journal line
pub const PROGNAME: &str = "grader";

// =============================================================================
// PROCESS TRACKING
// =============================================================================

/// Maximum number of tracked worker processes (hard ceiling)
/// Teardown walks a fixed bound, so an interrupt arriving with a partially
/// filled registry never has to grow storage mid-teardown.
pub const MAX_TRACKED_PROCESSES: usize = 64;

// =============================================================================
// EXCHANGE CHANNEL
// =============================================================================

/// Exact payload size of the exchange channel: one IEEE-754 f32
pub const CHANNEL_PAYLOAD_BYTES: usize = 4;

/// Well-known channel path shared by the supervisor and the scoring worker.
/// Workers run with an empty environment, so the path cannot be negotiated
/// at runtime; only one supervisor run at a time is supported.
pub const DEFAULT_CHANNEL_PATH: &str = "/tmp/grader_avg_fifo";

// =============================================================================
// PIPELINE FILES
// =============================================================================

/// Journal file written by the supervisor, relative to the working directory
pub const DEFAULT_JOURNAL_PATH: &str = "log.txt";

/// Roster file consumed by the workers, relative to the working directory
pub const DEFAULT_ROSTER_PATH: &str = "roster.txt";

/// Directory holding the worker images, relative to the working directory
pub const DEFAULT_WORKER_DIR: &str = "exec";

/// Directory holding the exam variant templates
pub const DEFAULT_EXAM_DIR: &str = "exams";

// =============================================================================
// GRADING
// =============================================================================

/// Maximum achievable score on an exam
pub const MAX_EXAM_SCORE: u32 = 5;

// =============================================================================
// BACKUP DAEMON
// =============================================================================

/// Interval between full-tree backup passes
pub const BACKUP_INTERVAL: Duration = Duration::from_secs(60);

/// Destination of backup passes, relative to the working directory
pub const DEFAULT_BACKUP_PATH: &str = "../backup";
