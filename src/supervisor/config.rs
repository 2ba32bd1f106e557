/*!
 * Supervisor Configuration
 * Worker image, channel, and journal paths
 */

use crate::core::limits::{
    DEFAULT_CHANNEL_PATH, DEFAULT_JOURNAL_PATH, DEFAULT_WORKER_DIR,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths driving one supervisor run.
///
/// Workers are executable images at fixed paths, invoked with no
/// arguments and an empty environment; only the supervisor side is
/// configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SupervisorConfig {
    /// Stage-1 worker: provisions per-student directories
    pub provisioner: PathBuf,
    /// Stage-2 worker: attaches exam variants
    pub exam_attacher: PathBuf,
    /// Stage-2 worker: writes requirement notes and the mean score
    pub scorer: PathBuf,
    /// Teardown worker: deletes generated artifacts
    pub cleaner: PathBuf,
    /// Exchange channel endpoint
    pub channel_path: PathBuf,
    /// Journal file
    pub journal_path: PathBuf,
}

impl SupervisorConfig {
    /// Defaults rooted at `worker_dir`.
    pub fn with_worker_dir(worker_dir: impl Into<PathBuf>) -> Self {
        let worker_dir = worker_dir.into();
        Self {
            provisioner: worker_dir.join("provisioner"),
            exam_attacher: worker_dir.join("examlink"),
            scorer: worker_dir.join("scorer"),
            cleaner: worker_dir.join("cleaner"),
            channel_path: PathBuf::from(DEFAULT_CHANNEL_PATH),
            journal_path: PathBuf::from(DEFAULT_JOURNAL_PATH),
        }
    }

    /// Defaults, honoring GRADER_WORKER_DIR, GRADER_FIFO and GRADER_LOG.
    pub fn from_env() -> Self {
        let worker_dir =
            std::env::var("GRADER_WORKER_DIR").unwrap_or_else(|_| DEFAULT_WORKER_DIR.to_string());
        let mut config = Self::with_worker_dir(worker_dir);
        if let Ok(path) = std::env::var("GRADER_FIFO") {
            config.channel_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("GRADER_LOG") {
            config.journal_path = PathBuf::from(path);
        }
        config
    }

    pub fn with_channel_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.channel_path = path.into();
        self
    }

    pub fn with_journal_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.journal_path = path.into();
        self
    }
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self::with_worker_dir(DEFAULT_WORKER_DIR)
    }
}
