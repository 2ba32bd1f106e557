/*!
 * Channel Types
 * Errors for the single-use exchange channel
 */

use std::path::PathBuf;
use thiserror::Error;

/// Channel operation result
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Channel errors
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Channel setup failed at {path}: {source}")]
    SetupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Short read on exchange channel: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },

    #[error("Channel I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
