/*!
 * Exchange Channel
 * Single-use named FIFO carrying one native-endian f32
 */

use super::types::{ChannelError, ChannelResult};
use crate::core::limits::CHANNEL_PAYLOAD_BYTES;
use nix::sys::stat::Mode;
use nix::unistd;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tokio::net::unix::pipe;
use tracing::debug;

/// Named exchange channel endpoint.
///
/// Protocol discipline: single writer, single reader, single use. The
/// read end must be opened before the writer process is spawned; the
/// writer's blocking open then completes immediately. Reversing the
/// order deadlocks the pipeline, so open-before-spawn is a correctness
/// invariant, not an optimization.
pub struct ExchangeChannel {
    path: PathBuf,
}

impl ExchangeChannel {
    /// Create the FIFO at `path`, replacing a stale entry left over from
    /// a previous run. Absence of a stale entry is not an error.
    pub fn create(path: impl Into<PathBuf>) -> ChannelResult<Self> {
        let path = path.into();
        match std::fs::remove_file(&path) {
            Ok(()) => debug!(path = %path.display(), "removed stale channel entry"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(ChannelError::SetupFailed { path, source: e }),
        }
        unistd::mkfifo(&path, Mode::from_bits_truncate(0o666)).map_err(|errno| {
            ChannelError::SetupFailed {
                path: path.clone(),
                source: io::Error::from(errno),
            }
        })?;
        Ok(Self { path })
    }

    /// Refer to an endpoint without creating it, e.g. to destroy the
    /// namespace entry on a cleanup path where creation may never have
    /// happened.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the read end without blocking on a writer being present.
    pub fn open_for_read(&self) -> ChannelResult<pipe::Receiver> {
        pipe::OpenOptions::new()
            .open_receiver(&self.path)
            .map_err(|e| ChannelError::SetupFailed {
                path: self.path.clone(),
                source: e,
            })
    }

    /// Read exactly one payload and reinterpret it as a native-endian
    /// IEEE-754 f32. Both ends run on the same host, so there is no
    /// byte-order negotiation; the value is bit-exact, never parsed.
    ///
    /// End-of-stream before the payload completes is a `ShortRead`.
    pub async fn read_value(receiver: &mut pipe::Receiver) -> ChannelResult<f32> {
        let mut buf = [0u8; CHANNEL_PAYLOAD_BYTES];
        let mut got = 0;
        while got < CHANNEL_PAYLOAD_BYTES {
            let n = receiver.read(&mut buf[got..]).await?;
            if n == 0 {
                return Err(ChannelError::ShortRead {
                    expected: CHANNEL_PAYLOAD_BYTES,
                    got,
                });
            }
            got += n;
        }
        Ok(f32::from_ne_bytes(buf))
    }

    /// Remove the namespace entry so a subsequent run cannot collide
    /// with this one. Idempotent: absence of the path is not an error.
    pub fn destroy(&self) -> ChannelResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "channel destroyed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ChannelError::Io(e)),
        }
    }
}
