use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RfkillError>;

/// Errors produced by rfkill operations.
#[derive(Error, Debug)]
pub enum RfkillError {
    #[error("failed to open {}: {source}", .path.display())]
    OpenDevice {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read from event device failed: {0}")]
    Read(#[source] io::Error),

    #[error("write to event device failed: {0}")]
    Write(#[source] io::Error),

    #[error("event device returned {actual} bytes, expected {expected}")]
    ShortRecord { actual: usize, expected: usize },

    #[error("event device consumed {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    #[error("unknown rfkill event op {0}")]
    UnknownOp(u8),

    #[error("failed to read name for rfkill device {id}: {source}")]
    DeviceName {
        id: u32,
        #[source]
        source: io::Error,
    },

    #[error("operation cancelled")]
    Cancelled,
}

impl RfkillError {
    /// True when the error is the caller-requested abort rather than an
    /// I/O or protocol failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RfkillError::Cancelled)
    }
}
