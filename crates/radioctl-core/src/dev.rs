//! Transport over the rfkill device node.
//!
//! The node is opened read-only and non-blocking for draining events; a
//! drained queue surfaces as `EWOULDBLOCK`, never EOF. Block requests go
//! through a separate write-only open that lives for a single record.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, RfkillError};
use crate::wire::{RawEvent, EVENT_SIZE};

/// Default path of the rfkill control node.
pub const DEFAULT_DEV_PATH: &str = "/dev/rfkill";

/// Source of decoded rfkill records.
///
/// The list builder and the event loop run against this seam so tests can
/// feed them scripted records instead of a live device.
pub(crate) trait EventSource {
    /// Pull one record off the source, or `None` once no more events are
    /// pending right now.
    fn next_event(&mut self) -> Result<Option<RawEvent>>;
}

/// Read side of the event device. The handle is owned for the lifetime of
/// one list or events call and closed on every exit path.
#[derive(Debug)]
pub(crate) struct EventReader {
    file: File,
}

impl EventReader {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK | libc::O_CLOEXEC)
            .open(path)
            .map_err(|source| RfkillError::OpenDevice {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "opened rfkill event device");
        Ok(Self { file })
    }
}

impl EventSource for EventReader {
    fn next_event(&mut self) -> Result<Option<RawEvent>> {
        let mut buf = [0u8; EVENT_SIZE];
        match self.file.read(&mut buf) {
            Ok(EVENT_SIZE) => {
                let ev = RawEvent::decode(buf);
                trace!(id = ev.id, op = ev.op, "read rfkill record");
                Ok(Some(ev))
            }
            // The device delivers whole records only; anything else is a
            // protocol violation, not a resumable condition.
            Ok(n) => Err(RfkillError::ShortRecord {
                actual: n,
                expected: EVENT_SIZE,
            }),
            Err(e) if e.kind() == ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(RfkillError::Read(e)),
        }
    }
}

/// Write one encoded record to the device node: open write-only, a single
/// write call, close. No batching.
pub(crate) fn write_event(path: &Path, ev: &RawEvent) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| RfkillError::OpenDevice {
            path: path.to_path_buf(),
            source,
        })?;

    let buf = ev.encode();
    let written = file.write(&buf).map_err(RfkillError::Write)?;
    if written != EVENT_SIZE {
        return Err(RfkillError::ShortWrite {
            written,
            expected: EVENT_SIZE,
        });
    }
    Ok(())
}
