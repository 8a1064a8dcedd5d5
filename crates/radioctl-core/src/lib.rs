//! Control and monitoring of radio devices through the Linux rfkill
//! subsystem.
//!
//! The kernel exposes rfkill as a device node that streams fixed 8-byte
//! event records and accepts the same records as soft-block requests.
//! [`Rfkill`] wraps the four operations built on top of that node:
//! listing the current device set, blocking and unblocking devices, and
//! subscribing to events.

// This crate targets Linux only: it drives a kernel subsystem that does
// not exist elsewhere.
#[cfg(not(target_os = "linux"))]
compile_error!(
    "radioctl-core drives the Linux rfkill subsystem and only builds for Linux targets."
);

mod block;
mod dev;
mod error;
mod events;
mod list;
mod sysfs;
mod types;
mod wire;

use std::path::PathBuf;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

pub use block::Target;
pub use dev::DEFAULT_DEV_PATH;
pub use error::{Result, RfkillError};
pub use sysfs::DEFAULT_SYSFS_ROOT;
pub use types::{Device, Event, EventOp, ParseRadioTypeError, RadioType};
pub use wire::{RawEvent, EVENT_SIZE};

use dev::EventReader;
use sysfs::SysfsNames;

/// Handle to the rfkill subsystem.
///
/// Carries no open resources of its own; each operation acquires and
/// releases its own handle on the device node.
#[derive(Debug, Clone)]
pub struct Rfkill {
    dev_path: PathBuf,
    sysfs_root: PathBuf,
}

impl Default for Rfkill {
    fn default() -> Self {
        Self {
            dev_path: PathBuf::from(DEFAULT_DEV_PATH),
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_ROOT),
        }
    }
}

impl Rfkill {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use non-standard locations for the control node and the class
    /// directory, e.g. inside a container or a test fixture.
    pub fn with_paths(dev_path: impl Into<PathBuf>, sysfs_root: impl Into<PathBuf>) -> Self {
        Self {
            dev_path: dev_path.into(),
            sysfs_root: sysfs_root.into(),
        }
    }

    /// Return the list of currently existing radio devices.
    ///
    /// Drains the kernel's pending event queue and folds it into a
    /// snapshot; the queue reporting empty is the normal termination. The
    /// returned devices are owned by the caller. Cancellation aborts with
    /// [`RfkillError::Cancelled`] and discards partial results.
    pub fn list(&self, cancel: &CancellationToken) -> Result<Vec<Device>> {
        let mut reader = EventReader::open(&self.dev_path)?;
        let names = SysfsNames::new(self.sysfs_root.clone());
        list::drain_devices(&mut reader, &names, cancel)
    }

    /// Soft-block the selected device(s).
    pub fn block(&self, target: Target) -> Result<()> {
        block::send(&self.dev_path, true, target)
    }

    /// Clear the soft block on the selected device(s). Hard blocks are
    /// hardware-enforced and cannot be cleared from here.
    pub fn unblock(&self, target: Target) -> Result<()> {
        block::send(&self.dev_path, false, target)
    }

    /// Report rfkill events through `handler` until cancelled.
    ///
    /// Blocks its task for its entire lifetime and only ever returns an
    /// error: [`RfkillError::Cancelled`] once the token fires, or the
    /// first fatal read failure. While the device has no pending data the
    /// loop sleeps for `poll_interval` between read attempts.
    pub async fn events<F>(
        &self,
        cancel: &CancellationToken,
        poll_interval: Duration,
        mut handler: F,
    ) -> Result<()>
    where
        F: FnMut(Event),
    {
        let mut reader = EventReader::open(&self.dev_path)?;
        events::pump_events(&mut reader, cancel, poll_interval, &mut handler).await
    }
}
