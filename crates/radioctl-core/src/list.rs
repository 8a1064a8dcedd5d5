//! Registry fold producing a snapshot of currently known devices.
//!
//! The kernel replays its full pending event history on a fresh reader, so
//! draining the queue until "no data" reconstructs the live device set at
//! that instant. The fold relies on that guarantee; it cannot verify it.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::dev::EventSource;
use crate::error::{Result, RfkillError};
use crate::sysfs::NameResolver;
use crate::types::{Device, EventOp, RadioType};
use crate::wire::RawEvent;

/// Drain all pending events from `source` and fold them into the current
/// device set. Cancellation is checked before every read and discards
/// partial results.
pub(crate) fn drain_devices<S: EventSource>(
    source: &mut S,
    names: &dyn NameResolver,
    cancel: &CancellationToken,
) -> Result<Vec<Device>> {
    let mut devices: Vec<Device> = Vec::new();

    loop {
        if cancel.is_cancelled() {
            return Err(RfkillError::Cancelled);
        }

        let Some(raw) = source.next_event()? else {
            // Queue drained: the accumulated state equals the live set.
            debug!(count = devices.len(), "rfkill event queue drained");
            return Ok(devices);
        };

        apply(&mut devices, raw, names)?;
    }
}

fn apply(devices: &mut Vec<Device>, raw: RawEvent, names: &dyn NameResolver) -> Result<()> {
    match EventOp::from_raw(raw.op) {
        EventOp::Add => {
            let name = names.name_of(raw.id)?;
            let device = Device {
                id: raw.id,
                radio_type: RadioType::from_raw(raw.radio_type),
                name,
                soft_blocked: raw.soft > 0,
                hard_blocked: raw.hard > 0,
            };
            // Ids are unique among tracked devices; an add for an id we
            // already track replaces that entry in place.
            match devices.iter_mut().find(|d| d.id == raw.id) {
                Some(slot) => *slot = device,
                None => devices.push(device),
            }
        }
        EventOp::Del => {
            // First match by id, remaining order preserved.
            if let Some(pos) = devices.iter().position(|d| d.id == raw.id) {
                devices.remove(pos);
            }
        }
        EventOp::Change => {
            if let Some(device) = devices.iter_mut().find(|d| d.id == raw.id) {
                device.soft_blocked = raw.soft > 0;
                device.hard_blocked = raw.hard > 0;
            }
        }
        EventOp::ChangeAll => {
            let target = RadioType::from_raw(raw.radio_type);
            for device in devices
                .iter_mut()
                .filter(|d| target == RadioType::All || d.radio_type == target)
            {
                device.soft_blocked = raw.soft > 0;
                device.hard_blocked = raw.hard > 0;
            }
        }
        EventOp::Other(op) => return Err(RfkillError::UnknownOp(op)),
    }
    Ok(())
}
