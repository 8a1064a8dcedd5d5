//! Soft-block and unblock requests.

use std::path::Path;

use tracing::debug;

use crate::dev::write_event;
use crate::error::Result;
use crate::types::{EventOp, RadioType};
use crate::wire::RawEvent;

/// Selects the devices a block or unblock request applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A single device, matched by its rfkill id.
    Id(u32),
    /// Every device of one radio class; [`RadioType::All`] reaches all
    /// devices regardless of class.
    Type(RadioType),
}

impl Target {
    fn apply_to(self, ev: &mut RawEvent) {
        match self {
            Target::Id(id) => {
                ev.op = EventOp::Change.as_raw();
                ev.id = id;
            }
            Target::Type(radio_type) => {
                ev.op = EventOp::ChangeAll.as_raw();
                ev.radio_type = radio_type.as_raw();
            }
        }
    }
}

/// Build and write the single control record for a block (`soft = true`)
/// or unblock (`soft = false`) request. The hard-block flag is never set;
/// hardware-enforced blocks cannot be cleared in software.
pub(crate) fn send(path: &Path, soft: bool, target: Target) -> Result<()> {
    let ev = request(soft, target);
    debug!(?target, soft, "writing rfkill block request");
    write_event(path, &ev)
}

fn request(soft: bool, target: Target) -> RawEvent {
    let mut ev = RawEvent {
        soft: u8::from(soft),
        ..RawEvent::default()
    };
    target.apply_to(&mut ev);
    ev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_by_id_record() {
        let ev = request(true, Target::Id(3));
        assert_eq!(
            ev,
            RawEvent {
                id: 3,
                radio_type: 0,
                op: EventOp::Change.as_raw(),
                soft: 1,
                hard: 0,
            }
        );
    }

    #[test]
    fn test_unblock_by_type_record() {
        let ev = request(false, Target::Type(RadioType::Wlan));
        assert_eq!(
            ev,
            RawEvent {
                id: 0,
                radio_type: RadioType::Wlan.as_raw(),
                op: EventOp::ChangeAll.as_raw(),
                soft: 0,
                hard: 0,
            }
        );
    }

    #[test]
    fn test_block_all_types_record() {
        let ev = request(true, Target::Type(RadioType::All));
        assert_eq!(ev.op, EventOp::ChangeAll.as_raw());
        assert_eq!(ev.radio_type, 0);
        assert_eq!(ev.soft, 1);
    }

    #[test]
    fn test_send_writes_one_record() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rfkill");
        std::fs::write(&path, b"").unwrap();

        send(&path, true, Target::Id(7)).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, request(true, Target::Id(7)).encode());
    }
}
