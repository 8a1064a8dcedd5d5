//! Binary codec for the 8-byte rfkill event record.
//!
//! The kernel exchanges `struct rfkill_event` in its native byte order.
//! Every target this crate builds for is little-endian, so the layout is
//! pinned to little-endian here and guarded at compile time.

// Wire layout: [id:4 LE][type:1][op:1][soft:1][hard:1].
#[cfg(target_endian = "big")]
compile_error!(
    "the rfkill wire format follows the kernel's native byte order; only little-endian targets are supported."
);

/// Size of one event record on the wire. Every read and write transfers
/// exactly one record; there is no framing and no padding.
pub const EVENT_SIZE: usize = 8;

/// One rfkill event record exactly as it crosses the device node.
///
/// Fields are kept raw so that `decode` followed by `encode` reproduces
/// any 8-byte input byte for byte. Interpretation (known ops, boolean
/// block flags) happens in the consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawEvent {
    pub id: u32,
    pub radio_type: u8,
    pub op: u8,
    pub soft: u8,
    pub hard: u8,
}

impl RawEvent {
    pub fn encode(&self) -> [u8; EVENT_SIZE] {
        let mut buf = [0u8; EVENT_SIZE];
        buf[..4].copy_from_slice(&self.id.to_le_bytes());
        buf[4] = self.radio_type;
        buf[5] = self.op;
        buf[6] = self.soft;
        buf[7] = self.hard;
        buf
    }

    pub fn decode(buf: [u8; EVENT_SIZE]) -> Self {
        let mut id = [0u8; 4];
        id.copy_from_slice(&buf[..4]);
        RawEvent {
            id: u32::from_le_bytes(id),
            radio_type: buf[4],
            op: buf[5],
            soft: buf[6],
            hard: buf[7],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let ev = RawEvent {
            id: 0x0000_04d2,
            radio_type: 1,
            op: 2,
            soft: 1,
            hard: 0,
        };
        assert_eq!(ev.encode(), [0xd2, 0x04, 0x00, 0x00, 1, 2, 1, 0]);
    }

    #[test]
    fn test_decode_layout() {
        let ev = RawEvent::decode([0x01, 0x00, 0x00, 0x00, 5, 3, 0, 1]);
        assert_eq!(
            ev,
            RawEvent {
                id: 1,
                radio_type: 5,
                op: 3,
                soft: 0,
                hard: 1,
            }
        );
    }

    #[test]
    fn test_round_trip_bytes() {
        // Arbitrary bytes, including op/type values outside the known sets,
        // must survive decode-then-encode untouched.
        let samples: [[u8; EVENT_SIZE]; 4] = [
            [0, 0, 0, 0, 0, 0, 0, 0],
            [0xff; EVENT_SIZE],
            [0x78, 0x56, 0x34, 0x12, 9, 200, 2, 7],
            [1, 2, 3, 4, 5, 6, 7, 8],
        ];
        for bytes in samples {
            assert_eq!(RawEvent::decode(bytes).encode(), bytes);
        }
    }

    #[test]
    fn test_round_trip_record() {
        let ev = RawEvent {
            id: u32::MAX,
            radio_type: 8,
            op: 0,
            soft: 1,
            hard: 1,
        };
        assert_eq!(RawEvent::decode(ev.encode()), ev);
    }
}
