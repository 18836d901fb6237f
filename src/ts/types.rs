use crate::error::Result;
use bytes::{BufMut, BytesMut};

// Constants
/// Sync marker carried in the first byte of every TS packet.
pub const SYNC_BYTE: u8 = 0x47;
/// Fixed size of a TS packet in bytes.
pub const TS_PACKET_SIZE: usize = 188;
/// Size of the fixed TS packet header in bytes.
pub const TS_HEADER_SIZE: usize = 4;

/// The fixed 4-byte header at the start of every TS packet.
#[derive(Debug)]
pub struct TSHeader {
    /// Always 0x47.
    pub sync_byte: u8,
    /// Transport error indicator.
    pub transport_error: bool,
    /// Payload unit start indicator.
    pub payload_unit_start: bool,
    /// Transport priority flag.
    pub transport_priority: bool,
    /// 13-bit packet identifier.
    pub pid: u16,
    /// 2-bit scrambling control field.
    pub scrambling_control: u8,
    /// Whether an adaptation field follows the header.
    pub adaptation_field_exists: bool,
    /// Whether the packet carries payload. Packets without payload do
    /// not advance the continuity counter.
    pub contains_payload: bool,
    /// 4-bit continuity counter.
    pub continuity_counter: u8,
}

impl Default for TSHeader {
    fn default() -> Self {
        Self {
            sync_byte: SYNC_BYTE,
            transport_error: false,
            payload_unit_start: false,
            transport_priority: false,
            pid: 0,
            scrambling_control: 0,
            adaptation_field_exists: false,
            contains_payload: true,
            continuity_counter: 0,
        }
    }
}

impl TSHeader {
    /// Serializes the header into `buf` per the MPEG-TS bit layout.
    pub fn write_to(&self, buf: &mut BytesMut) -> Result<()> {
        buf.put_u8(self.sync_byte);

        let mut b1 = 0u8;
        if self.transport_error {
            b1 |= 0x80;
        }
        if self.payload_unit_start {
            b1 |= 0x40;
        }
        if self.transport_priority {
            b1 |= 0x20;
        }
        b1 |= ((self.pid >> 8) & 0x1f) as u8;
        buf.put_u8(b1);

        buf.put_u8((self.pid & 0xff) as u8);

        let mut b3 = self.scrambling_control << 6;
        if self.adaptation_field_exists {
            b3 |= 0x20;
        }
        if self.contains_payload {
            b3 |= 0x10;
        }
        b3 |= self.continuity_counter & 0x0f;
        buf.put_u8(b3);

        Ok(())
    }
}
