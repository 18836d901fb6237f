use super::parser::TSPacketParser;
use super::types::{SYNC_BYTE, TS_PACKET_SIZE};
use crate::error::{Result, TsccError};
use log::{debug, trace};

/// Continuity state for a single PID.
#[derive(Debug, Clone)]
pub struct PidEntry {
    /// 13-bit packet identifier.
    pub pid: u16,
    /// Most recently validated continuity counter value for this PID.
    pub last_cc: u8,
    /// Corrections applied to this PID across the whole run.
    pub correction_count: u64,
}

/// Stateful per-PID continuity corrector.
///
/// The corrector consumes buffers of 188-byte TS packets, one buffer per
/// input file, in presentation order, and rewrites the continuity counter
/// of any packet that does not carry the expected next value for its PID.
/// PID state persists across buffers, so the first packet of one file is
/// checked against the last packet of the same PID in any earlier file.
///
/// Corrections are made relative to the last *validated* counter value,
/// not the last observed one, so a single discontinuity does not cascade
/// into corrections of every following packet that was internally
/// consistent with the bad value.
pub struct ContinuityCorrector {
    parser: TSPacketParser,
    // Sorted by pid at all times.
    pids: Vec<PidEntry>,
    total_corrections: u64,
}

impl ContinuityCorrector {
    /// Creates a corrector with an empty PID registry.
    pub fn new() -> Self {
        Self {
            parser: TSPacketParser::new(),
            pids: Vec::new(),
            total_corrections: 0,
        }
    }

    /// Repairs continuity counters in `data`, in place.
    ///
    /// `data` must be a whole number of 188-byte packets. `label` is the
    /// human-readable name of the input, used in errors and logging.
    /// Returns the number of corrections applied to this buffer.
    ///
    /// A missing sync byte at any packet boundary is fatal: packet
    /// framing cannot be trusted once sync is lost, so no resync or
    /// skip is attempted.
    pub fn process(&mut self, data: &mut [u8], label: &str) -> Result<u64> {
        if data.len() % TS_PACKET_SIZE != 0 {
            return Err(TsccError::Misaligned {
                file: label.to_string(),
                length: data.len() as u64,
            });
        }

        let mut buffer_corrections = 0u64;

        for offset in (0..data.len()).step_by(TS_PACKET_SIZE) {
            let packet = &mut data[offset..offset + TS_PACKET_SIZE];

            if packet[0] != SYNC_BYTE {
                return Err(TsccError::SyncByte {
                    file: label.to_string(),
                    offset: offset as u64,
                    found: packet[0],
                });
            }

            let header = self.parser.parse_header(packet)?;

            match self.pids.binary_search_by_key(&header.pid, |e| e.pid) {
                Ok(i) => {
                    let entry = &mut self.pids[i];
                    let expected = if header.contains_payload {
                        (entry.last_cc + 1) & 0x0F
                    } else {
                        entry.last_cc
                    };

                    if header.continuity_counter != expected {
                        packet[3] = (packet[3] & 0xF0) | expected;
                        entry.correction_count += 1;
                        buffer_corrections += 1;
                        self.total_corrections += 1;
                        debug!(
                            "'{}': PID 0x{:04X} CC {} -> {} at offset {}",
                            label, header.pid, header.continuity_counter, expected, offset
                        );
                    }
                    entry.last_cc = expected;
                }
                Err(i) => {
                    // First sighting of this PID anywhere in the run: the
                    // observed counter becomes the baseline, nothing to
                    // compare against.
                    trace!(
                        "'{}': PID 0x{:04X} first seen with CC {}",
                        label,
                        header.pid,
                        header.continuity_counter
                    );
                    self.pids.insert(
                        i,
                        PidEntry {
                            pid: header.pid,
                            last_cc: header.continuity_counter,
                            correction_count: 0,
                        },
                    );
                }
            }
        }

        Ok(buffer_corrections)
    }

    /// Every PID observed so far, ascending by PID value.
    pub fn pids(&self) -> &[PidEntry] {
        &self.pids
    }

    /// Corrections applied across all buffers processed so far.
    pub fn total_corrections(&self) -> u64 {
        self.total_corrections
    }
}

impl Default for ContinuityCorrector {
    fn default() -> Self {
        Self::new()
    }
}
