//! # MPEG Transport Stream (TS) handling
//!
//! This module covers the slice of the TS format the corrector needs:
//!
//! - Fixed 4-byte packet header parsing and serialization
//! - Packet framing constants
//! - The stateful per-PID continuity corrector
//!
//! Payload and PSI parsing are deliberately out of scope: continuity
//! repair only looks at the sync byte, the PID, the payload flag, and
//! the continuity counter.
//!
//! ## Example
//!
//! ```rust
//! use tsccfix::ts::{TSPacketParser, TS_PACKET_SIZE};
//!
//! # fn main() -> tsccfix::Result<()> {
//! let mut packet = vec![0u8; TS_PACKET_SIZE];
//! packet[0] = 0x47;
//! packet[3] = 0x17; // payload flag set, CC 7
//!
//! let parser = TSPacketParser::new();
//! let header = parser.parse_header(&packet)?;
//! assert!(header.contains_payload);
//! assert_eq!(header.continuity_counter, 7);
//! # Ok(())
//! # }
//! ```

/// Continuity corrector and per-PID state tracking
pub mod corrector;

/// Low-level TS packet header parsing
pub mod parser;

/// Core TS types and constants
pub mod types;

// Re-export commonly used types and constants
pub use corrector::{ContinuityCorrector, PidEntry};
pub use parser::TSPacketParser;
pub use types::{TSHeader, SYNC_BYTE, TS_HEADER_SIZE, TS_PACKET_SIZE};
