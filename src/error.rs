use thiserror::Error;

/// Errors surfaced while repairing TS files.
#[derive(Error, Debug)]
pub enum TsccError {
    /// Underlying file or mapping operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A packet boundary did not carry the TS sync byte. Packet framing
    /// cannot be trusted past this point, so the run must stop.
    #[error("'{file}': TS packet sync byte not present at offset {offset}, got 0x{found:02X} instead")]
    SyncByte {
        /// Label of the offending input.
        file: String,
        /// Byte offset of the expected packet boundary.
        offset: u64,
        /// The byte found where 0x47 was required.
        found: u8,
    },

    /// Input length is not a whole number of 188-byte packets.
    #[error("'{file}': length {length} is not a multiple of the TS packet size (188)")]
    Misaligned {
        /// Label of the offending input.
        file: String,
        /// The observed length in bytes.
        length: u64,
    },

    /// The path did not point at a regular file.
    #[error("'{file}' does not appear to be a regular file")]
    NotRegular {
        /// Label of the offending input.
        file: String,
    },

    /// The file exists but contains no data.
    #[error("'{file}' has a length of 0")]
    Empty {
        /// Label of the offending input.
        file: String,
    },

    /// Malformed packet data outside the cases above.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TsccError>;
