#![doc(html_root_url = "https://docs.rs/tsccfix/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

//! # tsccfix - MPEG-TS Continuity Counter Correction
//!
//! `tsccfix` repairs continuity counter (CC) errors in MPEG transport
//! stream files, in place, across any number of files. After a run, the
//! listed files can be concatenated in argument order without producing
//! continuity counter errors on playback, which makes the tool useful for
//! segmented delivery such as HLS.
//!
//! ## Features
//!
//! - Per-PID continuity tracking carried across file boundaries
//! - In-place repair: only the CC nibble of a broken packet is rewritten
//! - Payload-aware expected-CC computation (adaptation-only packets do
//!   not advance the counter)
//! - Read-write file mapping with best-effort advisory locking
//! - Per-file and per-PID correction reporting
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tsccfix = "0.1.0"
//! ```
//!
//! ### Correcting a buffer of TS packets
//!
//! ```rust
//! use tsccfix::ContinuityCorrector;
//!
//! # fn main() -> tsccfix::Result<()> {
//! // Two packets of PID 0x100: CC 0 followed by CC 5 (a discontinuity).
//! let mut buf = vec![0u8; 376];
//! for (i, &cc) in [0u8, 5].iter().enumerate() {
//!     let packet = &mut buf[i * 188..(i + 1) * 188];
//!     packet[0] = 0x47; // sync byte
//!     packet[1] = 0x01; // PID 0x100, high bits
//!     packet[2] = 0x00; // PID 0x100, low bits
//!     packet[3] = 0x10 | cc; // payload flag + continuity counter
//! }
//!
//! let mut corrector = ContinuityCorrector::new();
//! let corrections = corrector.process(&mut buf, "demo.ts")?;
//!
//! assert_eq!(corrections, 1);
//! assert_eq!(buf[188 + 3] & 0x0F, 1); // second packet rewritten to CC 1
//! # Ok(())
//! # }
//! ```
//!
//! ### Repairing files on disk
//!
//! ```rust,no_run
//! use tsccfix::{ContinuityCorrector, MappedTsFile};
//!
//! # fn main() -> tsccfix::Result<()> {
//! let mut corrector = ContinuityCorrector::new();
//! for path in ["seg0.ts", "seg1.ts"] {
//!     let mut file = MappedTsFile::open(path)?;
//!     let label = file.label().to_string();
//!     let corrections = corrector.process(file.as_mut_slice(), &label)?;
//!     file.flush()?;
//!     println!("'{}': {} corrected", label, corrections);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - `ts`: TS packet layout, header parsing, and the continuity corrector
//! - `io`: read-write file mapping with input-contract validation
//! - `report`: per-file and per-PID summary types
//! - `error`: error types and the crate `Result` alias

/// Error types and utilities
pub mod error;

/// Read-write file mapping for in-place repair
pub mod io;

/// Run summary reporting types
pub mod report;

/// MPEG transport stream handling and continuity correction
pub mod ts;

pub use error::{Result, TsccError};
pub use io::MappedTsFile;
pub use ts::corrector::ContinuityCorrector;
