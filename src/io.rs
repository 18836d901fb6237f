//! Read-write file mapping for in-place TS repair.
//!
//! [`MappedTsFile::open`] performs the whole input-contract check the
//! corrector relies on: the path must name a regular, non-empty file
//! whose length is a whole number of 188-byte packets. The contents are
//! then mapped read-write and shared, so continuity patches land in the
//! file itself. On Unix an advisory exclusive lock is taken for the
//! lifetime of the mapping to discourage simultaneous editing.

use crate::error::{Result, TsccError};
use crate::ts::TS_PACKET_SIZE;
use memmap2::MmapMut;
use std::fs::{File, OpenOptions};
use std::path::Path;

#[cfg(unix)]
use log::warn;
#[cfg(unix)]
use nix::fcntl::{Flock, FlockArg};

/// A TS file opened read-write and mapped into memory.
pub struct MappedTsFile {
    label: String,
    map: MmapMut,
    // Keeps the descriptor (and on Unix the advisory lock) alive for as
    // long as the mapping is.
    _handle: FileHandle,
}

enum FileHandle {
    #[cfg(unix)]
    Locked(Flock<File>),
    Plain(File),
}

impl FileHandle {
    fn file(&self) -> &File {
        match self {
            #[cfg(unix)]
            FileHandle::Locked(lock) => lock,
            FileHandle::Plain(file) => file,
        }
    }
}

impl MappedTsFile {
    /// Opens `path` read-write, validates it, and maps its contents.
    ///
    /// Fails if the path is not a regular file, is empty, or has a
    /// length that is not a multiple of 188 bytes.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();

        let file = OpenOptions::new().read(true).write(true).open(path)?;

        let meta = file.metadata()?;
        if !meta.file_type().is_file() {
            return Err(TsccError::NotRegular { file: label });
        }
        if meta.len() == 0 {
            return Err(TsccError::Empty { file: label });
        }
        if meta.len() % TS_PACKET_SIZE as u64 != 0 {
            return Err(TsccError::Misaligned {
                file: label,
                length: meta.len(),
            });
        }

        let handle = lock_exclusive(file, &label);
        let map = unsafe { MmapMut::map_mut(handle.file())? };

        Ok(Self {
            label,
            map,
            _handle: handle,
        })
    }

    /// Human-readable label used in reports and errors.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The mapped file contents.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.map
    }

    /// Writes outstanding patches back to the underlying file.
    pub fn flush(&self) -> Result<()> {
        self.map.flush()?;
        Ok(())
    }
}

// The lock only discourages simultaneous editing; a filesystem that
// cannot take it does not stop the repair.
#[cfg(unix)]
fn lock_exclusive(file: File, label: &str) -> FileHandle {
    match Flock::lock(file, FlockArg::LockExclusive) {
        Ok(lock) => FileHandle::Locked(lock),
        Err((file, errno)) => {
            warn!("'{}': could not take exclusive lock: {}", label, errno);
            FileHandle::Plain(file)
        }
    }
}

#[cfg(not(unix))]
fn lock_exclusive(file: File, _label: &str) -> FileHandle {
    FileHandle::Plain(file)
}
