//! Summary types for per-file and per-PID correction reporting.

use crate::ts::corrector::ContinuityCorrector;
use std::fmt;

/// Corrections applied to a single input file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Display label of the file.
    pub label: String,
    /// Corrections applied while processing this file.
    pub corrections: u64,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}': {} continuity counters corrected",
            self.label, self.corrections
        )
    }
}

/// Corrections applied to a single PID across the whole run.
#[derive(Debug, Clone)]
pub struct PidReport {
    /// 13-bit packet identifier.
    pub pid: u16,
    /// Corrections applied to this PID across all files.
    pub corrections: u64,
}

impl fmt::Display for PidReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PID: 0x{:04X}: {} continuity counters corrected",
            self.pid, self.corrections
        )
    }
}

/// End-of-run summary: one line per observed PID, ascending by PID.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Per-PID correction counts for every PID observed in the run.
    pub pids: Vec<PidReport>,
    /// Corrections applied across all files.
    pub total: u64,
}

impl RunReport {
    /// Snapshots the corrector's per-PID table.
    pub fn from_corrector(corrector: &ContinuityCorrector) -> Self {
        Self {
            pids: corrector
                .pids()
                .iter()
                .map(|entry| PidReport {
                    pid: entry.pid,
                    corrections: entry.correction_count,
                })
                .collect(),
            total: corrector.total_corrections(),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pid in &self.pids {
            writeln!(f, "{}", pid)?;
        }
        Ok(())
    }
}
