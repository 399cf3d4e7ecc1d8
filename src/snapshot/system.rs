/*!
 * System Snapshot Provider
 * Live process table backed by sysinfo
 */

use super::traits::SnapshotProvider;
use super::types::ProcessSample;
use crate::core::errors::{SnapshotError, SnapshotResult};
use crate::core::types::{Pid, ProcessRef};
use log::{info, warn};
use parking_lot::Mutex;
use sysinfo::{ProcessesToUpdate, Signal, System};

/// Snapshot provider backed by the host OS via sysinfo
///
/// The `System` handle is refreshed on every call, so each operation sees the
/// process table as of that call. The mutex makes each call individually
/// atomic; the core itself is single-threaded.
pub struct SystemProvider {
    sys: Mutex<System>,
}

impl SystemProvider {
    pub fn new() -> Self {
        Self {
            sys: Mutex::new(System::new()),
        }
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotProvider for SystemProvider {
    fn enumerate(&self) -> Vec<ProcessSample> {
        let mut sys = self.sys.lock();
        sys.refresh_memory();
        sys.refresh_processes(ProcessesToUpdate::All, true);

        let total_memory = sys.total_memory();
        let mut rows: Vec<ProcessSample> = sys
            .processes()
            .values()
            .map(|proc| ProcessSample {
                pid: proc.pid().as_u32(),
                name: proc.name().to_string_lossy().into_owned(),
                status: proc.status().to_string(),
                cpu_percent: proc.cpu_usage(),
                memory_percent: if total_memory == 0 {
                    0.0
                } else {
                    (proc.memory() as f64 / total_memory as f64 * 100.0) as f32
                },
            })
            .collect();

        // Stable display order
        rows.sort_unstable_by_key(|row| row.pid);

        info!("Enumerated {} processes", rows.len());
        rows
    }

    fn lookup(&self, pid: Pid) -> Option<ProcessRef> {
        let mut sys = self.sys.lock();
        let target = sysinfo::Pid::from_u32(pid);
        sys.refresh_processes(ProcessesToUpdate::Some(&[target]), true);

        sys.process(target)
            .map(|proc| ProcessRef::new(pid, proc.name().to_string_lossy().into_owned()))
    }

    fn terminate(&self, pid: Pid) -> SnapshotResult<()> {
        let mut sys = self.sys.lock();
        let target = sysinfo::Pid::from_u32(pid);
        sys.refresh_processes(ProcessesToUpdate::Some(&[target]), true);

        let proc = sys
            .process(target)
            .ok_or(SnapshotError::ProcessNotFound(pid))?;

        // Prefer a catchable SIGTERM; fall back to a plain kill on platforms
        // without per-signal delivery.
        let delivered = proc.kill_with(Signal::Term).unwrap_or_else(|| proc.kill());
        if delivered {
            info!("Sent terminate signal to process {}", pid);
            Ok(())
        } else {
            warn!("Terminate signal for process {} was refused", pid);
            Err(SnapshotError::AccessDenied(pid))
        }
    }
}
