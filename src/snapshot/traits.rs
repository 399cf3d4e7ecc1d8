/*!
 * Snapshot Traits
 * OS process-table abstraction consumed by the core
 */

use super::types::ProcessSample;
use crate::core::errors::SnapshotResult;
use crate::core::types::{Pid, ProcessRef};

/// On-demand view of the host's process table
///
/// Calls are blocking, synchronous, and individually atomic. The core performs
/// no retries: a failed lookup is reported as a vanished entry, a failed
/// terminate as an error notice.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotProvider: Send + Sync {
    /// Enumerate the current process table
    ///
    /// Entries that vanish or are inaccessible mid-enumeration are silently
    /// skipped.
    fn enumerate(&self) -> Vec<ProcessSample>;

    /// Look up a single process by pid; `None` means no such process
    fn lookup(&self, pid: Pid) -> Option<ProcessRef>;

    /// Terminate a process by pid
    fn terminate(&self, pid: Pid) -> SnapshotResult<()>;
}
