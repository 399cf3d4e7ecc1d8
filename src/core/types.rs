/*!
 * Core Types
 * Common types shared across the crate
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Process ID type (OS-assigned)
pub type Pid = u32;

/// Reference to a process captured at selection time
///
/// Holds the pid and the display name the process had when the operator
/// selected it. The live name may differ by the time the entry is dispatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRef {
    pub pid: Pid,
    pub name: String,
}

impl ProcessRef {
    pub fn new(pid: Pid, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
        }
    }
}

// Identity is the pid alone; the captured name is display metadata.
impl PartialEq for ProcessRef {
    fn eq(&self, other: &Self) -> bool {
        self.pid == other.pid
    }
}

impl Eq for ProcessRef {}

impl Hash for ProcessRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pid.hash(state);
    }
}

impl fmt::Display for ProcessRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pid, self.name)
    }
}

/// Extraction order used when draining the selection queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionOrder {
    /// First-in-first-out: earliest-selected entry is dispatched first
    Fifo,
    /// Last-in-first-out: most-recently-selected entry is dispatched first
    Lifo,
}

impl fmt::Display for ExtractionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionOrder::Fifo => write!(f, "FIFO"),
            ExtractionOrder::Lifo => write!(f, "LIFO"),
        }
    }
}
