/*!
 * Snapshot Types
 * Rows of the live process table
 */

use crate::core::types::Pid;
use serde::{Deserialize, Serialize};

/// One row of the live process table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSample {
    pub pid: Pid,
    pub name: String,
    pub status: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
}
