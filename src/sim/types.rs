/*!
 * Simulation Types
 * Per-step outcomes and run summaries
 */

use crate::core::serde::{is_false, is_none, is_zero_usize};
use crate::core::types::{ExtractionOrder, ProcessRef};
use serde::{Deserialize, Serialize};

/// Outcome of dispatching one drained entry
///
/// Produced transiently during a run and handed to the presentation sink;
/// not stored by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationStep {
    /// Position in extraction order, starting at 0
    pub index: usize,
    /// The entry as captured at selection time
    pub process: ProcessRef,
    /// Whether the process still existed at dispatch time
    pub resolved: bool,
    /// Name reported by the live process table, when resolved
    #[serde(skip_serializing_if = "is_none")]
    pub live_name: Option<String>,
    /// Entries still waiting behind this one
    #[serde(skip_serializing_if = "is_zero_usize")]
    pub remaining: usize,
}

/// Summary of one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunSummary {
    pub order: ExtractionOrder,
    #[serde(skip_serializing_if = "is_zero_usize")]
    pub total: usize,
    #[serde(skip_serializing_if = "is_zero_usize")]
    pub vanished: usize,
    #[serde(skip_serializing_if = "is_false")]
    pub nothing_to_simulate: bool,
}

impl RunSummary {
    /// Summary for a run requested over an empty selection
    pub fn empty(order: ExtractionOrder) -> Self {
        Self {
            order,
            total: 0,
            vanished: 0,
            nothing_to_simulate: true,
        }
    }

    /// Summary for a completed drain
    pub fn completed(order: ExtractionOrder, total: usize, vanished: usize) -> Self {
        Self {
            order,
            total,
            vanished,
            nothing_to_simulate: false,
        }
    }
}

/// FIFO and LIFO dispatch orders of the same unmodified selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Comparison {
    pub fifo: Vec<ProcessRef>,
    pub lifo: Vec<ProcessRef>,
}
