/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selection operation result
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Simulation operation result
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Snapshot provider operation result
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Selection-queue errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SelectionError {
    #[error("Process {0} is already selected")]
    #[diagnostic(
        code(selection::already_selected),
        help("Each process can appear in the selection only once.")
    )]
    AlreadySelected(Pid),
}

/// Simulation and comparison errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("No processes selected to simulate")]
    #[diagnostic(
        code(simulation::nothing_to_simulate),
        help("Select at least one process from the table before running a simulation.")
    )]
    NothingToSimulate,

    #[error("No processes selected to compare")]
    #[diagnostic(
        code(simulation::nothing_to_compare),
        help("Select at least one process from the table before comparing orders.")
    )]
    NothingToCompare,
}

/// Process-table errors with serialization support
///
/// A vanished entry during a run is not an error: the engine reports it as an
/// unresolved step and continues.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SnapshotError {
    #[error("Process {0} not found")]
    #[diagnostic(
        code(snapshot::process_not_found),
        help("The process may have exited already. Refresh the table and retry.")
    )]
    ProcessNotFound(Pid),

    #[error("Terminate signal for process {0} was refused")]
    #[diagnostic(
        code(snapshot::access_denied),
        help("The host OS rejected the signal. Check ownership and privileges.")
    )]
    AccessDenied(Pid),
}
