/*!
 * Simulation Module
 * Scheduling-order replay and comparison
 */

pub mod compare;
pub mod engine;
pub mod types;

pub use compare::compare;
pub use engine::SimulationEngine;
pub use types::{Comparison, RunSummary, SimulationStep};
