/*!
 * Presentation Events
 * Callback contract between the core and the presentation layer
 */

use crate::core::types::ProcessRef;
use crate::sim::types::{RunSummary, SimulationStep};

/// Presentation-layer callbacks, invoked synchronously
///
/// The engine and manager push state changes through this trait instead of
/// touching any widget directly, so the pacing and rendering of a run are
/// substitutable policies.
pub trait EventSink {
    /// Called once per drained entry during a run, in extraction order
    fn on_step(&mut self, step: &SimulationStep);

    /// Called once after all entries of a non-empty run were processed
    fn on_run_complete(&mut self, summary: &RunSummary);

    /// Called after append/clear/drain so the presentation can refresh its
    /// view of the current selection
    fn on_selection_changed(&mut self, selection: &[ProcessRef]);
}

/// Sink that discards every event, for headless callers
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_step(&mut self, _step: &SimulationStep) {}

    fn on_run_complete(&mut self, _summary: &RunSummary) {}

    fn on_selection_changed(&mut self, _selection: &[ProcessRef]) {}
}
