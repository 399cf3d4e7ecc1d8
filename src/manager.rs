/*!
 * Task Manager
 * Top-level controller owning the selection and wiring operator actions
 */

use crate::core::errors::{SelectionResult, SimulationResult, SnapshotResult};
use crate::core::types::{ExtractionOrder, Pid, ProcessRef};
use crate::events::EventSink;
use crate::selection::SelectionQueue;
use crate::sim::{compare, Comparison, RunSummary, SimulationEngine};
use crate::snapshot::{ProcessSample, SnapshotProvider};
use log::info;

/// Controller for one operator session
///
/// Exclusively owns the `SelectionQueue`; the engine borrows it per run and
/// never retains it. Each operator action runs to completion before the next
/// is accepted.
pub struct TaskManager<P, S> {
    queue: SelectionQueue,
    engine: SimulationEngine,
    provider: P,
    sink: S,
}

impl<P, S> TaskManager<P, S>
where
    P: SnapshotProvider,
    S: EventSink,
{
    pub fn new(provider: P, sink: S) -> Self {
        Self::with_engine(provider, sink, SimulationEngine::new())
    }

    /// Create a manager with a custom-paced engine
    pub fn with_engine(provider: P, sink: S, engine: SimulationEngine) -> Self {
        info!("Task manager initialized (slot: {:?})", engine.slot());
        Self {
            queue: SelectionQueue::new(),
            engine,
            provider,
            sink,
        }
    }

    /// Enumerate the live process table
    pub fn refresh(&self) -> Vec<ProcessSample> {
        self.provider.enumerate()
    }

    /// Append a process to the selection
    ///
    /// On success the sink sees the updated selection; on `AlreadySelected`
    /// nothing changes and no event fires.
    pub fn select(&mut self, pid: Pid, name: impl Into<String>) -> SelectionResult<()> {
        self.queue.append(ProcessRef::new(pid, name))?;
        self.sink.on_selection_changed(&self.queue.snapshot_ordered());
        Ok(())
    }

    /// Drop the entire selection
    pub fn clear_selection(&mut self) {
        self.queue.clear();
        self.sink.on_selection_changed(&[]);
    }

    /// Current selection in insertion order
    pub fn selection(&self) -> Vec<ProcessRef> {
        self.queue.snapshot_ordered()
    }

    pub fn selection_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Replay the selection in the given order, consuming it
    ///
    /// After a non-empty run the queue is drained and the sink sees the now
    /// empty selection. A run over an empty queue is a no-op summarized as
    /// `nothing_to_simulate`.
    pub fn simulate(&mut self, order: ExtractionOrder) -> RunSummary {
        let summary = self
            .engine
            .run(order, &mut self.queue, &self.provider, &mut self.sink);
        if !summary.nothing_to_simulate {
            self.sink.on_selection_changed(&[]);
        }
        summary
    }

    /// Derive both dispatch orders without touching the selection
    pub fn compare(&self) -> SimulationResult<Comparison> {
        compare(&self.queue)
    }

    /// Terminate an OS process and return the refreshed table
    ///
    /// The selection is left untouched either way; a selected entry that was
    /// just terminated will simply resolve as vanished when dispatched.
    pub fn terminate(&self, pid: Pid) -> SnapshotResult<Vec<ProcessSample>> {
        self.provider.terminate(pid)?;
        Ok(self.provider.enumerate())
    }
}
