/*!
 * Simulation Engine
 * Drains the selection in a chosen order and resolves each entry live
 */

use super::types::{RunSummary, SimulationStep};
use crate::core::types::ExtractionOrder;
use crate::events::EventSink;
use crate::selection::SelectionQueue;
use crate::snapshot::SnapshotProvider;
use log::{info, warn};
use std::thread;
use std::time::Duration;

/// Replays the selection through one extraction order
///
/// FIFO and LIFO are the same drain-and-resolve routine parameterized by the
/// order passed to the queue, so the two can never diverge in resolution or
/// pacing semantics.
pub struct SimulationEngine {
    slot: Duration,
}

impl SimulationEngine {
    /// Wall-clock pause between dispatched entries
    pub const DEFAULT_SLOT: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::with_slot(Self::DEFAULT_SLOT)
    }

    /// Create an engine with a custom execution slot
    pub fn with_slot(slot: Duration) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> Duration {
        self.slot
    }

    /// Drain `queue` fully in `order`, resolving each entry against `provider`
    ///
    /// Every drained entry produces exactly one step on the sink, vanished or
    /// not; a vanished entry never aborts the run. One execution slot elapses
    /// between consecutive entries. An empty queue yields a summary flagged
    /// `nothing_to_simulate` and invokes no callbacks.
    pub fn run<P, S>(
        &self,
        order: ExtractionOrder,
        queue: &mut SelectionQueue,
        provider: &P,
        sink: &mut S,
    ) -> RunSummary
    where
        P: SnapshotProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if queue.is_empty() {
            info!("{} run requested with empty selection", order);
            return RunSummary::empty(order);
        }

        let entries = queue.drain(order);
        let total = entries.len();
        let mut vanished = 0;

        info!("{} run starting over {} entries", order, total);

        for (index, process) in entries.into_iter().enumerate() {
            let live_name = provider.lookup(process.pid).map(|live| live.name);
            let resolved = live_name.is_some();
            if !resolved {
                vanished += 1;
                warn!("Process {} vanished before dispatch", process.pid);
            }

            let remaining = total - index - 1;
            let step = SimulationStep {
                index,
                process,
                resolved,
                live_name,
                remaining,
            };
            sink.on_step(&step);

            // One execution slot per entry; nothing left to pace after the last
            if remaining > 0 {
                thread::sleep(self.slot);
            }
        }

        let summary = RunSummary::completed(order, total, vanished);
        sink.on_run_complete(&summary);
        info!(
            "{} run complete: {} dispatched, {} vanished",
            order, total, vanished
        );
        summary
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ProcessRef;
    use crate::events::NullSink;
    use crate::snapshot::traits::MockSnapshotProvider;

    fn zero_slot_engine() -> SimulationEngine {
        SimulationEngine::with_slot(Duration::ZERO)
    }

    #[test]
    fn test_empty_queue_reports_nothing_to_simulate() {
        let provider = MockSnapshotProvider::new();
        let mut queue = SelectionQueue::new();

        let summary =
            zero_slot_engine().run(ExtractionOrder::Fifo, &mut queue, &provider, &mut NullSink);

        assert!(summary.nothing_to_simulate);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.vanished, 0);
    }

    #[test]
    fn test_run_resolves_entries_against_provider() {
        let mut provider = MockSnapshotProvider::new();
        provider
            .expect_lookup()
            .returning(|pid| Some(ProcessRef::new(pid, "live")));

        let mut queue = SelectionQueue::new();
        queue.append(ProcessRef::new(7, "stale")).unwrap();

        let summary =
            zero_slot_engine().run(ExtractionOrder::Fifo, &mut queue, &provider, &mut NullSink);

        assert!(!summary.nothing_to_simulate);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.vanished, 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_vanished_entry_counted_not_fatal() {
        let mut provider = MockSnapshotProvider::new();
        provider.expect_lookup().returning(|_| None);

        let mut queue = SelectionQueue::new();
        queue.append(ProcessRef::new(201, "x")).unwrap();
        queue.append(ProcessRef::new(202, "y")).unwrap();

        let summary =
            zero_slot_engine().run(ExtractionOrder::Lifo, &mut queue, &provider, &mut NullSink);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.vanished, 2);
        assert!(queue.is_empty());
    }
}
