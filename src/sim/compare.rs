/*!
 * Order Comparison
 * Side-by-side FIFO/LIFO derivation without draining the queue
 */

use super::types::Comparison;
use crate::core::errors::{SimulationError, SimulationResult};
use crate::selection::SelectionQueue;

/// Derive both dispatch orders from the same unmodified selection
///
/// Reads the queue once: the FIFO order is the insertion-order snapshot, the
/// LIFO order its reverse. The queue is never mutated, so a later simulation
/// still drains the original selection. This is deliberately distinct from a
/// destructive LIFO run and must stay so.
pub fn compare(queue: &SelectionQueue) -> SimulationResult<Comparison> {
    let fifo = queue.snapshot_ordered();
    if fifo.is_empty() {
        return Err(SimulationError::NothingToCompare);
    }

    let mut lifo = fifo.clone();
    lifo.reverse();

    Ok(Comparison { fifo, lifo })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ExtractionOrder, Pid, ProcessRef};

    #[test]
    fn test_compare_derives_both_orders_without_mutation() {
        let mut queue = SelectionQueue::new();
        for pid in [101u32, 102, 103] {
            queue.append(ProcessRef::new(pid, "p")).unwrap();
        }

        let comparison = compare(&queue).unwrap();
        let fifo: Vec<Pid> = comparison.fifo.iter().map(|e| e.pid).collect();
        let lifo: Vec<Pid> = comparison.lifo.iter().map(|e| e.pid).collect();

        assert_eq!(fifo, vec![101, 102, 103]);
        assert_eq!(lifo, vec![103, 102, 101]);

        // Queue still holds all three, in insertion order
        assert_eq!(queue.len(), 3);
        let drained: Vec<Pid> = queue
            .drain(ExtractionOrder::Fifo)
            .into_iter()
            .map(|e| e.pid)
            .collect();
        assert_eq!(drained, vec![101, 102, 103]);
    }

    #[test]
    fn test_compare_empty_queue_fails() {
        let queue = SelectionQueue::new();
        assert_eq!(
            compare(&queue).unwrap_err(),
            SimulationError::NothingToCompare
        );
    }
}
