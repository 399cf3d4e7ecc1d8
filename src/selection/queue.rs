/*!
 * Selection Queue
 * Ordered, duplicate-free set of operator-selected processes
 */

use crate::core::errors::{SelectionError, SelectionResult};
use crate::core::types::{ExtractionOrder, Pid, ProcessRef};
use log::info;
use std::collections::VecDeque;

/// Ordered sequence of selected processes
///
/// Insertion order is the data: it defines the FIFO dispatch order and,
/// reversed, the LIFO dispatch order. No two entries share a pid.
///
/// The queue has a single owner at a time; a simulation run borrows it
/// mutably for the whole drain, so no other mutation can interleave.
#[derive(Debug, Clone, Default)]
pub struct SelectionQueue {
    entries: VecDeque<ProcessRef>,
}

impl SelectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a process at the insertion-order tail
    ///
    /// Fails with `AlreadySelected` and leaves the queue unchanged when an
    /// entry with the same pid is already present. Membership is a linear
    /// scan; the queue is operator-curated and stays small.
    pub fn append(&mut self, entry: ProcessRef) -> SelectionResult<()> {
        if self.contains(entry.pid) {
            return Err(SelectionError::AlreadySelected(entry.pid));
        }

        info!("Process {} added to selection", entry.pid);
        self.entries.push_back(entry);
        Ok(())
    }

    /// Check whether a pid is already selected
    pub fn contains(&self, pid: Pid) -> bool {
        self.entries.iter().any(|entry| entry.pid == pid)
    }

    /// Remove all entries unconditionally
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        info!("Selection cleared ({} entries removed)", removed);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Non-destructive read in insertion order
    pub fn snapshot_ordered(&self) -> Vec<ProcessRef> {
        self.entries.iter().cloned().collect()
    }

    /// Destructively remove and return every entry in the given order
    ///
    /// `Fifo` yields earliest-inserted first, `Lifo` most-recently-inserted
    /// first. The queue is empty afterward.
    pub fn drain(&mut self, order: ExtractionOrder) -> Vec<ProcessRef> {
        let mut drained = Vec::with_capacity(self.entries.len());
        loop {
            let next = match order {
                ExtractionOrder::Fifo => self.entries.pop_front(),
                ExtractionOrder::Lifo => self.entries.pop_back(),
            };
            match next {
                Some(entry) => drained.push(entry),
                None => break,
            }
        }

        info!("Selection drained in {} order ({} entries)", order, drained.len());
        drained
    }
}
