/*!
 * Shared Test Fixtures
 * In-memory snapshot provider and recording sink
 */

// Not every test crate uses every fixture
#![allow(dead_code)]

use parking_lot::Mutex;
use procsim::{
    EventSink, Pid, ProcessRef, ProcessSample, RunSummary, SimulationStep, SnapshotError,
    SnapshotProvider, SnapshotResult,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Snapshot provider over a fixed in-memory process table
pub struct FakeProvider {
    alive: Mutex<BTreeMap<Pid, String>>,
}

impl FakeProvider {
    pub fn new(entries: &[(Pid, &str)]) -> Self {
        let alive = entries
            .iter()
            .map(|(pid, name)| (*pid, name.to_string()))
            .collect();
        Self {
            alive: Mutex::new(alive),
        }
    }
}

impl SnapshotProvider for FakeProvider {
    fn enumerate(&self) -> Vec<ProcessSample> {
        self.alive
            .lock()
            .iter()
            .map(|(pid, name)| ProcessSample {
                pid: *pid,
                name: name.clone(),
                status: "running".to_string(),
                cpu_percent: 0.0,
                memory_percent: 0.0,
            })
            .collect()
    }

    fn lookup(&self, pid: Pid) -> Option<ProcessRef> {
        self.alive
            .lock()
            .get(&pid)
            .map(|name| ProcessRef::new(pid, name.clone()))
    }

    fn terminate(&self, pid: Pid) -> SnapshotResult<()> {
        match self.alive.lock().remove(&pid) {
            Some(_) => Ok(()),
            None => Err(SnapshotError::ProcessNotFound(pid)),
        }
    }
}

/// Sink that records every callback for later assertions
#[derive(Default)]
pub struct RecordingSink {
    pub steps: Vec<SimulationStep>,
    pub summaries: Vec<RunSummary>,
    pub selections: Vec<Vec<ProcessRef>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_pids(&self) -> Vec<Pid> {
        self.steps.iter().map(|step| step.process.pid).collect()
    }
}

impl EventSink for RecordingSink {
    fn on_step(&mut self, step: &SimulationStep) {
        self.steps.push(step.clone());
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        self.summaries.push(summary.clone());
    }

    fn on_selection_changed(&mut self, selection: &[ProcessRef]) {
        self.selections.push(selection.to_vec());
    }
}

/// Cloneable handle to a `RecordingSink`, for sinks owned by a manager
#[derive(Clone, Default)]
pub struct SharedSink(pub Rc<RefCell<RecordingSink>>);

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for SharedSink {
    fn on_step(&mut self, step: &SimulationStep) {
        self.0.borrow_mut().on_step(step);
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        self.0.borrow_mut().on_run_complete(summary);
    }

    fn on_selection_changed(&mut self, selection: &[ProcessRef]) {
        self.0.borrow_mut().on_selection_changed(selection);
    }
}
