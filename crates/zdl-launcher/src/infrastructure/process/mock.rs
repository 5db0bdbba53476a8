//! Recording process spawner for tests.
//!
//! Records every [`LaunchPlan`] it is asked to start and hands back a
//! process that finishes with a preset result, without touching the OS.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use zdl_core::LaunchPlan;

use crate::application::launch::{ProcessError, ProcessExit, ProcessSpawner, RunningProcess};

/// A [`ProcessSpawner`] that records plans instead of starting processes.
#[derive(Clone)]
pub struct RecordingSpawner {
    spawned: Arc<Mutex<Vec<LaunchPlan>>>,
    waits: Arc<Mutex<u32>>,
    start_error: Option<String>,
    exit: Result<ProcessExit, ProcessError>,
}

impl RecordingSpawner {
    /// Creates a spawner whose processes exit with code 0.
    pub fn new() -> Self {
        Self::exiting_with(ProcessExit::Exited(0))
    }

    /// Creates a spawner whose processes end with `exit`.
    pub fn exiting_with(exit: ProcessExit) -> Self {
        Self {
            spawned: Arc::new(Mutex::new(Vec::new())),
            waits: Arc::new(Mutex::new(0)),
            start_error: None,
            exit: Ok(exit),
        }
    }

    /// Creates a spawner that refuses to start anything.
    pub fn failing_to_start(reason: &str) -> Self {
        Self {
            start_error: Some(reason.to_string()),
            ..Self::new()
        }
    }

    /// Plans passed to [`ProcessSpawner::spawn`], in call order.
    pub fn spawned(&self) -> Vec<LaunchPlan> {
        self.spawned.lock().expect("lock poisoned").clone()
    }

    /// Number of times a spawned process was waited on.
    pub fn wait_count(&self) -> u32 {
        *self.waits.lock().expect("lock poisoned")
    }
}

impl Default for RecordingSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, plan: &LaunchPlan) -> Result<Box<dyn RunningProcess>, ProcessError> {
        self.spawned.lock().expect("lock poisoned").push(plan.clone());
        if let Some(reason) = &self.start_error {
            return Err(ProcessError::FailedToStart {
                executable: plan.executable.clone(),
                reason: reason.clone(),
            });
        }
        Ok(Box::new(RecordedProcess {
            waits: Arc::clone(&self.waits),
            exit: self.exit.clone(),
        }))
    }
}

struct RecordedProcess {
    waits: Arc<Mutex<u32>>,
    exit: Result<ProcessExit, ProcessError>,
}

#[async_trait]
impl RunningProcess for RecordedProcess {
    async fn wait(&mut self) -> Result<ProcessExit, ProcessError> {
        *self.waits.lock().expect("lock poisoned") += 1;
        self.exit.clone()
    }
}
