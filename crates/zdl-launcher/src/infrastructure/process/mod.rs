//! Process infrastructure: starts the source port with `tokio::process`.
//!
//! The child inherits the launcher's stdin, stdout and stderr so engine
//! console output appears in the same terminal.  Dropping a
//! [`TokioRunningProcess`] leaves the engine running; that is how
//! `autoclose` detaches.
//!
//! # Testability
//!
//! [`mock::RecordingSpawner`] implements the same trait without touching the
//! OS, for integration tests of the launch use case.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::{Child, Command};
use tracing::debug;
use zdl_core::LaunchPlan;

use crate::application::launch::{ProcessError, ProcessExit, ProcessSpawner, RunningProcess};

pub mod mock;

/// Production [`ProcessSpawner`] backed by `tokio::process::Command`.
///
/// Must be used from within a Tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioProcessSpawner;

impl ProcessSpawner for TokioProcessSpawner {
    fn spawn(&self, plan: &LaunchPlan) -> Result<Box<dyn RunningProcess>, ProcessError> {
        debug!("spawning {} {:?}", plan.executable, plan.arguments);
        let child = Command::new(&plan.executable)
            .args(&plan.arguments)
            .current_dir(&plan.working_directory)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ProcessError::FailedToStart {
                executable: plan.executable.clone(),
                reason: e.to_string(),
            })?;

        Ok(Box::new(TokioRunningProcess { child }))
    }
}

/// A child started by [`TokioProcessSpawner`].
pub struct TokioRunningProcess {
    child: Child,
}

#[async_trait]
impl RunningProcess for TokioRunningProcess {
    async fn wait(&mut self) -> Result<ProcessExit, ProcessError> {
        let status = self
            .child
            .wait()
            .await
            .map_err(|e| ProcessError::Wait(e.to_string()))?;
        // No exit code means the process was killed (a signal on Unix).
        Ok(status.code().map_or(ProcessExit::Crashed, ProcessExit::Exited))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
