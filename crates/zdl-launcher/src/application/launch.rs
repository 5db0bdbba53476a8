//! LaunchUseCase: builds the launch plan and hands it to a process spawner.
//!
//! # Flow
//!
//! ```text
//! ConfigStore ──plan_launch──► LaunchPlan ──ProcessSpawner::spawn──► RunningProcess
//!                                                                       │
//!                                         autoclose? ── yes ──► Detached
//!                                                   └── no ───► wait() ──► Exited / Crashed
//! ```
//!
//! Either a complete plan is produced and handed to the spawner, or nothing
//! is started.  Every failure comes back as a [`LaunchUseCaseError`]; the
//! caller decides how to show it.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};
use zdl_core::domain::sections;
use zdl_core::{plan_launch, ConfigStore, LaunchError, LaunchPlan};

/// Errors reported by the process collaborator.
///
/// Starting and abnormal termination are kept apart so the user sees which
/// of the two went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("failed to start {executable}: {reason}")]
    FailedToStart { executable: String, reason: String },
    #[error("{executable} terminated abnormally")]
    Crashed { executable: String },
    #[error("failed to wait for the process: {0}")]
    Wait(String),
}

/// How a waited-for process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessExit {
    /// The process returned an exit code, zero or not.
    Exited(i32),
    /// The process was terminated without an exit code (e.g. by a signal).
    Crashed,
}

/// A started process that can be waited on.
#[async_trait]
pub trait RunningProcess: Send {
    async fn wait(&mut self) -> Result<ProcessExit, ProcessError>;
}

/// Trait for starting the source port described by a [`LaunchPlan`].
///
/// Infrastructure implementation uses `tokio::process`; tests record calls.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessSpawner: Send + Sync {
    /// Starts the process with the plan's working directory and arguments,
    /// inheriting the launcher's standard streams.
    fn spawn(&self, plan: &LaunchPlan) -> Result<Box<dyn RunningProcess>, ProcessError>;
}

/// Result of a successful launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// `autoclose` is set: the process was started and left running.
    Detached,
    /// The launcher waited and the process exited with this code.
    Exited(i32),
}

/// Error type for the launch use case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchUseCaseError {
    #[error(transparent)]
    Plan(#[from] LaunchError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl LaunchUseCaseError {
    /// Text to show the user, or `None` for failures that abort silently.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            LaunchUseCaseError::Plan(err) => err.user_message(),
            LaunchUseCaseError::Process(ProcessError::FailedToStart { .. }) => {
                Some("Failed to launch the application executable.")
            }
            LaunchUseCaseError::Process(ProcessError::Crashed { .. }) => {
                Some("The application ended abnormally (usually due to a crash or error).")
            }
            LaunchUseCaseError::Process(ProcessError::Wait(_)) => {
                Some("There was a problem running the application.")
            }
        }
    }
}

/// Returns `true` when `zdl.general/autoclose` asks the launcher to exit as
/// soon as the engine has started.
pub fn autoclose_enabled(store: &impl ConfigStore) -> bool {
    matches!(
        store.get_value(sections::GENERAL, "autoclose"),
        Some("1") | Some("true")
    )
}

/// Plans and starts a source port launch.
pub struct LaunchUseCase<S: ProcessSpawner> {
    spawner: S,
    current_dir: PathBuf,
}

impl<S: ProcessSpawner> LaunchUseCase<S> {
    /// `current_dir` anchors relative executable paths.
    pub fn new(spawner: S, current_dir: PathBuf) -> Self {
        Self {
            spawner,
            current_dir,
        }
    }

    /// Builds the plan without starting anything.
    ///
    /// # Errors
    ///
    /// Returns the [`LaunchError`] from `zdl_core::plan_launch`.
    pub fn plan(&self, store: &impl ConfigStore) -> Result<LaunchPlan, LaunchError> {
        plan_launch(store, &self.current_dir)
    }

    /// Plans, starts, and (unless `autoclose` is set) waits for the engine.
    ///
    /// # Errors
    ///
    /// - [`LaunchUseCaseError::Plan`] when the configuration is incomplete;
    ///   no process is started.
    /// - [`LaunchUseCaseError::Process`] when the process fails to start,
    ///   cannot be waited on, or terminates abnormally.
    pub async fn launch(
        &self,
        store: &impl ConfigStore,
    ) -> Result<LaunchOutcome, LaunchUseCaseError> {
        let plan = self.plan(store)?;
        let detach = autoclose_enabled(store);

        info!(
            "launching {} in {}",
            plan.executable,
            plan.working_directory.display()
        );
        let mut process = self.spawner.spawn(&plan)?;

        if detach {
            debug!("autoclose enabled; not waiting for the process");
            return Ok(LaunchOutcome::Detached);
        }

        match process.wait().await? {
            ProcessExit::Exited(code) => {
                info!("{} exited with code {code}", plan.executable);
                Ok(LaunchOutcome::Exited(code))
            }
            ProcessExit::Crashed => Err(ProcessError::Crashed {
                executable: plan.executable,
            }
            .into()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use zdl_core::{ConfigDocument, RequiredConfig};

    // ── Test doubles ──────────────────────────────────────────────────────────

    struct FixedExit(Result<ProcessExit, ProcessError>);

    #[async_trait]
    impl RunningProcess for FixedExit {
        async fn wait(&mut self) -> Result<ProcessExit, ProcessError> {
            self.0.clone()
        }
    }

    fn running(exit: Result<ProcessExit, ProcessError>) -> Box<dyn RunningProcess> {
        Box::new(FixedExit(exit))
    }

    fn exits_with(exit: Result<ProcessExit, ProcessError>) -> MockProcessSpawner {
        let mut spawner = MockProcessSpawner::new();
        spawner
            .expect_spawn()
            .times(1)
            .returning(move |_| Ok(running(exit.clone())));
        spawner
    }

    fn launchable() -> ConfigDocument {
        ConfigDocument::new()
            .with_value(sections::PORTS, "p0n", "zdoom")
            .with_value(sections::PORTS, "p0f", "/usr/games/zdoom")
            .with_value(sections::IWADS, "i0n", "doom2")
            .with_value(sections::IWADS, "i0f", "/iwads/doom2.wad")
            .with_value(sections::SAVE, "port", "zdoom")
            .with_value(sections::SAVE, "iwad", "doom2")
    }

    fn use_case(spawner: MockProcessSpawner) -> LaunchUseCase<MockProcessSpawner> {
        LaunchUseCase::new(spawner, PathBuf::from("/home/player"))
    }

    // ── autoclose ─────────────────────────────────────────────────────────────

    #[test]
    fn test_autoclose_accepts_one_and_true() {
        for value in ["1", "true"] {
            let store = ConfigDocument::new().with_value(sections::GENERAL, "autoclose", value);
            assert!(autoclose_enabled(&store), "{value} must enable autoclose");
        }
        for value in ["0", "false", "TRUE", ""] {
            let store = ConfigDocument::new().with_value(sections::GENERAL, "autoclose", value);
            assert!(!autoclose_enabled(&store), "{value} must not enable autoclose");
        }
        assert!(!autoclose_enabled(&ConfigDocument::new()));
    }

    // ── launch ────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_launch_passes_plan_to_spawner_and_waits() {
        // Arrange
        let mut spawner = MockProcessSpawner::new();
        spawner
            .expect_spawn()
            .withf(|plan: &LaunchPlan| {
                plan.executable == "/usr/games/zdoom"
                    && plan.working_directory == PathBuf::from("/usr/games")
                    && plan.arguments == ["-iwad", "/iwads/doom2.wad"]
            })
            .times(1)
            .returning(|_| Ok(running(Ok(ProcessExit::Exited(0)))));

        // Act
        let outcome = use_case(spawner).launch(&launchable()).await;

        // Assert
        assert_eq!(outcome, Ok(LaunchOutcome::Exited(0)));
    }

    #[tokio::test]
    async fn test_launch_reports_non_zero_exit_as_exited() {
        let outcome = use_case(exits_with(Ok(ProcessExit::Exited(3))))
            .launch(&launchable())
            .await;
        assert_eq!(outcome, Ok(LaunchOutcome::Exited(3)));
    }

    #[tokio::test]
    async fn test_launch_reports_crash() {
        let outcome = use_case(exits_with(Ok(ProcessExit::Crashed)))
            .launch(&launchable())
            .await;
        let err = outcome.expect_err("crash must be an error");
        assert!(matches!(
            err,
            LaunchUseCaseError::Process(ProcessError::Crashed { .. })
        ));
        assert_eq!(
            err.user_message(),
            Some("The application ended abnormally (usually due to a crash or error).")
        );
    }

    #[tokio::test]
    async fn test_launch_with_autoclose_does_not_wait() {
        // A wait failure would surface if the use case waited.
        let spawner = exits_with(Err(ProcessError::Wait("must not be called".into())));
        let store = launchable().with_value(sections::GENERAL, "autoclose", "true");

        let outcome = use_case(spawner).launch(&store).await;

        assert_eq!(outcome, Ok(LaunchOutcome::Detached));
    }

    #[tokio::test]
    async fn test_launch_start_failure_is_reported() {
        let mut spawner = MockProcessSpawner::new();
        spawner.expect_spawn().times(1).returning(|plan| {
            Err(ProcessError::FailedToStart {
                executable: plan.executable.clone(),
                reason: "No such file or directory".into(),
            })
        });

        let err = use_case(spawner)
            .launch(&launchable())
            .await
            .expect_err("start failure must be an error");

        assert_eq!(
            err.user_message(),
            Some("Failed to launch the application executable.")
        );
    }

    #[tokio::test]
    async fn test_launch_without_iwad_never_spawns() {
        let mut spawner = MockProcessSpawner::new();
        spawner.expect_spawn().never();
        let store = ConfigDocument::new()
            .with_value(sections::PORTS, "p0n", "zdoom")
            .with_value(sections::PORTS, "p0f", "/usr/games/zdoom")
            .with_value(sections::SAVE, "port", "zdoom");

        let outcome = use_case(spawner).launch(&store).await;

        assert_eq!(
            outcome,
            Err(LaunchUseCaseError::Plan(LaunchError::MissingRequiredConfig(
                RequiredConfig::Iwad
            )))
        );
    }

    #[tokio::test]
    async fn test_launch_with_empty_arguments_is_silent() {
        let mut spawner = MockProcessSpawner::new();
        spawner.expect_spawn().never();
        let store = ConfigDocument::new()
            .with_value(sections::PORTS, "p0n", "zdoom")
            .with_value(sections::PORTS, "p0f", "/usr/games/zdoom")
            .with_value(sections::SAVE, "port", "zdoom")
            .with_value(sections::SAVE, "iwad", "unregistered");

        let err = use_case(spawner)
            .launch(&store)
            .await
            .expect_err("empty result must abort");

        assert_eq!(err, LaunchUseCaseError::Plan(LaunchError::EmptyResult));
        assert_eq!(err.user_message(), None);
    }
}
