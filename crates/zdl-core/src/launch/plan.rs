//! Launch plan: everything the process collaborator needs to start the engine.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::arguments::build_arguments;
use super::executable::resolve_executable;
use super::LaunchError;
use crate::domain::store::ConfigStore;

/// A complete, valid launch request.
///
/// Only ever constructed whole: if any part fails to resolve, [`plan_launch`]
/// returns an error and no plan exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    /// Source port binary as registered in `zdl.ports`.
    pub executable: String,
    /// Directory containing the executable, made absolute.
    pub working_directory: PathBuf,
    /// Engine arguments in emission order.
    pub arguments: Vec<String>,
}

/// Resolves the executable, builds the arguments and derives the working
/// directory.
///
/// The executable is resolved first, so a missing source port is reported
/// before a missing IWAD.  `current_dir` anchors relative executable paths.
///
/// # Errors
///
/// Propagates the [`LaunchError`] of whichever step fails first.
pub fn plan_launch(
    store: &impl ConfigStore,
    current_dir: &Path,
) -> Result<LaunchPlan, LaunchError> {
    let executable = resolve_executable(store)?;
    let arguments = build_arguments(store)?;
    let working_directory = working_directory_for(&executable, current_dir);
    debug!("working directory: {}", working_directory.display());

    Ok(LaunchPlan {
        executable,
        working_directory,
        arguments,
    })
}

/// Strips the file name from `executable` and anchors the rest at
/// `current_dir` when it is relative.  An empty directory part (`zdoom`,
/// `/zdoom`) yields `current_dir`.
///
/// Backslashes are treated as separators so Windows-style paths stored in a
/// shared `zdl.ini` still yield their directory.
pub fn working_directory_for(executable: &str, current_dir: &Path) -> PathBuf {
    let normalized = executable.replace('\\', "/");
    // `/zdoom` leaves an empty directory part, like a bare name.
    let dir = normalized.rfind('/').map_or("", |end| &normalized[..end]);

    if dir.is_empty() {
        return current_dir.to_path_buf();
    }
    let dir = Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        current_dir.join(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sections;
    use crate::domain::store::ConfigDocument;
    use crate::launch::RequiredConfig;

    fn cwd() -> PathBuf {
        PathBuf::from("/home/player")
    }

    #[test]
    fn test_working_directory_of_absolute_executable() {
        assert_eq!(
            working_directory_for("/usr/games/zdoom", &cwd()),
            PathBuf::from("/usr/games")
        );
    }

    #[test]
    fn test_working_directory_of_relative_executable() {
        assert_eq!(
            working_directory_for("ports/gzdoom/gzdoom", &cwd()),
            PathBuf::from("/home/player/ports/gzdoom")
        );
    }

    #[test]
    fn test_working_directory_of_bare_executable_is_current_dir() {
        assert_eq!(working_directory_for("zdoom", &cwd()), cwd());
    }

    #[test]
    fn test_working_directory_of_root_executable_is_current_dir() {
        assert_eq!(working_directory_for("/zdoom", &cwd()), cwd());
        assert_eq!(working_directory_for("\\zdoom.exe", &cwd()), cwd());
    }

    #[test]
    fn test_working_directory_accepts_backslashes() {
        let dir = working_directory_for("C:\\Games\\ZDoom\\zdoom.exe", &cwd());
        assert!(dir.ends_with("C:/Games/ZDoom"), "got {dir:?}");
    }

    #[test]
    fn test_plan_launch_reports_missing_port_before_missing_iwad() {
        let store = ConfigDocument::new();
        assert_eq!(
            plan_launch(&store, &cwd()),
            Err(LaunchError::MissingRequiredConfig(RequiredConfig::SourcePort))
        );
    }

    #[test]
    fn test_plan_launch_builds_complete_plan() {
        // Arrange
        let store = ConfigDocument::new()
            .with_value(sections::PORTS, "p0n", "zdoom")
            .with_value(sections::PORTS, "p0f", "/usr/games/zdoom")
            .with_value(sections::IWADS, "i0n", "doom2")
            .with_value(sections::IWADS, "i0f", "/iwads/doom2.wad")
            .with_value(sections::SAVE, "port", "zdoom")
            .with_value(sections::SAVE, "iwad", "doom2");

        // Act
        let plan = plan_launch(&store, &cwd()).expect("plan must build");

        // Assert
        assert_eq!(plan.executable, "/usr/games/zdoom");
        assert_eq!(plan.working_directory, PathBuf::from("/usr/games"));
        assert_eq!(plan.arguments, vec!["-iwad", "/iwads/doom2.wad"]);
    }
}
