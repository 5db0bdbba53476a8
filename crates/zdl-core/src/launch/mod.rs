//! Launch planning: from a configuration snapshot to an executable, a working
//! directory and an ordered argument list.
//!
//! # Sub-modules
//!
//! - **`executable`** – Resolves `zdl.save/port` to the source port binary.
//! - **`arguments`** – Builds the engine command line (`-iwad`, `-file`,
//!   `+set dmflags`, network flags, quoting, raw extras).
//! - **`plan`** – Combines both and derives the working directory.
//!
//! Every function takes the store by reference and returns either a complete
//! result or a [`LaunchError`].  Nothing here touches the file system or
//! starts a process; the caller decides how to report a failure.

use std::fmt;

use thiserror::Error;

pub mod arguments;
pub mod executable;
pub mod plan;

/// A setting the user must choose before anything can be launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredConfig {
    /// `zdl.save/iwad` is missing or empty.
    Iwad,
    /// `zdl.save/port` is missing or does not resolve to a registered port.
    SourcePort,
}

impl fmt::Display for RequiredConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredConfig::Iwad => f.write_str("IWAD"),
            RequiredConfig::SourcePort => f.write_str("source port"),
        }
    }
}

/// Reasons a launch plan could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// A required selection is absent or could not be resolved.
    #[error("no {0} selected")]
    MissingRequiredConfig(RequiredConfig),

    /// The argument list joined to an empty string.
    #[error("the argument list is empty; nothing to launch")]
    EmptyResult,
}

impl LaunchError {
    /// Text shown to the user, or `None` when the failure is silent.
    ///
    /// An empty argument list aborts without a message.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            LaunchError::MissingRequiredConfig(RequiredConfig::Iwad) => {
                Some("Please select an IWAD")
            }
            LaunchError::MissingRequiredConfig(RequiredConfig::SourcePort) => {
                Some("Please select a source port")
            }
            LaunchError::EmptyResult => None,
        }
    }
}
