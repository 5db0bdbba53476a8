//! # zdl-core
//!
//! Shared library for the ZDL launcher containing the configuration store
//! contract, the indexed port/IWAD registry, and the command-line argument
//! builder.
//!
//! This crate has zero dependencies on OS APIs, file systems, or process
//! spawning.  Everything it does is a pure transform from an in-memory
//! configuration snapshot to a launch plan.
//!
//! # Architecture overview
//!
//! ZDL is a launcher for Doom source ports.  The user picks an IWAD, a source
//! port executable, extra PWAD/DeHackEd files and multiplayer options; all of
//! it is persisted in a sectioned INI file (`zdl.ini`).  At launch time those
//! settings are turned into an ordered argument list for the engine.
//!
//! - **`domain`** – The configuration store contract ([`ConfigStore`],
//!   [`Section`]) and the [`Registry`] that joins `p<N>n` / `p<N>f` style key
//!   pairs into name → path records.
//!
//! - **`launch`** – The argument builder: [`resolve_executable`],
//!   [`build_arguments`] and [`plan_launch`], which produce a [`LaunchPlan`]
//!   or a [`LaunchError`] explaining why nothing should be launched.

pub mod domain;
pub mod launch;

// Re-export the most-used types at the crate root so callers can write
// `zdl_core::ConfigDocument` instead of `zdl_core::domain::store::ConfigDocument`.
pub use domain::registry::{IndexedKey, Registry, RegistryEntry, Resolution};
pub use domain::store::{ConfigDocument, ConfigLine, ConfigStore, Section};
pub use launch::arguments::build_arguments;
pub use launch::executable::resolve_executable;
pub use launch::plan::{plan_launch, working_directory_for, LaunchPlan};
pub use launch::{LaunchError, RequiredConfig};
