//! Application layer use cases for the launcher.
//!
//! Use cases in this layer orchestrate `zdl_core` to fulfil a user goal and
//! depend on traits rather than concrete infrastructure, so the process
//! spawner can be replaced by a test double.  They contain no file system
//! access and no direct OS calls.
//!
//! # Sub-modules
//!
//! - **`launch`** – Turns the loaded configuration into a launch plan, starts
//!   the source port and, unless `autoclose` is set, waits for it to finish.

pub mod launch;
