//! Infrastructure layer for the launcher.
//!
//! Contains OS-facing adapters: `zdl.ini` loading from the platform config
//! directory and the tokio-based process spawner.
//!
//! **Dependency rule**: this layer may depend on `application` and `zdl_core`,
//! but MUST NOT be imported by the `application` or domain layers.

pub mod process;
pub mod storage;
