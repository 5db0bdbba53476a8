//! Storage infrastructure: configuration file loading.
//!
//! The `config` sub-module locates `zdl.ini` in the platform-appropriate
//! directory and reads it into a [`zdl_core::ConfigDocument`].  Writing the
//! file back is left to the tools that edit it; the launcher only reads.

pub mod config;
