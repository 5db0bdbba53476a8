//! Domain entities for the ZDL launcher.
//!
//! This module contains pure data types with no infrastructure dependencies:
//! the configuration store contract and the registry built on top of it.
//!
//! The store is deliberately read-only here.  Loading and saving `zdl.ini`
//! belongs to the launcher's infrastructure layer; the domain only needs to
//! look values up.

/// Section/key-value configuration store contract.
///
/// See [`store::ConfigStore`] for the trait and [`store::ConfigDocument`]
/// for the in-memory implementation.
pub mod store;

/// Index-keyed name → path registry for source ports and IWADs.
pub mod registry;

/// Well-known section names used by the launcher.
pub mod sections {
    /// Current user selections (IWAD, port, skill, files, multiplayer).
    pub const SAVE: &str = "zdl.save";
    /// Registered source ports (`p<N>n` / `p<N>f`).
    pub const PORTS: &str = "zdl.ports";
    /// Registered IWADs (`i<N>n` / `i<N>f`).
    pub const IWADS: &str = "zdl.iwads";
    /// Advanced network options.
    pub const NET: &str = "zdl.net";
    /// Launcher-wide preferences.
    pub const GENERAL: &str = "zdl.general";
}
