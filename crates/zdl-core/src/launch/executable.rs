//! Source port executable resolution.

use tracing::{debug, warn};

use super::{LaunchError, RequiredConfig};
use crate::domain::registry::{Registry, Resolution};
use crate::domain::sections;
use crate::domain::store::ConfigStore;

/// Registry key prefix for source ports (`p<N>n` / `p<N>f`).
const PORT_PREFIX: &str = "p";

/// Resolves `zdl.save/port` to the path registered in `zdl.ports`.
///
/// # Errors
///
/// Returns [`LaunchError::MissingRequiredConfig`] with
/// [`RequiredConfig::SourcePort`] when no port is selected, the ports section
/// is missing, or the name does not map to exactly one path.
pub fn resolve_executable(store: &impl ConfigStore) -> Result<String, LaunchError> {
    let missing = LaunchError::MissingRequiredConfig(RequiredConfig::SourcePort);

    let Some(port) = store.get_value(sections::SAVE, "port") else {
        debug!("no source port selected");
        return Err(missing);
    };
    let Some(section) = store.section(sections::PORTS) else {
        debug!("no [{}] section", sections::PORTS);
        return Err(missing);
    };

    match Registry::from_section(section, PORT_PREFIX).resolve(port) {
        Resolution::Found(path) => {
            debug!("executable: {path}");
            Ok(path.to_string())
        }
        Resolution::NotFound => {
            debug!("source port {port:?} is not registered");
            Err(missing)
        }
        Resolution::Ambiguous { index, candidates } => {
            warn!("source port {port:?} (p{index}n) has {candidates} paths; expected exactly one");
            Err(missing)
        }
    }
}
