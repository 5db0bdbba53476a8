//! `zdl.ini` loading for the launcher.
//!
//! Reads the ZDL configuration from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\ZDL\zdl.ini`
//! - Linux:    `$XDG_CONFIG_HOME/zdl/zdl.ini` or `~/.config/zdl/zdl.ini`
//! - macOS:    `~/Library/Application Support/ZDL/zdl.ini`
//!
//! # File format
//!
//! ```ini
//! ; comment
//! [zdl.save]
//! iwad=doom2
//! file0=C:\wads\my mod.wad
//!
//! [zdl.ports]
//! p0n=zdoom
//! p0f=/usr/games/zdoom
//! ```
//!
//! Lines are `key=value`, split at the first `=`.  Keys and values are
//! trimmed; everything else in the value is kept verbatim, including further
//! `=` signs and spaces.  Blank lines and lines starting with `;` or `#` are
//! skipped.  A repeated `[section]` header continues the earlier section.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use zdl_core::ConfigDocument;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// The config file does not exist.
    #[error("config file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to `zdl.ini`.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("zdl.ini"))
}

/// Loads the configuration document at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when the file does not exist and
/// [`ConfigError::Io`] for any other file-system failure.
pub fn load_config(path: &Path) -> Result<ConfigDocument, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!("read configuration from {}", path.display());
            Ok(parse_ini(&content))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parses INI text into a [`ConfigDocument`], preserving line order.
///
/// Never fails: lines that are not headers or `key=value` pairs are skipped.
pub fn parse_ini(content: &str) -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    let mut current: Option<String> = None;

    for (number, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim();
            doc.section_mut(name);
            current = Some(name.to_string());
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            debug!("line {}: not a key=value pair; skipped", number + 1);
            continue;
        };
        let Some(section) = current.as_deref() else {
            debug!("line {}: key outside any section; skipped", number + 1);
            continue;
        };
        doc.push_value(section, key.trim(), value.trim());
    }

    doc
}

/// Resolves the platform config base directory including the `zdl` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("ZDL"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("zdl"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("ZDL")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
