//! Engine command-line construction.
//!
//! [`build_arguments`] walks the configuration in a fixed order and appends
//! tokens for every setting that is present.  The token vocabulary belongs to
//! the ZDoom family of engines and is reproduced exactly, including the
//! `-deathmath` spelling those engines have always accepted from ZDL.
//!
//! ```text
//! -iwad <path>                      zdl.save/iwad via zdl.iwads
//! -skill <n>                        zdl.save/skill
//! +map <map>                        zdl.save/warp
//! +set dmflags <n>                  zdl.save/dmflags
//! +set dmflags2 <n>                 zdl.save/dmflags2
//! -file <pwad>...                   zdl.save/file<N> (not .deh/.bex)
//! -deh <patch>...                   zdl.save/file<N> (.deh/.bex)
//! -deathmath -host <n> | -join <h>  zdl.save/gametype, players, host
//! +set fraglimit <n>                zdl.save/fraglimit
//! -port -extratic -netmode -dup     zdl.net/*
//! <alwaysadd> <extra>               raw, appended after quoting
//! ```

use tracing::{debug, warn};

use super::{LaunchError, RequiredConfig};
use crate::domain::registry::{IndexedKey, Registry, Resolution};
use crate::domain::sections;
use crate::domain::store::ConfigStore;

/// Registry key prefix for IWADs (`i<N>n` / `i<N>f`).
const IWAD_PREFIX: &str = "i";

/// Extra file keys in `zdl.save` are `file<N>`.
const FILE_PREFIX: &str = "file";

/// Suffixes routed to `-deh` instead of `-file`.
const DEHACKED_SUFFIXES: [&str; 2] = [".deh", ".bex"];

/// Value of the enable-style switches in the INI file.
const ENABLED: &str = "enabled";

/// Builds the ordered argument list for the selected source port.
///
/// # Errors
///
/// - [`LaunchError::MissingRequiredConfig`] with [`RequiredConfig::Iwad`]
///   when `zdl.save/iwad` is absent or empty.
/// - [`LaunchError::EmptyResult`] when every token is empty.
pub fn build_arguments(store: &impl ConfigStore) -> Result<Vec<String>, LaunchError> {
    let iwad = store
        .get_value(sections::SAVE, "iwad")
        .filter(|name| !name.is_empty())
        .ok_or(LaunchError::MissingRequiredConfig(RequiredConfig::Iwad))?;

    let mut args = Vec::new();

    push_iwad(store, iwad, &mut args);

    if let Some(skill) = store.get_value(sections::SAVE, "skill") {
        push_all(&mut args, ["-skill", skill]);
    }
    if let Some(warp) = store.get_value(sections::SAVE, "warp") {
        push_all(&mut args, ["+map", warp]);
    }
    for flags in ["dmflags", "dmflags2"] {
        if let Some(value) = store.get_value(sections::SAVE, flags) {
            push_all(&mut args, ["+set", flags, value]);
        }
    }

    push_files(store, &mut args);
    push_game_type(store, &mut args);
    push_network(store, &mut args);

    if store.get_value(sections::GENERAL, "quotefiles") != Some("disabled") {
        quote_spaced(&mut args);
    }

    // Raw user text goes in verbatim, one token each, never quoted.
    if let Some(always) = store.get_value(sections::GENERAL, "alwaysadd") {
        args.push(always.to_string());
    }
    if let Some(extra) = store.get_value(sections::SAVE, "extra") {
        args.push(extra.to_string());
    }

    if args.iter().all(String::is_empty) {
        return Err(LaunchError::EmptyResult);
    }

    debug!("args: {args:?}");
    Ok(args)
}

fn push_all<const N: usize>(args: &mut Vec<String>, tokens: [&str; N]) {
    args.extend(tokens.iter().map(|t| t.to_string()));
}

fn push_iwad(store: &impl ConfigStore, iwad: &str, args: &mut Vec<String>) {
    let Some(section) = store.section(sections::IWADS) else {
        debug!("no [{}] section; skipping -iwad", sections::IWADS);
        return;
    };

    let registry = Registry::from_section(section, IWAD_PREFIX);
    let paths = registry.resolve_all(iwad);
    if paths.is_empty() {
        match registry.resolve(iwad) {
            Resolution::Ambiguous { index, candidates } => {
                warn!("IWAD {iwad:?} (i{index}n) has {candidates} paths; skipping -iwad");
            }
            _ => debug!("IWAD {iwad:?} is not registered; skipping -iwad"),
        }
        return;
    }
    // Every matching row gets its own -iwad pair.
    for path in paths {
        push_all(args, ["-iwad", path]);
    }
}

/// Splits `file<N>` entries into PWADs and DeHackEd patches, keeping order.
fn push_files(store: &impl ConfigStore, args: &mut Vec<String>) {
    let Some(section) = store.section(sections::SAVE) else {
        return;
    };

    let (dehacked, pwads): (Vec<&str>, Vec<&str>) = section
        .lines()
        .iter()
        .filter(|line| IndexedKey::parse(&line.key, FILE_PREFIX, "").is_some())
        .map(|line| line.value.as_str())
        .partition(|value| is_dehacked(value));

    if !pwads.is_empty() {
        args.push("-file".to_string());
        args.extend(pwads.into_iter().map(str::to_string));
    }
    if !dehacked.is_empty() {
        args.push("-deh".to_string());
        args.extend(dehacked.into_iter().map(str::to_string));
    }
}

fn is_dehacked(file: &str) -> bool {
    let bytes = file.as_bytes();
    DEHACKED_SUFFIXES.iter().any(|suffix| {
        bytes.len() >= suffix.len()
            && bytes[bytes.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
    })
}

fn push_game_type(store: &impl ConfigStore, args: &mut Vec<String>) {
    let Some(game_type) = store.get_value(sections::SAVE, "gametype") else {
        return;
    };
    if game_type == "0" {
        return;
    }

    if game_type == "2" {
        // Not a typo to fix: this is the token the engines expect from ZDL.
        args.push("-deathmath".to_string());
    }

    let players = store
        .get_value(sections::SAVE, "players")
        .and_then(|p| p.trim().parse::<i32>().ok())
        .unwrap_or(0);

    if players > 0 {
        args.push("-host".to_string());
        args.push(players.to_string());
    } else if players == 0 {
        if let Some(host) = store.get_value(sections::SAVE, "host") {
            push_all(args, ["-join", host]);
        }
    }

    if let Some(limit) = store.get_value(sections::SAVE, "fraglimit") {
        push_all(args, ["+set", "fraglimit", limit]);
    }
}

fn push_network(store: &impl ConfigStore, args: &mut Vec<String>) {
    if store.get_value(sections::NET, "advenabled") != Some(ENABLED) {
        return;
    }

    if let Some(port) = store.get_value(sections::NET, "port") {
        push_all(args, ["-port", port]);
    }
    if store.get_value(sections::NET, "extratic") == Some(ENABLED) {
        args.push("-extratic".to_string());
    }
    match store.get_value(sections::NET, "netmode") {
        Some("1") => push_all(args, ["-netmode", "0"]),
        Some("2") => push_all(args, ["-netmode", "1"]),
        _ => {}
    }
    if let Some(dup) = store.get_value(sections::NET, "dup").filter(|d| *d != "0") {
        push_all(args, ["-dup", dup]);
    }
}

/// Wraps every token containing a space in double quotes, in place.
fn quote_spaced(args: &mut [String]) {
    for arg in args.iter_mut().filter(|a| a.contains(' ')) {
        *arg = format!("\"{arg}\"");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
