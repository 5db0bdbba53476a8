//! Index-keyed registry of source ports and IWADs.
//!
//! ZDL stores list-like data as pairs of keys sharing a numeric index:
//!
//! ```ini
//! [zdl.iwads]
//! i0n=Doom II
//! i0f=/games/doom/doom2.wad
//! i1n=Plutonia
//! i1f=/games/doom/plutonia.wad
//! ```
//!
//! `i0n` holds the display name and `i0f` the file path of the same row.
//! [`Registry::from_section`] performs that join once per section scan,
//! producing one [`RegistryEntry`] per name key.
//!
//! # Matching rules
//!
//! - Index digits are compared as text, so `i01n` pairs with `i01f` only.
//! - A name resolves when exactly one file key carries its index.  Zero or
//!   several file keys make that row unusable ([`Resolution::Ambiguous`]).
//! - When several rows carry the same name, [`Registry::resolve`] picks the
//!   first usable one and [`Registry::resolve_all`] returns all of them.

use std::collections::HashMap;

use super::store::Section;

/// A key of the form `<prefix><digits><suffix>`, e.g. `p12n` or `file3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedKey<'a> {
    /// The digit span between prefix and suffix, kept as text.
    pub index: &'a str,
}

impl<'a> IndexedKey<'a> {
    /// Parses `key`, accepting exactly what `^<prefix>[0-9]+<suffix>$` matches.
    pub fn parse(key: &'a str, prefix: &str, suffix: &str) -> Option<Self> {
        let index = key.strip_prefix(prefix)?.strip_suffix(suffix)?;
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self { index })
    }
}

/// One registry row: a display name and every path sharing its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub index: String,
    pub name: String,
    pub paths: Vec<String>,
}

/// Outcome of resolving a display name against a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Exactly one path is registered for the name.
    Found(&'a str),
    /// No row carries the name.
    NotFound,
    /// Rows carry the name but none has exactly one path.
    ///
    /// `index` and `candidates` describe the first such row.
    Ambiguous { index: String, candidates: usize },
}

impl<'a> Resolution<'a> {
    /// Collapses the outcome to the path, treating ambiguity as "not found".
    pub fn path(&self) -> Option<&'a str> {
        match self {
            Resolution::Found(path) => Some(*path),
            _ => None,
        }
    }
}

/// Name → path lookup table built from one configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Joins `<prefix><N>n` name keys with `<prefix><N>f` file keys.
    pub fn from_section(section: &Section, prefix: &str) -> Self {
        let mut paths: HashMap<&str, Vec<String>> = HashMap::new();
        for line in section.lines() {
            if let Some(key) = IndexedKey::parse(&line.key, prefix, "f") {
                paths.entry(key.index).or_default().push(line.value.clone());
            }
        }

        let entries = section
            .lines()
            .iter()
            .filter_map(|line| {
                let key = IndexedKey::parse(&line.key, prefix, "n")?;
                Some(RegistryEntry {
                    index: key.index.to_string(),
                    name: line.value.clone(),
                    paths: paths.get(key.index).cloned().unwrap_or_default(),
                })
            })
            .collect();

        Self { entries }
    }

    /// Rows in section order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Resolves a display name (exact, case-sensitive comparison) to a path.
    pub fn resolve(&self, name: &str) -> Resolution<'_> {
        let mut first_unusable: Option<&RegistryEntry> = None;
        for entry in self.entries.iter().filter(|e| e.name == name) {
            if let [path] = entry.paths.as_slice() {
                return Resolution::Found(path.as_str());
            }
            first_unusable.get_or_insert(entry);
        }

        match first_unusable {
            Some(entry) => Resolution::Ambiguous {
                index: entry.index.clone(),
                candidates: entry.paths.len(),
            },
            None => Resolution::NotFound,
        }
    }

    /// Every usable path registered under `name`, in section order.
    ///
    /// Unlike [`Registry::resolve`] this does not stop at the first match:
    /// each row carrying the name with exactly one path contributes its path.
    pub fn resolve_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.name == name)
            .filter_map(|e| match e.paths.as_slice() {
                [path] => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
