//! Configuration store contract and its in-memory implementation.
//!
//! A ZDL configuration is a list of named sections, each holding an ordered
//! list of `key=value` lines:
//!
//! ```ini
//! [zdl.save]
//! iwad=doom2
//! port=zdoom
//! file0=brutal.deh
//!
//! [zdl.ports]
//! p0n=zdoom
//! p0f=/usr/games/zdoom
//! ```
//!
//! Order matters: extra files are emitted in the order they appear, and the
//! registry scans name keys in section order.  Every collection here is
//! therefore a `Vec`, never a hash map.

use regex::Regex;

/// A single `key=value` line inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    pub key: String,
    pub value: String,
}

impl ConfigLine {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A named, ordered group of configuration lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    lines: Vec<ConfigLine>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All lines in file order.
    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }

    /// Returns the value of the first line whose key equals `key`.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.key == key)
            .map(|line| line.value.as_str())
    }

    /// Returns every line whose key matches `pattern`, in file order.
    ///
    /// Anchor the pattern (`^...$`) to match whole keys.
    pub fn get_regex(&self, pattern: &Regex) -> Vec<&ConfigLine> {
        self.lines
            .iter()
            .filter(|line| pattern.is_match(&line.key))
            .collect()
    }

    /// Appends a line.  Duplicate keys are kept; lookups see the first one.
    pub fn push(&mut self, line: ConfigLine) {
        self.lines.push(line);
    }
}

/// Read-only access to a sectioned key-value configuration.
///
/// The argument builder depends only on this trait, so callers inject
/// whichever store they loaded instead of reaching for global state.
pub trait ConfigStore {
    /// Returns the section called `name`, if present.
    fn section(&self, name: &str) -> Option<&Section>;

    /// Returns the value stored under `section` / `key`.
    fn get_value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get_value(key)
    }

    /// Returns `true` when `section` / `key` exists, even with an empty value.
    fn has_value(&self, section: &str, key: &str) -> bool {
        self.get_value(section, key).is_some()
    }
}

/// In-memory configuration document.
///
/// Produced by the INI loader in the launcher and built directly in tests:
///
/// ```rust
/// use zdl_core::{ConfigDocument, ConfigStore};
///
/// let doc = ConfigDocument::new()
///     .with_value("zdl.save", "iwad", "doom2")
///     .with_value("zdl.save", "skill", "4");
/// assert_eq!(doc.get_value("zdl.save", "skill"), Some("4"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`ConfigDocument::push_value`].
    pub fn with_value(
        mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.push_value(section, key, value);
        self
    }

    /// Appends `key=value` to `section`, creating the section on first use.
    pub fn push_value(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        self.section_mut(section).push(ConfigLine::new(key, value));
    }

    /// Returns the section called `name`, creating an empty one if needed.
    ///
    /// Sections keep the order in which they were first created.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

impl ConfigStore for ConfigDocument {
    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
