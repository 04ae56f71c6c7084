//! Remapping table parsing and resolution.

use crate::error::RemapError;
use camino::Utf8Path;
use std::fs;

/// A single `origin=destination` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemappingEntry {
    /// The alias prefix as it appears in import statements.
    pub origin: String,
    /// The project path the alias stands for.
    pub destination: String,
}

impl RemappingEntry {
    /// Creates a new remapping entry.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Ordered remapping rules. Earlier entries take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemappingTable {
    entries: Vec<RemappingEntry>,
}

impl RemappingTable {
    /// Creates a table from entries, keeping their order.
    pub fn new(entries: Vec<RemappingEntry>) -> Self {
        Self { entries }
    }

    /// Parses remappings text, one `origin=destination` rule per line.
    ///
    /// Blank lines are skipped. Each line is split on its first `=` and both
    /// sides are trimmed. Lines without `=` are kept with an empty destination.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| match line.split_once('=') {
                Some((origin, destination)) => {
                    RemappingEntry::new(origin.trim(), destination.trim())
                }
                None => {
                    log::warn!("remapping `{line}` has no `=`, using an empty destination");
                    RemappingEntry::new(line, "")
                }
            })
            .collect();

        Self { entries }
    }

    /// Loads a remappings file.
    pub fn load(path: &Utf8Path) -> Result<Self, RemapError> {
        let text = fs::read_to_string(path).map_err(|source| RemapError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::parse(&text);
        log::debug!("loaded {} remappings from {}", table.len(), path);
        Ok(table)
    }

    /// Returns the first entry whose origin occurs anywhere in `line`.
    pub fn resolve(&self, line: &str) -> Option<&RemappingEntry> {
        self.entries
            .iter()
            .find(|entry| line.contains(entry.origin.as_str()))
    }

    /// Returns the entries in precedence order.
    pub fn entries(&self) -> &[RemappingEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, RemappingEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RemappingTable {
    type Item = &'a RemappingEntry;
    type IntoIter = std::slice::Iter<'a, RemappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
