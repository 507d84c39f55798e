//! Locale bundle loading and entry types.
//!
//! A bundle is the in-memory form of one `.properties` resource file: an
//! insertion-ordered mapping of translation keys to values, with per-entry
//! location information for error reporting. Bundles are immutable once
//! loaded.
//!
//! Parsing is delegated to the `java-properties` crate, which implements the
//! full property-file grammar (`=`/`:` separators, line continuation via
//! trailing backslash, `\uXXXX` escapes). Files are read as UTF-8.

use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result, anyhow};
use encoding_rs::UTF_8;
use java_properties::{LineContent, PropertiesIter};

/// Position information in a bundle file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryLocation {
    /// Path to the bundle file (e.g., "./lang/I18N_zh_CN.properties").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl EntryLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }
}

/// One key-value entry of a bundle, with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    pub location: EntryLocation,
    /// The translation key, exactly as written in the file.
    pub key: String,
    /// The translation value after property-file unescaping.
    pub value: String,
}

impl EntryContext {
    pub fn new(location: EntryLocation, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// All entries of a single locale resource file, in file order.
///
/// Duplicate keys follow standard property-file semantics: the last value
/// wins, keeping the position of the first occurrence.
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Bundle identifier used in findings (the file name).
    name: String,
    /// Full path of the bundle file.
    file_path: String,
    /// Entries in insertion order.
    entries: Vec<EntryContext>,
    /// Key to position in `entries`.
    index: HashMap<String, usize>,
}

impl Bundle {
    /// Load a bundle from a `.properties` file.
    ///
    /// Fails if the file cannot be read or contains a line the property-file
    /// grammar rejects (e.g., a malformed `\uXXXX` escape). No caching: every
    /// call reads the file again.
    pub fn load(path: &Path) -> Result<Bundle> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read bundle file: {:?}", path))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let file_path = path.to_string_lossy().to_string();

        let mut bundle = Bundle::empty(name, file_path);
        for line in PropertiesIter::new_with_encoding(BufReader::new(file), UTF_8) {
            let line = line
                .map_err(|err| anyhow!("Failed to parse bundle file {:?}: {}", path, err))?;
            let line_number = line.line_number() as usize;
            if let LineContent::KVPair(key, value) = line.consume_content() {
                bundle.insert(key, value, line_number);
            }
        }
        Ok(bundle)
    }

    /// Build an in-memory bundle, one entry per line starting at line 1.
    ///
    /// Intended for tests; production bundles come from [`Bundle::load`].
    pub fn from_pairs(name: impl Into<String>, pairs: &[(&str, &str)]) -> Bundle {
        let name = name.into();
        let mut bundle = Bundle::empty(name.clone(), name);
        for (i, (key, value)) in pairs.iter().enumerate() {
            bundle.insert(key.to_string(), value.to_string(), i + 1);
        }
        bundle
    }

    fn empty(name: String, file_path: String) -> Bundle {
        Bundle {
            name,
            file_path,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn insert(&mut self, key: String, value: String, line: usize) {
        match self.index.get(&key) {
            Some(&pos) => {
                // Last write wins, position of the first occurrence is kept.
                self.entries[pos].value = value;
            }
            None => {
                let location = EntryLocation::with_line(self.file_path.clone(), line);
                self.entries
                    .push(EntryContext::new(location, key.clone(), value));
                self.index.insert(key, self.entries.len() - 1);
            }
        }
    }

    /// Bundle identifier used in findings.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&EntryContext> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in file order, top to bottom.
    pub fn entries(&self) -> impl Iterator<Item = &EntryContext> {
        self.entries.iter()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
