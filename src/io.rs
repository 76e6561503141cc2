//! Where INI text comes from and goes to.
//!
//! The codec itself only sees lines going in and text coming out. A
//! [`LineSource`] supplies the lines for an opaque name, a [`LineSink`] stores the
//! finished text under a name. Two implementations are provided:
//!
//! - [`FileStore`]: names are file paths, optionally relative to a root directory;
//! - [`MemoryStore`]: names are keys into an in-memory map, handy for tests and for
//!   hosts that keep configuration somewhere other than the filesystem.
//!
//! ```rust
//! use ini_roundtrip::{load, store, IniOptions, MemoryStore};
//!
//! let mut memory = MemoryStore::new();
//! memory.insert("app", "[Window]\nwidth=800\n");
//!
//! let mut result = load(&memory, "app", &IniOptions::new()).unwrap();
//! result.document.set("Window", "height", 600);
//! store(&mut memory, "app", &result.document, Some(&result.metadata), &IniOptions::new()).unwrap();
//!
//! assert_eq!(memory.get("app"), Some("[Window]\nwidth=800\nheight=600\n"));
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies the complete, newline-stripped line sequence stored under a name.
///
/// Each call starts from the beginning. Failing to open or read is fatal and
/// reported as [`Error::Io`].
pub trait LineSource {
    fn read_lines(&self, name: &str) -> Result<Vec<String>>;
}

/// Stores fully assembled text under a name. Failing to write is reported as
/// [`Error::Io`].
pub trait LineSink {
    fn write_text(&mut self, name: &str, text: &str) -> Result<()>;
}

/// Splits text into lines, dropping `\n` or `\r\n` terminators.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Reads and writes files on disk.
///
/// # Examples
///
/// ```rust,no_run
/// use ini_roundtrip::{load, FileStore, IniOptions};
///
/// let files = FileStore::with_root("/etc/myapp");
/// let result = load(&files, "settings.ini", &IniOptions::new()).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    root: Option<PathBuf>,
}

impl FileStore {
    /// Resolves names relative to the current working directory (or as absolute paths).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves names relative to `root`.
    #[must_use]
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        FileStore {
            root: Some(root.as_ref().to_path_buf()),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl LineSource for FileStore {
    fn read_lines(&self, name: &str) -> Result<Vec<String>> {
        let path = self.resolve(name);
        tracing::debug!("Reading INI source {}", path.display());
        let text = fs::read_to_string(&path).map_err(|e| Error::io(name, e))?;
        Ok(split_lines(&text))
    }
}

impl LineSink for FileStore {
    fn write_text(&mut self, name: &str, text: &str) -> Result<()> {
        let path = self.resolve(name);
        tracing::debug!("Writing {} bytes to {}", text.len(), path.display());
        fs::write(&path, text).map_err(|e| Error::io(name, e))
    }
}

/// Keeps INI text in memory, keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(name.into(), text.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }
}

impl LineSource for MemoryStore {
    fn read_lines(&self, name: &str) -> Result<Vec<String>> {
        self.entries
            .get(name)
            .map(|text| split_lines(text))
            .ok_or_else(|| Error::io(name, "no such entry"))
    }
}

impl LineSink for MemoryStore {
    fn write_text(&mut self, name: &str, text: &str) -> Result<()> {
        self.insert(name, text);
        Ok(())
    }
}
