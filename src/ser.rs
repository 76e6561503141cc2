//! INI serialization.
//!
//! This module provides the [`Serializer`] that writes a [`Document`] back to text,
//! using the [`Metadata`] captured at parse time to reproduce the original layout.
//!
//! ## Layout Rules
//!
//! - Pre-section comments come first, followed by one blank line.
//! - Sections follow their recorded header occurrences. A section the caller
//!   removed is skipped along with its comments and trailing blank line.
//! - Under each header: the section's comments, then its recorded keys in recorded
//!   order (keys the caller removed are skipped), then keys added since parsing.
//! - A reopened section (the same header more than once) gets its comments under
//!   the first occurrence only, and its added keys after the last occurrence.
//! - Every section block ends with a blank line.
//! - Sections added since parsing come last, in document order.
//!
//! ## Usage
//!
//! ```rust
//! use ini_roundtrip::from_str;
//!
//! let mut result = from_str("[Section]\nD=1\nC=2\nB=3\nA=4");
//! result.document.remove("Section", "B");
//! assert_eq!(result.save().unwrap(), "[Section]\nD=1\nC=2\nA=4\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use ini_roundtrip::{Document, IniOptions, Serializer};
//!
//! let mut doc = Document::new();
//! doc.set("Server", "port", 8080);
//!
//! let mut serializer = Serializer::new(IniOptions::new());
//! serializer.serialize(&doc, None).unwrap();
//! assert_eq!(serializer.into_inner(), "[Server]\nport=8080\n");
//! ```

use crate::grammar::{is_valid_key, section_name_problem};
use crate::options::IMPLICIT_SECTION;
use crate::{Document, Error, IniOptions, Metadata, Result, Section};
use std::collections::{HashMap, HashSet};

/// The INI serializer.
///
/// Collects output lines; [`Serializer::into_inner`] joins them with `\n`.
pub struct Serializer {
    lines: Vec<String>,
    options: IniOptions,
}

impl Serializer {
    pub fn new(options: IniOptions) -> Self {
        Serializer {
            lines: Vec::with_capacity(64),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.lines.join("\n")
    }

    /// Writes `document`, following `metadata` when available.
    ///
    /// Without metadata, sections and keys are written in document order and no
    /// comments are written.
    ///
    /// # Errors
    ///
    /// Returns an error if a section name, key or value cannot be expressed in the
    /// INI grammar. Nothing written so far is meaningful in that case.
    pub fn serialize(&mut self, document: &Document, metadata: Option<&Metadata>) -> Result<()> {
        let fallback = Metadata::default();
        let metadata = metadata.unwrap_or(&fallback);

        let pre_section = metadata.pre_section_comments();
        if !pre_section.is_empty() {
            self.write_comments(pre_section);
            self.lines.push(String::new());
        }

        // Header-less entries must stay above the first header to read back the same.
        if self.options.no_section.is_implicit() && !metadata.records_section(IMPLICIT_SECTION) {
            if let Some(section) = document.section(IMPLICIT_SECTION) {
                self.write_new_section(IMPLICIT_SECTION, section, metadata)?;
            }
        }

        self.write_recorded_sections(document, metadata)?;

        for (name, section) in document {
            if metadata.records_section(name) || self.options.is_headerless(name) {
                continue;
            }
            self.write_new_section(name, section, metadata)?;
        }

        tracing::debug!(
            "Serialized {} sections into {} lines",
            document.len(),
            self.lines.len()
        );
        Ok(())
    }

    fn write_recorded_sections(&mut self, document: &Document, metadata: &Metadata) -> Result<()> {
        let order = metadata.section_order();

        let mut recorded: HashMap<&str, HashSet<&str>> = HashMap::new();
        let mut last_occurrence: HashMap<&str, usize> = HashMap::new();
        for (index, record) in order.iter().enumerate() {
            recorded
                .entry(record.name.as_str())
                .or_default()
                .extend(record.keys.iter().map(String::as_str));
            last_occurrence.insert(record.name.as_str(), index);
        }

        let mut seen_sections: HashSet<&str> = HashSet::new();
        let mut written_keys: HashMap<&str, HashSet<&str>> = HashMap::new();

        for (index, record) in order.iter().enumerate() {
            let name = record.name.as_str();
            let Some(section) = document.section(name) else {
                tracing::trace!("Section '{}' was removed, skipping its block", name);
                continue;
            };

            self.write_header(name)?;
            if seen_sections.insert(name) {
                self.write_comments(metadata.section_comments(name));
            }

            let written = written_keys.entry(name).or_default();
            for key in &record.keys {
                if section.contains_key(key) && written.insert(key.as_str()) {
                    self.write_entry(name, section, key)?;
                }
            }

            if last_occurrence.get(name) == Some(&index) {
                let known = recorded.get(name);
                for key in section.keys() {
                    if known.map_or(true, |keys| !keys.contains(key.as_str())) {
                        self.write_entry(name, section, key)?;
                    }
                }
            }

            self.lines.push(String::new());
        }

        Ok(())
    }

    fn write_new_section(&mut self, name: &str, section: &Section, metadata: &Metadata) -> Result<()> {
        self.write_header(name)?;
        self.write_comments(metadata.section_comments(name));
        for key in section.keys() {
            self.write_entry(name, section, key)?;
        }
        self.lines.push(String::new());
        Ok(())
    }

    fn write_header(&mut self, name: &str) -> Result<()> {
        if self.options.is_headerless(name) {
            return Ok(());
        }
        if let Some(reason) = section_name_problem(name) {
            return Err(Error::invalid_section(name, reason));
        }
        self.lines.push(format!("[{}]", name));
        Ok(())
    }

    fn write_comments(&mut self, comments: &[String]) {
        self.lines
            .extend(comments.iter().map(|comment| format!(";{}", comment)));
    }

    fn write_entry(&mut self, section_name: &str, section: &Section, key: &str) -> Result<()> {
        let Some(value) = section.get(key) else {
            return Ok(());
        };
        if !is_valid_key(key) {
            return Err(Error::invalid_key(section_name, key));
        }
        let text = value.to_string();
        if text.is_empty() || text.contains(['\n', '\r']) {
            return Err(Error::invalid_value(section_name, key));
        }
        self.lines.push(format!("{}={}", key, text));
        Ok(())
    }
}
