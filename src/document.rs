//! The document model and its layout metadata.
//!
//! A parse produces two things that travel together in a [`ParseResult`]:
//!
//! - a [`Document`]: the visible content, sections of key/value pairs, freely
//!   mutable by the caller;
//! - a [`Metadata`]: how that content was laid out in the source (one
//!   [`SectionOrder`] record per header occurrence, and the comments owned by each
//!   section). It is read-only once parsing is done.
//!
//! Saving walks the metadata to reproduce the original layout and consults the
//! document for what is still there. Metadata is never updated when the document
//! changes, so keys and sections added after parsing never acquire comments.

use crate::{IniOptions, ParseWarning, Result, Section, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed (or hand-built) INI document: section name to [`Section`].
///
/// Iteration follows insertion order. That order only matters for sections that
/// have no [`Metadata`] record, such as sections added after parsing.
///
/// # Examples
///
/// ```rust
/// use ini_roundtrip::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.set("Server", "port", 8080);
/// doc.set("Server", "host", "localhost");
///
/// assert_eq!(doc.get("Server", "port").and_then(Value::as_i64), Some(8080));
/// assert_eq!(doc.remove("Server", "host"), Some(Value::from("localhost")));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, Section>);

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Document(IndexMap::new())
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.0.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.0.get_mut(name)
    }

    /// Returns the named section, creating an empty one at the end if it is missing.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        self.0.entry(name.to_string()).or_default()
    }

    pub fn insert_section(&mut self, name: impl Into<String>, section: Section) -> Option<Section> {
        self.0.insert(name.into(), section)
    }

    /// Removes a whole section. On save its block (header, comments, keys and the
    /// trailing blank line) disappears.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.0.get(section).and_then(|s| s.get(key))
    }

    /// Sets `section.key`, creating the section if needed.
    pub fn set(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.ensure_section(section).insert(key, value)
    }

    pub fn remove(&mut self, section: &str, key: &str) -> Option<Value> {
        self.0.get_mut(section).and_then(|s| s.remove(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn section_names(&self) -> indexmap::map::Keys<'_, String, Section> {
        self.0.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Section> {
        self.0.iter()
    }
}

impl IntoIterator for Document {
    type Item = (String, Section);
    type IntoIter = indexmap::map::IntoIter<String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Section)> for Document {
    fn from_iter<T: IntoIterator<Item = (K, Section)>>(iter: T) -> Self {
        Document(iter.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }
}

/// One physical occurrence of a section header and the keys written under it.
///
/// Reopening a section later in the source yields a second record with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOrder {
    pub name: String,
    pub keys: Vec<String>,
}

impl SectionOrder {
    fn new(name: &str) -> Self {
        SectionOrder {
            name: name.to_string(),
            keys: Vec::new(),
        }
    }
}

/// Who a comment line belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommentOwner {
    /// Comments that appear before any section header.
    PreSection,
    Section(String),
}

/// Layout information captured while parsing.
///
/// Only the parser builds metadata; callers read it or hand it back to the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    order: Vec<SectionOrder>,
    pre_section_comments: Vec<String>,
    section_comments: IndexMap<String, Vec<String>>,
}

impl Metadata {
    /// Section occurrences in source order.
    #[must_use]
    pub fn section_order(&self) -> &[SectionOrder] {
        &self.order
    }

    #[must_use]
    pub fn comments(&self, owner: &CommentOwner) -> &[String] {
        match owner {
            CommentOwner::PreSection => &self.pre_section_comments,
            CommentOwner::Section(name) => self.section_comments(name),
        }
    }

    #[must_use]
    pub fn pre_section_comments(&self) -> &[String] {
        &self.pre_section_comments
    }

    #[must_use]
    pub fn section_comments(&self, name: &str) -> &[String] {
        self.section_comments
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if at least one header occurrence of `name` was recorded.
    #[must_use]
    pub fn records_section(&self, name: &str) -> bool {
        self.order.iter().any(|record| record.name == name)
    }

    pub(crate) fn open_section(&mut self, name: &str) {
        self.order.push(SectionOrder::new(name));
    }

    /// Appends `key` to the most recent section occurrence.
    pub(crate) fn record_key(&mut self, key: &str) {
        if let Some(record) = self.order.last_mut() {
            record.keys.push(key.to_string());
        }
    }

    pub(crate) fn add_comment(&mut self, owner: CommentOwner, text: &str) {
        match owner {
            CommentOwner::PreSection => self.pre_section_comments.push(text.to_string()),
            CommentOwner::Section(name) => self
                .section_comments
                .entry(name)
                .or_default()
                .push(text.to_string()),
        }
    }
}

/// Everything a single parse call produces.
///
/// A result with warnings is still fully usable: every line that could be
/// classified made it into the document.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub document: Document,
    pub metadata: Metadata,
    pub warnings: Vec<ParseWarning>,
    /// The options the input was parsed with; [`ParseResult::save`] reuses them.
    pub options: IniOptions,
}

impl ParseResult {
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// The warnings as human-readable messages, in line order.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Serializes the (possibly modified) document back to text using the recorded layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the document holds a section name, key or value the INI
    /// grammar cannot represent.
    pub fn save(&self) -> Result<String> {
        crate::save_with_options(&self.document, Some(&self.metadata), &self.options)
    }

    #[must_use]
    pub fn into_parts(self) -> (Document, Metadata, Vec<ParseWarning>) {
        (self.document, self.metadata, self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_section_is_idempotent() {
        let mut doc = Document::new();
        doc.ensure_section("A").insert("x", 1);
        doc.ensure_section("A");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("A", "x"), Some(&Value::from(1)));
    }

    #[test]
    fn test_remove_section_keeps_order() {
        let mut doc = Document::new();
        for name in ["A", "B", "C"] {
            doc.ensure_section(name);
        }
        doc.remove_section("B");
        let names: Vec<_> = doc.section_names().map(String::as_str).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_metadata_records() {
        let mut meta = Metadata::default();
        meta.add_comment(CommentOwner::PreSection, " header");
        meta.open_section("A");
        meta.record_key("x");
        meta.add_comment(CommentOwner::Section("A".to_string()), " about A");
        meta.open_section("A");
        meta.record_key("y");

        assert_eq!(meta.section_order().len(), 2);
        assert_eq!(meta.section_order()[0].keys, vec!["x"]);
        assert_eq!(meta.section_order()[1].keys, vec!["y"]);
        assert_eq!(meta.pre_section_comments(), [" header".to_string()]);
        assert_eq!(
            meta.comments(&CommentOwner::Section("A".to_string())),
            [" about A".to_string()]
        );
        assert!(meta.section_comments("B").is_empty());
        assert!(meta.records_section("A"));
        assert!(!meta.records_section("B"));
    }

    #[test]
    fn test_record_key_without_section_is_ignored() {
        let mut meta = Metadata::default();
        meta.record_key("orphan");
        assert!(meta.section_order().is_empty());
    }
}
