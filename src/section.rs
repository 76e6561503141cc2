//! Ordered key/value map for a single INI section.
//!
//! [`Section`] wraps an [`IndexMap`] so that iteration follows insertion order. The
//! serializer relies on this: keys added after parsing are written in the order they
//! were inserted, which keeps the output deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use ini_roundtrip::{Section, Value};
//!
//! let mut section = Section::new();
//! section.insert("host", "localhost");
//! section.insert("port", 8080);
//!
//! assert_eq!(section.len(), 2);
//! assert_eq!(section.get("port").and_then(Value::as_i64), Some(8080));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The entries of one INI section, in insertion order.
///
/// Keys are expected to match `[A-Za-z0-9_]+`; the serializer rejects anything else.
/// Removing a key deletes it outright, there is no "absent" value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(IndexMap<String, Value>);

impl Section {
    #[must_use]
    pub fn new() -> Self {
        Section(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Section(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value if the key existed.
    ///
    /// An existing key keeps its position; a new key goes to the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_roundtrip::Section;
    ///
    /// let mut section = Section::new();
    /// assert!(section.insert("key", 42).is_none());
    /// assert!(section.insert("key", 43).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Removes a key, keeping the relative order of the remaining keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_roundtrip::Section;
    ///
    /// let mut section: Section = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    /// section.remove("b");
    /// let keys: Vec<_> = section.keys().map(String::as_str).collect();
    /// assert_eq!(keys, vec!["a", "c"]);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Section {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Section
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Section(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position_of_existing_key() {
        let mut section = Section::new();
        section.insert("a", 1);
        section.insert("b", 2);
        section.insert("a", 3);

        let entries: Vec<_> = section.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        assert_eq!(entries, vec![("a", Value::from(3)), ("b", Value::from(2))]);
    }

    #[test]
    fn test_remove_missing_key() {
        let mut section = Section::new();
        assert!(section.remove("nope").is_none());
        assert!(section.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let section: Section = [("port", Value::from(80)), ("tls", Value::from(false))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&section).unwrap();
        assert_eq!(json, r#"{"port":80,"tls":false}"#);
    }
}
