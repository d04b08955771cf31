//! The resolved configuration document
//!
//! A [`Document`] is an ordered, case-insensitive, read-only mapping from
//! key to [`Value`]. Keys are folded to lower case when the mapping is
//! built; lookups fold their argument, so `doc.get("Parrot")` and
//! `doc.get("parrot")` return the same value. Iteration yields the
//! lower-cased keys in declaration order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::Index;

/// A resolved value: a final string or a nested section document
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Section(Document),
}

impl Value {
    /// The string value, if this is not a section
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            Value::Section(_) => None,
        }
    }

    /// The nested document, if this is a section
    pub fn as_section(&self) -> Option<&Document> {
        match self {
            Value::String(_) => None,
            Value::Section(document) => Some(document),
        }
    }
}

/// An ordered, case-insensitive key/value store
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    // Declaration order matters for iteration; configs are small, so plain
    // linear lookup beats carrying an index
    entries: Vec<(String, Value)>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Insert a value under a case-folded key.
    ///
    /// Ordinary mapping insertion semantics: an existing key (any case) is
    /// overwritten in place, keeping its original position; a new key is
    /// appended.
    pub(crate) fn insert(&mut self, key: &str, value: Value) {
        let key = key.to_lowercase();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key, case-insensitively
    pub fn get(&self, key: &str) -> Option<&Value> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }

    /// Look up a string value by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a nested section document by key
    pub fn section(&self, key: &str) -> Option<&Document> {
        self.get(key).and_then(Value::as_section)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The lower-cased keys, in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Key/value pairs, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl Index<&str> for Document {
    type Output = Value;

    /// Indexing panics on a missing key; use [`Document::get`] for a
    /// fallible lookup
    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no such key in document: {:?}", key),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(value) => serializer.serialize_str(value),
            Value::Section(document) => document.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.insert("Parrot", Value::String("dead".into()));
        doc.insert("slug", Value::String("mute".into()));
        doc
    }

    #[test]
    fn test_keys_are_folded_at_insertion() {
        let doc = sample();
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["parrot", "slug"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let doc = sample();
        assert_eq!(doc.get_str("parrot"), Some("dead"));
        assert_eq!(doc.get_str("Parrot"), Some("dead"));
        assert_eq!(doc.get_str("PARROT"), Some("dead"));
        assert_eq!(doc.get_str("pArRoT"), Some("dead"));
    }

    #[test]
    fn test_missing_key() {
        let doc = sample();
        assert_eq!(doc.get("norwegian_blue"), None);
        assert!(!doc.contains_key("norwegian_blue"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut doc = sample();
        doc.insert("PARROT", Value::String("resting".into()));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get_str("parrot"), Some("resting"));
        assert_eq!(doc.keys().next(), Some("parrot"));
    }

    #[test]
    fn test_iteration_order_is_declaration_order() {
        let doc = sample();
        let pairs: Vec<(&str, Option<&str>)> =
            doc.iter().map(|(k, v)| (k, v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("parrot", Some("dead")), ("slug", Some("mute"))]
        );
    }

    #[test]
    fn test_index_access() {
        let doc = sample();
        assert_eq!(doc["Parrot"].as_str(), Some("dead"));
    }

    #[test]
    #[should_panic(expected = "no such key")]
    fn test_index_panics_on_missing_key() {
        let _ = &sample()["norwegian_blue"];
    }

    #[test]
    fn test_value_accessors() {
        let mut doc = Document::new();
        doc.insert("inner", Value::String("x".into()));
        let value = Value::Section(doc);
        assert_eq!(value.as_str(), None);
        assert_eq!(
            value.as_section().and_then(|d| d.get_str("inner")),
            Some("x")
        );
    }
}
