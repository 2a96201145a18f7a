//! Accumulator for discovered translation keys.

use indexmap::IndexMap;
use serde::Serialize;

/// An append-only, deduplicating set of translation keys with optional
/// default values.
///
/// Keys are unique; re-adding an existing key never duplicates it but does
/// overwrite the stored default value. Insertion order is preserved so
/// output stays deterministic. Serializes to a flat JSON object of
/// `key: default` pairs.
///
/// All operations are total: any string, including the empty string, is a
/// valid key. Callers filter meaningless keys before adding them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TranslationCollection {
    values: IndexMap<String, String>,
}

impl TranslationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key with a default value, chainable. An existing key keeps its
    /// position; its default is overwritten.
    pub fn add(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Add a key with an empty default.
    pub fn add_key(self, key: &str) -> Self {
        self.add(key, "")
    }

    /// Bulk add with empty defaults.
    pub fn add_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self = self.add_key(key.as_ref());
        }
        self
    }

    /// Union of two collections. Entries from `other` are appended with
    /// `add` semantics, so a later default overwrites an earlier one while
    /// key positions stay put.
    pub fn merge(mut self, other: Self) -> Self {
        for (key, value) in other.values {
            self.values.insert(key, value);
        }
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Default value for a key, if the key is present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
