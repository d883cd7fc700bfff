//! Flat documents keyed by field name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::error::{ModelError, Result};
use crate::value::{FieldValue, json_kind};

/// How a field is represented in a document.
///
/// Upstream producers encode "no value" in three different ways and the
/// normalization helpers treat each one differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldState<'a> {
    /// The key is not present.
    Absent,
    /// The key holds a native null.
    Null,
    /// The key holds the sentinel text `"null"`.
    NullMarker,
    /// The key holds any other value.
    Value(&'a FieldValue),
}

impl FieldState<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldState::Absent)
    }
}

/// One migratable record.
///
/// Keys are kept in sorted order so serialized output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single JSON object into a document.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Self::try_from(value)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(key)
    }

    /// Insert a value, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Classify the field stored under `key`.
    pub fn state(&self, key: &str) -> FieldState<'_> {
        match self.fields.get(key) {
            None => FieldState::Absent,
            Some(FieldValue::Null) => FieldState::Null,
            Some(value) if value.is_null_marker() => FieldState::NullMarker,
            Some(value) => FieldState::Value(value),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl TryFrom<serde_json::Value> for Document {
    type Error = ModelError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        let map = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(ModelError::NotAnObject {
                    kind: json_kind(&other),
                });
            }
        };
        let fields = map
            .into_iter()
            .map(|(key, value)| FieldValue::try_from(value).map(|value| (key, value)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self { fields })
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
