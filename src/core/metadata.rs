//! Persistent metadata merged into every record
//!
//! A `Metadata` value is an immutable snapshot shared between loggers.
//! Cloning is a reference-count bump; adding a field copies the map.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: Arc<Map<String, Value>>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, returning the extended snapshot
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Arc::make_mut(&mut self.fields).insert(key.into(), value.into());
        self
    }

    /// Shallow merge where keys in `extra` win
    #[must_use]
    pub fn merged(&self, extra: &Metadata) -> Metadata {
        if extra.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return extra.clone();
        }

        let mut fields = (*self.fields).clone();
        for (key, value) in extra.iter() {
            fields.insert(key.clone(), value.clone());
        }
        Metadata {
            fields: Arc::new(fields),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether two snapshots are the same allocation, not just equal
    pub fn ptr_eq(&self, other: &Metadata) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            fields: Arc::new(fields),
        }
    }
}

impl TryFrom<Value> for Metadata {
    type Error = LoggerError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(fields.into()),
            Value::Null => Ok(Metadata::new()),
            other => Err(LoggerError::config(
                "Metadata",
                format!("expected a JSON object, got {}", other),
            )),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<Map<String, Value>>()
            .into()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
