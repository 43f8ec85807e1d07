//! Extracted value storage

use super::annotation::Annotation;
use crate::error::Result;
use crate::types::{AbilitySet, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Values extracted from, or to be applied to, a list of abilities
///
/// `{ foo: "bar", baz: ["1", "2"] }` is equivalent to the annotations
/// `["?foo=bar", "?baz[]=1", "?baz[]=2"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
    values: HashMap<String, Value>,
}

impl ValueMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Bind a value, replacing any previous binding
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Record a parsed annotation
    ///
    /// Scalars overwrite the key. Appends extend the key's list, replacing a
    /// scalar binding with a fresh empty list first.
    pub fn record(&mut self, annotation: Annotation) {
        match annotation {
            Annotation::Scalar { key, value } => {
                self.values.insert(key, Value::Scalar(value));
            }
            Annotation::Append { key, value } => {
                let entry = self
                    .values
                    .entry(key)
                    .or_insert_with(|| Value::List(Vec::new()));
                if matches!(*entry, Value::Scalar(_)) {
                    *entry = Value::List(Vec::new());
                }
                if let (Value::List(list), Some(value)) = (entry, value) {
                    list.push(value);
                }
            }
        }
    }

    /// Value bound to `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Substitution candidates for `key`
    ///
    /// Unbound keys have no candidates; a scalar (even `""`) has one.
    pub fn candidates(&self, key: &str) -> &[String] {
        self.values.get(key).map(Value::candidates).unwrap_or(&[])
    }

    /// Whether `key` is bound
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key is bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over bindings in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Encode the map back into annotation tokens
    ///
    /// Keys are emitted in sorted order. An empty list encodes as a bare
    /// `?key[]`, so extracting the result reproduces this map.
    pub fn to_annotations(&self) -> AbilitySet {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();

        let mut annotations = Vec::new();
        for key in keys {
            match &self.values[key] {
                Value::Scalar(value) => annotations.push(Annotation::Scalar {
                    key: key.clone(),
                    value: value.clone(),
                }),
                Value::List(values) if values.is_empty() => annotations.push(Annotation::Append {
                    key: key.clone(),
                    value: None,
                }),
                Value::List(values) => {
                    annotations.extend(values.iter().map(|value| Annotation::Append {
                        key: key.clone(),
                        value: Some(value.clone()),
                    }))
                }
            }
        }

        annotations.iter().map(ToString::to_string).collect()
    }

    /// Parse a map from a JSON object of string or string-array values
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K, V> FromIterator<(K, V)> for ValueMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
