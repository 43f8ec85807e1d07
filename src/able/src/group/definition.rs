//! Group alias definitions

use crate::error::Result;
use crate::types::Members;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A map of ability aliases to their member abilities
///
/// Serialized as a JSON object whose values are a string, an array of
/// strings, or `null`:
///
/// ```json
/// { "foo": ["bar"], "bar": ["baz", "bam"], "xxx": "yyy", "empty": null }
/// ```
///
/// Aliases may reference each other, including cyclically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupDefinition {
    groups: HashMap<String, Option<Members>>,
}

impl GroupDefinition {
    /// Create an empty definition
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with_group(mut self, alias: impl Into<String>, members: impl Into<Members>) -> Self {
        self.insert(alias, members);
        self
    }

    /// Define (or redefine) an alias
    pub fn insert(&mut self, alias: impl Into<String>, members: impl Into<Members>) {
        self.groups.insert(alias.into(), Some(members.into()));
    }

    /// Remove an alias, returning its members if it had any
    pub fn remove(&mut self, alias: &str) -> Option<Members> {
        self.groups.remove(alias).flatten()
    }

    /// Members of an alias
    ///
    /// Unknown aliases and `null` entries have no members.
    pub fn members(&self, alias: &str) -> &[String] {
        match self.groups.get(alias) {
            Some(Some(members)) => members.as_slice(),
            _ => &[],
        }
    }

    /// Whether `alias` has an entry (even a `null` one)
    pub fn contains_alias(&self, alias: &str) -> bool {
        self.groups.contains_key(alias)
    }

    /// All defined alias names, in arbitrary order
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the definition has no entries
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Parse a definition from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a definition from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl<A, M> FromIterator<(A, M)> for GroupDefinition
where
    A: Into<String>,
    M: Into<Members>,
{
    fn from_iter<I: IntoIterator<Item = (A, M)>>(iter: I) -> Self {
        let mut definition = Self::new();
        for (alias, members) in iter {
            definition.insert(alias, members);
        }
        definition
    }
}
