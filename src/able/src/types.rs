//! Core type definitions for ability resolution

use serde::{Deserialize, Serialize};

/// An ordered list of ability tokens, resolved or unresolved.
///
/// Order is significant: every operation preserves first-seen order so
/// results are deterministic.
pub type AbilitySet = Vec<String>;

/// Members of a group alias
///
/// A definition entry may name a single ability or a list of abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Members {
    /// A single member ability
    One(String),
    /// Several member abilities, in declaration order
    Many(Vec<String>),
}

impl Members {
    /// Member abilities as a slice (a single member is a one-element slice)
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(member) => std::slice::from_ref(member),
            Self::Many(members) => members,
        }
    }
}

impl From<&str> for Members {
    fn from(member: &str) -> Self {
        Self::One(member.to_string())
    }
}

impl From<String> for Members {
    fn from(member: String) -> Self {
        Self::One(member)
    }
}

impl From<Vec<String>> for Members {
    fn from(members: Vec<String>) -> Self {
        Self::Many(members)
    }
}

impl From<Vec<&str>> for Members {
    fn from(members: Vec<&str>) -> Self {
        Self::Many(members.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Members {
    fn from(members: [&str; N]) -> Self {
        Self::Many(members.iter().map(|m| m.to_string()).collect())
    }
}

/// A value bound to a key in a [`ValueMap`](crate::values::ValueMap)
///
/// Scalar values come from `?key=value` annotations, lists from
/// `?key[]=value` annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Single value (last write wins during extraction)
    Scalar(String),
    /// Accumulated list of values
    List(Vec<String>),
}

impl Value {
    /// Candidate substitution values
    ///
    /// A scalar is a one-element list, including the empty string.
    pub fn candidates(&self) -> &[String] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::List(values) => values,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.iter().map(|v| v.to_string()).collect())
    }
}
