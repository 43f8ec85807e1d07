//! Annotation token parsing

use super::{ANNOTATION_PREFIX, LIST_SUFFIX};
use std::fmt;

/// Parsed form of a single annotation token
///
/// | token         | parse                                   |
/// |---------------|-----------------------------------------|
/// | `?foo=1`      | `Scalar { key: "foo", value: "1" }`     |
/// | `?foo`        | `Scalar { key: "foo", value: "" }`      |
/// | `?arr[]=a`    | `Append { key: "arr", value: Some("a") }` |
/// | `?arr[]`      | `Append { key: "arr", value: None }`    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// `?key=value`, or `?key` with an empty value
    Scalar { key: String, value: String },
    /// `?key[]=value`; a bare `?key[]` registers the list without a value
    Append { key: String, value: Option<String> },
}

impl Annotation {
    /// Parse an ability token
    ///
    /// Returns `None` when the token is not an annotation (does not start
    /// with `?`). Any annotation token parses; the value is everything after
    /// the first `=`.
    pub fn parse(token: &str) -> Option<Self> {
        if !Self::is_annotation(token) {
            return None;
        }
        let body = &token[ANNOTATION_PREFIX.len_utf8()..];

        let (key, value) = match body.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (body, None),
        };

        let annotation = match key.strip_suffix(LIST_SUFFIX) {
            Some(list_key) => Self::Append {
                key: list_key.to_string(),
                value: value.map(str::to_string),
            },
            None => Self::Scalar {
                key: key.to_string(),
                value: value.unwrap_or_default().to_string(),
            },
        };

        Some(annotation)
    }

    /// Whether `token` is an annotation rather than an ability
    pub fn is_annotation(token: &str) -> bool {
        token.starts_with(ANNOTATION_PREFIX)
    }

    /// Key the annotation binds
    pub fn key(&self) -> &str {
        match self {
            Self::Scalar { key, .. } | Self::Append { key, .. } => key,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar { key, value } => write!(f, "{}{}={}", ANNOTATION_PREFIX, key, value),
            Self::Append { key, value: Some(value) } => {
                write!(f, "{}{}{}={}", ANNOTATION_PREFIX, key, LIST_SUFFIX, value)
            }
            Self::Append { key, value: None } => {
                write!(f, "{}{}{}", ANNOTATION_PREFIX, key, LIST_SUFFIX)
            }
        }
    }
}
