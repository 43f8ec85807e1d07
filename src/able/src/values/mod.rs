//! Value extraction and application module
//!
//! Abilities may carry values as annotation tokens (`?key=value` for a
//! scalar, `?key[]=value` for one list element) and may be templates with
//! `{name}` placeholders. This module separates annotations from plain
//! abilities and substitutes extracted values into templates.
//!
//! # Example
//!
//! ```rust
//! use able::values::{apply_values, extract_values};
//!
//! let (values, remainder) = extract_values(&["article:{articleId}:read", "?articleId[]=1", "?articleId[]=2"]);
//! let applied = apply_values(&remainder, &values);
//!
//! assert_eq!(applied, vec!["article:1:read", "article:2:read"]);
//! ```

mod annotation;
mod apply;
mod extract;
mod map;
mod template;

#[cfg(test)]
mod tests;

pub use annotation::Annotation;
pub use apply::apply_values;
pub use extract::extract_values;
pub use map::ValueMap;
pub use template::{Segment, Template};

/// Prefix marking an ability token as a value annotation
pub const ANNOTATION_PREFIX: char = '?';

/// Key suffix marking an annotation as a list append
pub const LIST_SUFFIX: &str = "[]";
