//! # Able
//!
//! String-based ability resolution for capability-style access control.
//!
//! Callers hold ability tokens: plain strings, aliases for groups of other
//! abilities, templates with `{name}` placeholders, and `?key=value`
//! annotations carrying values. Resolution expands the token list into its
//! closure, separates out the values and substitutes them into templates.
//! The result is checked against required abilities by exact containment.
//!
//! ## Pipeline
//!
//! 1. [`flatten`] expands aliases through a [`GroupDefinition`]
//! 2. [`extract_values`] splits annotations into a [`ValueMap`]
//! 3. [`apply_values`] expands templates with the extracted values
//! 4. [`can_access`] / [`get_missing_abilities`] check containment
//!
//! [`resolve`] runs steps 1-3. All of these are pure functions that never
//! fail and never touch their inputs.
//!
//! ## Example
//!
//! ```rust
//! use able::{can_access, resolve, GroupDefinition};
//!
//! let definition = GroupDefinition::new()
//!     .with_group("districtManager", ["metabase:dashboard:5?districtId={districtId}"])
//!     .with_group("southWest", ["?districtId[]=SW"])
//!     .with_group("westManager", ["districtManager", "southWest"]);
//!
//! let resolved = resolve(&definition, &["westManager"]);
//!
//! assert!(can_access(&resolved, &["metabase:dashboard:5?districtId=SW"]));
//! assert!(!can_access(&resolved, &["metabase:dashboard:5?districtId=NW"]));
//! ```

pub mod access;
pub mod error;
pub mod group;
pub mod resolver;
pub mod types;
pub mod values;

// Re-export commonly used types
pub use access::{can_access, get_missing_abilities, AccessCheck};
pub use error::{AbleError, Result};
pub use group::{flatten, GroupDefinition};
pub use resolver::{resolve, AbilityResolver, CacheStats, ResolverConfig};
pub use types::{AbilitySet, Members, Value};
pub use values::{apply_values, extract_values, Annotation, ValueMap};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
