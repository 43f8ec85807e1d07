//! Group expansion module
//!
//! Provides group alias definitions and transitive expansion of an ability
//! list into its full closure.
//!
//! # Features
//!
//! - **Flexible Definitions**: An alias maps to one ability, a list, or nothing
//! - **Cycle Tolerance**: Cyclic aliases terminate through membership checks
//! - **Stable Order**: Inputs keep their position, members are appended
//!   breadth-first in discovery order
//!
//! # Example
//!
//! ```rust
//! use able::group::{flatten, GroupDefinition};
//!
//! let definition = GroupDefinition::new()
//!     .with_group("foo", ["bar", "baz"])
//!     .with_group("baz", ["bam", "foo"]);
//!
//! let flattened = flatten(&definition, &["foo"]);
//! assert_eq!(flattened, vec!["foo", "bar", "baz", "bam"]);
//! ```

mod definition;
mod expander;


pub use definition::GroupDefinition;
pub use expander::flatten;
