//! Access checks over resolved abilities
//!
//! Checks are plain containment by exact string equality. Callers resolve
//! both sides first; no group or template handling happens here.

use crate::types::AbilitySet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Abilities in `required` that are missing from `abilities`
///
/// Preserves the order of `required`. An empty result means every required
/// ability is present.
pub fn get_missing_abilities<A, R>(abilities: &[A], required: &[R]) -> AbilitySet
where
    A: AsRef<str>,
    R: AsRef<str>,
{
    let granted: HashSet<&str> = abilities.iter().map(|ability| ability.as_ref()).collect();
    required
        .iter()
        .map(|ability| ability.as_ref())
        .filter(|ability| !granted.contains(ability))
        .map(str::to_string)
        .collect()
}

/// Whether `applied` contains every ability in `required`
pub fn can_access<A, R>(applied: &[A], required: &[R]) -> bool
where
    A: AsRef<str>,
    R: AsRef<str>,
{
    get_missing_abilities(applied, required).is_empty()
}

/// Outcome of an access check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCheck {
    /// Required abilities that were not granted
    pub missing: AbilitySet,
}

impl AccessCheck {
    /// Check `required` against `abilities`
    pub fn check<A, R>(abilities: &[A], required: &[R]) -> Self
    where
        A: AsRef<str>,
        R: AsRef<str>,
    {
        Self {
            missing: get_missing_abilities(abilities, required),
        }
    }

    /// Whether nothing is missing
    pub fn is_allowed(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPLIED: [&str; 3] = ["metabase:dashboard:4?district=1", "foo", "bar"];

    #[test]
    fn test_can_access_all_present() {
        assert!(can_access(&APPLIED, &["metabase:dashboard:4?district=1"]));
    }

    #[test]
    fn test_can_access_missing() {
        assert!(!can_access(&APPLIED, &["metabase:dashboard:4?district=1", "baz"]));
    }

    #[test]
    fn test_can_access_nothing_required() {
        let required: [&str; 0] = [];
        assert!(can_access(&APPLIED, &required));
    }

    #[test]
    fn test_missing_preserves_required_order() {
        let missing = get_missing_abilities(&APPLIED, &["zed", "foo", "alpha"]);
        assert_eq!(missing, vec!["zed", "alpha"]);
    }

    #[test]
    fn test_exact_match_only() {
        // Templates and aliases are not interpreted at this stage
        assert!(!can_access(&["doc:{id}"], &["doc:1"]));
        assert!(!can_access(&["Foo"], &["foo"]));
    }

    #[test]
    fn test_access_check() {
        let check = AccessCheck::check(&APPLIED, &["foo", "baz"]);
        assert!(!check.is_allowed());
        assert_eq!(check.missing, vec!["baz"]);

        assert!(AccessCheck::check(&APPLIED, &["foo"]).is_allowed());
    }
}
