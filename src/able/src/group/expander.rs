//! Transitive group expansion

use super::definition::GroupDefinition;
use crate::types::AbilitySet;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Expand aliases in `abilities` into their transitive members
///
/// Returns the input (order and duplicates preserved) followed by every
/// member reachable through `definition`, each appended once in
/// breadth-first discovery order.
///
/// The output list doubles as the work queue: an index walks it while it
/// grows, and a member is only appended when it is not yet present. Growth
/// is bounded by the distinct tokens reachable from the input, so cyclic
/// definitions terminate.
///
/// Flattening an already flattened list with the same definition returns it
/// unchanged.
pub fn flatten<S: AsRef<str>>(definition: &GroupDefinition, abilities: &[S]) -> AbilitySet {
    let mut flattened: AbilitySet = abilities.iter().map(|a| a.as_ref().to_string()).collect();
    let mut seen: HashSet<String> = flattened.iter().cloned().collect();

    let mut cursor = 0;
    while cursor < flattened.len() {
        let members = definition.members(&flattened[cursor]);
        let before = flattened.len();

        for member in members {
            if seen.insert(member.clone()) {
                flattened.push(member.clone());
            }
        }

        if flattened.len() > before {
            trace!(
                "Expanded '{}' with {} new member(s)",
                flattened[cursor],
                flattened.len() - before
            );
        }
        cursor += 1;
    }

    debug!("Flattened {} abilities into {}", abilities.len(), flattened.len());
    flattened
}
