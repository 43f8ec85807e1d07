//! Value application

use super::map::ValueMap;
use super::template::Template;
use crate::types::AbilitySet;
use tracing::debug;

/// Substitute values into template abilities
///
/// Abilities without placeholders pass through unchanged. A template is
/// replaced, in place, by the cartesian product of the candidates of each
/// distinct placeholder name (first placeholder varies slowest). A template
/// with any unbound placeholder is dropped entirely.
///
/// ```rust
/// use able::values::{apply_values, ValueMap};
///
/// let values = ValueMap::new().with("articleId", ["1", "2"]);
/// let applied = apply_values(&["article:{articleId}:read", "post:{postId}:read"], &values);
///
/// assert_eq!(applied, vec!["article:1:read", "article:2:read"]);
/// ```
pub fn apply_values<S: AsRef<str>>(abilities: &[S], values: &ValueMap) -> AbilitySet {
    let mut applied = AbilitySet::with_capacity(abilities.len());

    for ability in abilities {
        let ability = ability.as_ref();
        let Some(template) = Template::parse(ability) else {
            applied.push(ability.to_string());
            continue;
        };

        // One binding per name, built a placeholder at a time
        let mut bindings: Vec<Vec<&str>> = vec![Vec::new()];
        for name in template.names() {
            let candidates = values.candidates(name);
            if candidates.is_empty() {
                debug!("Dropping '{}': no value for '{}'", ability, name);
                bindings.clear();
                break;
            }
            bindings = bindings
                .iter()
                .flat_map(|partial| {
                    candidates.iter().map(move |candidate| {
                        let mut next = partial.clone();
                        next.push(candidate.as_str());
                        next
                    })
                })
                .collect();
        }

        applied.extend(bindings.iter().map(|binding| template.render(binding)));
    }

    applied
}
