//! Value extraction

use super::annotation::Annotation;
use super::map::ValueMap;
use crate::types::AbilitySet;
use tracing::trace;

/// Split annotation tokens out of an ability list
///
/// Returns the values parsed from every `?`-prefixed token together with
/// the remaining abilities in their original order. Scalar keys are last
/// write wins, list keys accumulate in encounter order. Never fails; a
/// malformed annotation degrades to a best-effort parse.
///
/// ```rust
/// use able::values::extract_values;
///
/// let (values, remainder) = extract_values(&["foo", "bam", "?foo=1", "?x[]=3"]);
/// assert_eq!(remainder, vec!["foo", "bam"]);
/// assert_eq!(values.candidates("foo"), &["1"]);
/// assert_eq!(values.candidates("x"), &["3"]);
/// ```
pub fn extract_values<S: AsRef<str>>(abilities: &[S]) -> (ValueMap, AbilitySet) {
    let mut values = ValueMap::new();
    let mut remainder = AbilitySet::new();

    for ability in abilities {
        let ability = ability.as_ref();
        match Annotation::parse(ability) {
            Some(annotation) => {
                trace!("Extracted annotation {:?}", annotation);
                values.record(annotation);
            }
            None => remainder.push(ability.to_string()),
        }
    }

    (values, remainder)
}
