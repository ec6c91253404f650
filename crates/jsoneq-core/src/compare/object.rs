use super::{compare_impl, Difference, DifferenceKind, Outcome, Path};
use crate::{CompareOptions, ComparisonMode, Object, Property};

/// Walks expected members in document order, then flags actual members the
/// expected object lacks (equivalence only).
pub(super) fn compare_objects(
    actual: &Object,
    expected: &Object,
    path: &Path,
    depth: usize,
    options: &CompareOptions,
) -> Outcome {
    for (key, expected_value) in expected.iter() {
        let member_path = path.key(key);
        let Some(actual_value) = actual.get(key) else {
            return Ok(Some(Difference::new(DifferenceKind::ActualMissesProperty, member_path)));
        };
        if let Some(difference) =
            compare_impl(actual_value, expected_value, &member_path, depth + 1, options)?
        {
            return Ok(Some(difference));
        }
    }

    if options.mode() == ComparisonMode::Subtree {
        return Ok(None);
    }

    let extra = actual.keys().find(|key| !expected.contains_key(key));
    Ok(extra.map(|key| Difference::new(DifferenceKind::ExpectedMissesProperty, path.key(key))))
}

/// Properties compare by name first; the value shares the property's path.
pub(super) fn compare_properties(
    actual: &Property,
    expected: &Property,
    path: &Path,
    depth: usize,
    options: &CompareOptions,
) -> Outcome {
    if actual.name() != expected.name() {
        return Ok(Some(Difference::new(DifferenceKind::OtherName, path.clone())));
    }
    compare_impl(actual.value(), expected.value(), path, depth + 1, options)
}
