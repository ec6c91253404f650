use tracing::trace;

use super::{compare_impl, Difference, DifferenceKind, Outcome, Path};
use crate::{CompareError, CompareOptions, Node};

/// Equivalence: same length, then element-wise in index order.
pub(super) fn compare_lists(
    actual: &[Node],
    expected: &[Node],
    path: &Path,
    depth: usize,
    options: &CompareOptions,
) -> Outcome {
    if actual.len() != expected.len() {
        let kind = DifferenceKind::DifferentLength { actual: actual.len(), expected: expected.len() };
        return Ok(Some(Difference::new(kind, path.clone())));
    }
    for (index, (lhs, rhs)) in actual.iter().zip(expected).enumerate() {
        if let Some(difference) = compare_impl(lhs, rhs, &path.index(index), depth + 1, options)? {
            return Ok(Some(difference));
        }
    }
    Ok(None)
}

/// Subtree: expected elements must occur in `actual` as an ordered,
/// not necessarily contiguous, subsequence.
///
/// When an expected element has no match at or after the cursor, the actual
/// element under the cursor is compared directly so that content mismatches
/// are reported at their nested path. Past the end of `actual` the element is
/// either out of order (it matches somewhere earlier) or missing.
pub(super) fn compare_subsequence(
    actual: &[Node],
    expected: &[Node],
    path: &Path,
    depth: usize,
    options: &CompareOptions,
) -> Outcome {
    let mut cursor = 0;
    for (index, wanted) in expected.iter().enumerate() {
        let element_path = path.index(index);
        if let Some(found) = find_match(&actual[cursor..], wanted, &element_path, depth, options)? {
            cursor += found + 1;
            continue;
        }

        if let Some(candidate) = actual.get(cursor) {
            trace!(path = %element_path, cursor, "no match past cursor, comparing in place");
            return compare_impl(candidate, wanted, &element_path, depth + 1, options);
        }

        let kind = if find_match(actual, wanted, &element_path, depth, options)?.is_some() {
            DifferenceKind::WrongOrder
        } else {
            DifferenceKind::ActualMissesElement
        };
        return Ok(Some(Difference::new(kind, element_path)));
    }
    Ok(None)
}

fn find_match(
    candidates: &[Node],
    wanted: &Node,
    path: &Path,
    depth: usize,
    options: &CompareOptions,
) -> Result<Option<usize>, CompareError> {
    for (offset, candidate) in candidates.iter().enumerate() {
        if compare_impl(candidate, wanted, path, depth + 1, options)?.is_none() {
            return Ok(Some(offset));
        }
    }
    Ok(None)
}
