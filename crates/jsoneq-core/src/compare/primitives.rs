use tracing::trace;

use super::{Difference, DifferenceKind, Path};
use crate::Node;

/// Compares two nodes of the same scalar kind (or two nulls).
pub(super) fn compare_scalars(actual: &Node, expected: &Node, path: &Path) -> Option<Difference> {
    let equal = match (actual, expected) {
        (Node::Null, Node::Null) => true,
        (Node::Bool(lhs), Node::Bool(rhs)) => lhs == rhs,
        (Node::Number(lhs), Node::Number(rhs)) => lhs == rhs,
        (Node::String(lhs), Node::String(rhs)) => lhs == rhs,
        _ => false,
    };
    if equal {
        return None;
    }
    trace!(%path, "scalar values differ");
    Some(Difference::new(DifferenceKind::OtherValue, path.clone()))
}
