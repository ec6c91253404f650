//! Structural comparison of two JSON trees.
//!
//! The comparator walks the actual and expected trees in lock-step and stops
//! at the first divergence, depth-first in expected member order. The result
//! is either `None` (the trees satisfy the requested [`ComparisonMode`]) or a
//! single [`Difference`] naming the location and nature of the mismatch.
//!
//! ```
//! use jsoneq_core::{compare_equivalence, compare_subtree, Node};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let actual = Node::from_json_str(r#"{"tree":{"branches":5,"leaves":10}}"#)?;
//!     let expected = Node::from_json_str(r#"{"tree":{"leaves":10}}"#)?;
//!
//!     let diff = compare_equivalence(Some(&actual), Some(&expected))?.expect("extra member");
//!     assert_eq!(diff.to_string(), "has extra property $.tree.branches");
//!
//!     assert!(compare_subtree(Some(&actual), Some(&expected))?.is_none());
//!     Ok(())
//! }
//! ```

mod array;
mod object;
mod path;
mod primitives;

pub use path::{Path, PathSegment};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{CompareError, CompareOptions, ComparisonMode, Node, NodeKind};

/// What went wrong at a [`Difference`]'s location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DifferenceKind {
    /// The actual document is absent while an expected one exists.
    ActualIsNull,
    /// The expected document is absent while an actual one exists.
    ExpectedIsNull,
    /// The nodes are of different kinds.
    OtherType {
        /// Kind found in the actual tree.
        actual: NodeKind,
        /// Kind found in the expected tree.
        expected: NodeKind,
    },
    /// Two properties carry different names.
    OtherName,
    /// Two scalars of the same kind hold different values.
    OtherValue,
    /// Two arrays have different lengths.
    DifferentLength {
        /// Number of actual elements.
        actual: usize,
        /// Number of expected elements.
        expected: usize,
    },
    /// An expected object member is missing from the actual object.
    ActualMissesProperty,
    /// The actual object has a member the expected object does not.
    ExpectedMissesProperty,
    /// No actual array element matches an expected one.
    ActualMissesElement,
    /// A matching actual element exists, but before an earlier match.
    WrongOrder,
}

/// The first point of divergence between two trees.
///
/// `Display` renders the message fragment used after `JSON document`.
///
/// ```
/// # use jsoneq_core::{Difference, DifferenceKind, Path};
/// let diff = Difference::new(DifferenceKind::WrongOrder, Path::root().key("items").index(2));
/// assert_eq!(diff.to_string(), "has expected element $.items[2] in the wrong order");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    kind: DifferenceKind,
    path: Path,
}

impl Difference {
    /// Creates a difference at the given location.
    #[must_use]
    pub fn new(kind: DifferenceKind, path: Path) -> Self {
        Self { kind, path }
    }

    /// The nature of the mismatch.
    #[must_use]
    pub fn kind(&self) -> &DifferenceKind {
        &self.kind
    }

    /// Where the mismatch was found.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = &self.path;
        match &self.kind {
            DifferenceKind::ActualIsNull => f.write_str("is null"),
            DifferenceKind::ExpectedIsNull => f.write_str("is not null"),
            DifferenceKind::OtherType { actual, expected } => {
                write!(f, "has {actual} instead of {expected} at {path}")
            }
            DifferenceKind::OtherName => write!(f, "has a different name at {path}"),
            DifferenceKind::OtherValue => write!(f, "has a different value at {path}"),
            DifferenceKind::DifferentLength { actual, expected } => {
                write!(f, "has {actual} elements instead of {expected} at {path}")
            }
            DifferenceKind::ActualMissesProperty => write!(f, "misses property {path}"),
            DifferenceKind::ExpectedMissesProperty => write!(f, "has extra property {path}"),
            DifferenceKind::ActualMissesElement => write!(f, "misses expected element {path}"),
            DifferenceKind::WrongOrder => {
                write!(f, "has expected element {path} in the wrong order")
            }
        }
    }
}

type Outcome = Result<Option<Difference>, CompareError>;

/// Compares two optional trees under the given options.
///
/// `None` stands for an absent document, which is distinct from a present
/// [`Node::Null`].
///
/// ```
/// # use jsoneq_core::{compare, CompareOptions, Node};
/// let expected = Node::from_json_str("{\"id\":2}")?;
/// let diff = compare(None, Some(&expected), &CompareOptions::default())?.unwrap();
/// assert_eq!(diff.to_string(), "is null");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compare(actual: Option<&Node>, expected: Option<&Node>, options: &CompareOptions) -> Outcome {
    let root = Path::root();
    let outcome = match (actual, expected) {
        (None, None) => None,
        (None, Some(_)) => Some(Difference::new(DifferenceKind::ActualIsNull, root)),
        (Some(_), None) => Some(Difference::new(DifferenceKind::ExpectedIsNull, root)),
        (Some(actual), Some(expected)) => compare_impl(actual, expected, &root, 0, options)?,
    };
    match &outcome {
        Some(difference) => {
            debug!(mode = %options.mode(), %difference, "documents differ");
        }
        None => debug!(mode = %options.mode(), "documents match"),
    }
    Ok(outcome)
}

/// Checks that both trees are equivalent, ignoring object member order.
pub fn compare_equivalence(actual: Option<&Node>, expected: Option<&Node>) -> Outcome {
    compare(actual, expected, &CompareOptions::equivalence())
}

/// Checks that `expected` is contained in `actual`.
///
/// ```
/// # use jsoneq_core::{compare_subtree, Node};
/// let actual = Node::from_json_str(r#"{"items":[{"id":1},{"id":2},{"id":3}]}"#)?;
/// let expected = Node::from_json_str(r#"{"items":[{"id":3},{"id":1}]}"#)?;
/// let diff = compare_subtree(Some(&actual), Some(&expected))?.unwrap();
/// assert_eq!(diff.to_string(), "has expected element $.items[1] in the wrong order");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compare_subtree(actual: Option<&Node>, expected: Option<&Node>) -> Outcome {
    compare(actual, expected, &CompareOptions::subtree())
}

pub(super) fn compare_impl(
    actual: &Node,
    expected: &Node,
    path: &Path,
    depth: usize,
    options: &CompareOptions,
) -> Outcome {
    if depth > options.max_depth() {
        return Err(CompareError::DepthExceeded { path: path.clone(), limit: options.max_depth() });
    }

    let (actual_kind, expected_kind) = (actual.kind(), expected.kind());
    if actual_kind != expected_kind {
        trace!(%path, %actual_kind, %expected_kind, "kind mismatch");
        let kind = DifferenceKind::OtherType { actual: actual_kind, expected: expected_kind };
        return Ok(Some(Difference::new(kind, path.clone())));
    }

    match (actual, expected) {
        (Node::Object(left), Node::Object(right)) => {
            object::compare_objects(left, right, path, depth, options)
        }
        (Node::Property(left), Node::Property(right)) => {
            object::compare_properties(left, right, path, depth, options)
        }
        (Node::Array(left), Node::Array(right)) => match options.mode() {
            ComparisonMode::Equivalence => array::compare_lists(left, right, path, depth, options),
            ComparisonMode::Subtree => {
                array::compare_subsequence(left, right, path, depth, options)
            }
        },
        _ => Ok(primitives::compare_scalars(actual, expected, path)),
    }
}
