//! Structural JSON comparison for test assertions.
//!
//! `jsoneq-core` decides whether two JSON trees are equivalent (ignoring
//! object member order) or whether one contains the other as a subtree, and
//! reports the first point of divergence with a `$`-rooted path and a
//! human-readable message.
//!
//! ```
//! use jsoneq_core::{compare_equivalence, render_documents, ComparisonMode, Node, RenderConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let actual = Node::from_json_str(r#"{"items":["fork","knife","spoon"]}"#)?;
//!     let expected = Node::from_json_str(r#"{"items":["fork","knife"]}"#)?;
//!
//!     let diff = compare_equivalence(Some(&actual), Some(&expected))?.expect("lengths differ");
//!     assert_eq!(diff.to_string(), "has 3 elements instead of 2 at $.items");
//!
//!     let config = RenderConfig::default().with_line_ending("\n");
//!     let message = render_documents(
//!         &diff,
//!         Some(&actual),
//!         Some(&expected),
//!         ComparisonMode::Equivalence,
//!         &config,
//!     );
//!     assert!(message.starts_with("JSON document has 3 elements instead of 2 at $.items.\n"));
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod assert;
mod compare;
mod error;
mod format;
mod input;
mod node;
mod number;
mod options;
mod render;

pub use compare::{
    compare, compare_equivalence, compare_subtree, Difference, DifferenceKind, Path, PathSegment,
};
pub use error::{
    AssertionError, CanonicalizeError, CompareError, InputRole, OptionsError, ParseError,
};
pub use format::{format, NULL_TEXT};
pub use input::JsonInput;
pub use node::{Node, NodeKind, Object, Property};
pub use number::Number;
pub use options::{CompareOptions, ComparisonMode, DEFAULT_MAX_DEPTH};
pub use render::{render, render_documents, RenderConfig, LINE_ENDING};

/// Returns the semantic version of the `jsoneq-core` crate.
///
/// ```
/// assert!(!jsoneq_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
