//! Synthetic corpora for benchmarking the `jsoneq` comparator.
//!
//! Each corpus produces an actual/expected pair of JSON documents that
//! stresses one part of the comparison: wide objects, long arrays compared
//! as subsequences, and deep nesting.
//!
//! # Examples
//!
//! ```
//! use jsoneq_core::ComparisonMode;
//!
//! let corpus = jsoneq_benches::available_corpora()
//!     .iter()
//!     .find(|c| c.name() == "wide-object")
//!     .unwrap();
//! let dataset = corpus.load()?;
//! assert!(dataset.compare(ComparisonMode::Equivalence)?.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use jsoneq_core::{
    compare, render_documents, CanonicalizeError, CompareError, CompareOptions, ComparisonMode,
    Difference, Node, RenderConfig,
};

const WIDE_MEMBERS: usize = 2_000;
const LONG_ELEMENTS: usize = 1_000;
const DEEP_LEVELS: usize = 100;

/// A named generator for an actual/expected document pair.
#[derive(Clone, Copy, Debug)]
pub struct Corpus {
    name: &'static str,
    generate: fn() -> (String, String),
}

impl Corpus {
    /// Identifier used as the benchmark parameter.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size of both generated documents in bytes.
    #[must_use]
    pub fn fixture_bytes(&self) -> usize {
        let (actual, expected) = (self.generate)();
        actual.len() + expected.len()
    }

    /// Generates and parses both documents.
    pub fn load(&self) -> Result<Dataset, CanonicalizeError> {
        let (actual, expected) = (self.generate)();
        Ok(Dataset { actual: Node::from_json_str(&actual)?, expected: Node::from_json_str(&expected)? })
    }
}

/// A parsed actual/expected pair.
#[derive(Clone, Debug)]
pub struct Dataset {
    actual: Node,
    expected: Node,
}

impl Dataset {
    /// The subject document.
    #[must_use]
    pub fn actual(&self) -> &Node {
        &self.actual
    }

    /// The reference document.
    #[must_use]
    pub fn expected(&self) -> &Node {
        &self.expected
    }

    /// Compares the pair with default options in the given mode.
    pub fn compare(&self, mode: ComparisonMode) -> Result<Option<Difference>, CompareError> {
        let options = CompareOptions::default().with_mode(mode);
        compare(Some(&self.actual), Some(&self.expected), &options)
    }

    /// Renders the failure message for a difference found in this pair.
    #[must_use]
    pub fn render(&self, diff: &Difference, mode: ComparisonMode, config: &RenderConfig) -> String {
        render_documents(diff, Some(&self.actual), Some(&self.expected), mode, config)
    }
}

/// Returns every registered corpus.
#[must_use]
pub fn available_corpora() -> &'static [Corpus] {
    &CORPORA
}

static CORPORA: [Corpus; 3] = [
    Corpus { name: "wide-object", generate: wide_object },
    Corpus { name: "long-array", generate: long_array },
    Corpus { name: "deep-nesting", generate: deep_nesting },
];

/// Same members in reverse order; the last expected member differs.
fn wide_object() -> (String, String) {
    let members = |reverse: bool, last: usize| {
        let mut entries: Vec<String> = (0..WIDE_MEMBERS)
            .map(|i| {
                let value = if i == WIDE_MEMBERS - 1 { last } else { i };
                format!("\"key{i}\":{{\"id\":{value},\"tags\":[\"a\",\"b\"]}}")
            })
            .collect();
        if reverse {
            entries.reverse();
        }
        format!("{{{}}}", entries.join(","))
    };
    (members(true, WIDE_MEMBERS - 1), members(false, 0))
}

/// Every third actual element is expected, which is a valid subsequence.
fn long_array() -> (String, String) {
    let element = |i: usize| format!("{{\"id\":{i},\"name\":\"item{i}\"}}");
    let actual: Vec<String> = (0..LONG_ELEMENTS).map(element).collect();
    let expected: Vec<String> = (0..LONG_ELEMENTS).step_by(3).map(element).collect();
    (format!("[{}]", actual.join(",")), format!("[{}]", expected.join(",")))
}

/// Nested arrays and objects whose innermost scalar differs.
fn deep_nesting() -> (String, String) {
    let nest = |leaf: &str| {
        let mut text = leaf.to_owned();
        for level in 0..DEEP_LEVELS {
            text = if level % 2 == 0 { format!("[{text}]") } else { format!("{{\"n\":{text}}}") };
        }
        text
    };
    (nest("true"), nest("false"))
}
