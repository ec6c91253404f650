use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Path;

/// Errors that can occur while canonicalizing external data into [`Node`](crate::Node).
#[derive(Debug, Error)]
pub enum CanonicalizeError {
    /// The provided JSON input was invalid.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The provided YAML input was invalid.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Attempted to construct a [`Number`](crate::Number) that is not finite.
    #[error("non-finite number encountered: {value}")]
    NotFinite {
        /// The offending numeric value.
        value: f64,
    },
}

/// Errors emitted when constructing [`CompareOptions`](crate::CompareOptions).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// A depth limit of zero would reject every document.
    #[error("maximum depth must be greater than zero")]
    ZeroDepth,
}

/// Identifies which side of an assertion a raw JSON string was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputRole {
    /// The subject under test.
    Actual,
    /// The document the subject should match.
    Expected,
    /// The document the subject should not match.
    Unexpected,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actual => f.write_str("actual"),
            Self::Expected => f.write_str("expected"),
            Self::Unexpected => f.write_str("unexpected"),
        }
    }
}

/// A raw JSON string handed to the comparison API could not be parsed.
///
/// Always distinct from a [`Difference`](crate::Difference): malformed input
/// never means "the documents differ".
///
/// ```
/// # use jsoneq_core::{InputRole, JsonInput};
/// let err = JsonInput::from("{ invalid JSON }").resolve(InputRole::Expected).unwrap_err();
/// assert!(err.to_string().starts_with("Unable to parse expected JSON string: { invalid JSON }"));
/// assert!(std::error::Error::source(&err).is_some());
/// ```
#[derive(Debug, Error)]
#[error("Unable to parse {role} JSON string: {text}")]
pub struct ParseError {
    role: InputRole,
    text: String,
    #[source]
    source: CanonicalizeError,
}

impl ParseError {
    pub(crate) fn new(role: InputRole, text: impl Into<String>, source: CanonicalizeError) -> Self {
        Self { role, text: text.into(), source }
    }

    /// Which side of the comparison failed to parse.
    #[must_use]
    pub fn role(&self) -> InputRole {
        self.role
    }

    /// The offending raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The underlying parser diagnostic.
    #[must_use]
    pub fn cause(&self) -> &CanonicalizeError {
        &self.source
    }
}

/// Errors raised by the comparator itself (as opposed to a found difference).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    /// The documents nest deeper than the configured limit.
    #[error("document nesting exceeds the maximum depth of {limit} at {path}")]
    DepthExceeded {
        /// Location at which the limit was hit.
        path: Path,
        /// The configured limit.
        limit: usize,
    },
}

/// Failures surfaced by [`JsonAssertions`](crate::assert::JsonAssertions).
#[derive(Debug, Error)]
pub enum AssertionError {
    /// The assertion did not hold; the message is ready for a test report.
    #[error("{message}")]
    Failed {
        /// Rendered failure message.
        message: String,
    },
    /// A raw JSON argument could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The comparator gave up before finding an answer.
    #[error(transparent)]
    Compare(#[from] CompareError),
}

impl AssertionError {
    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self::Failed { message: message.into() }
    }

    /// Returns the failure message when the assertion itself failed.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
