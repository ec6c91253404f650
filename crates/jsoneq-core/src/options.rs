use std::fmt;

use serde::{Deserialize, Serialize};

use crate::OptionsError;

/// Nesting depth accepted by [`CompareOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Selects the relation a comparison checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Both trees must match exactly, ignoring object member order (default).
    #[default]
    Equivalence,
    /// The expected tree must be contained in the actual tree: extra object
    /// members are allowed and expected array elements must appear as an
    /// ordered subsequence of the actual elements.
    Subtree,
}

impl ComparisonMode {
    /// Returns the phrase that links the two documents in a failure message.
    ///
    /// ```
    /// # use jsoneq_core::ComparisonMode;
    /// assert_eq!(ComparisonMode::Subtree.relation(), "was expected to contain");
    /// ```
    #[must_use]
    pub fn relation(self) -> &'static str {
        match self {
            Self::Equivalence => "was expected to be equivalent to",
            Self::Subtree => "was expected to contain",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equivalence => f.write_str("equivalence"),
            Self::Subtree => f.write_str("subtree"),
        }
    }
}

/// Configuration knobs passed to [`compare`](crate::compare).
///
/// Deserialization runs the same validation as the builders.
///
/// ```
/// # use jsoneq_core::{CompareOptions, ComparisonMode};
/// let opts: CompareOptions = serde_json::from_str(r#"{"mode":"subtree"}"#).unwrap();
/// assert_eq!(opts.mode(), ComparisonMode::Subtree);
/// assert!(serde_json::from_str::<CompareOptions>(r#"{"max_depth":0}"#).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCompareOptions")]
pub struct CompareOptions {
    mode: ComparisonMode,
    max_depth: usize,
}

#[derive(Deserialize)]
struct RawCompareOptions {
    #[serde(default)]
    mode: ComparisonMode,
    #[serde(default = "default_max_depth")]
    max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl TryFrom<RawCompareOptions> for CompareOptions {
    type Error = OptionsError;

    fn try_from(raw: RawCompareOptions) -> Result<Self, Self::Error> {
        Self::default().with_mode(raw.mode).with_max_depth(raw.max_depth)
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { mode: ComparisonMode::Equivalence, max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl CompareOptions {
    /// Options for an equivalence comparison.
    #[must_use]
    pub fn equivalence() -> Self {
        Self::default()
    }

    /// Options for a subtree comparison.
    ///
    /// ```
    /// # use jsoneq_core::{CompareOptions, ComparisonMode};
    /// assert_eq!(CompareOptions::subtree().mode(), ComparisonMode::Subtree);
    /// ```
    #[must_use]
    pub fn subtree() -> Self {
        Self::default().with_mode(ComparisonMode::Subtree)
    }

    /// Returns the configured comparison mode.
    #[must_use]
    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Returns the deepest nesting level the comparator will descend to.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Sets the comparison mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ComparisonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the nesting limit. Documents nested deeper fail with
    /// [`CompareError::DepthExceeded`](crate::CompareError::DepthExceeded)
    /// instead of exhausting the stack.
    ///
    /// ```
    /// # use jsoneq_core::{CompareOptions, OptionsError};
    /// let opts = CompareOptions::default().with_max_depth(8)?;
    /// assert_eq!(opts.max_depth(), 8);
    /// assert_eq!(CompareOptions::default().with_max_depth(0), Err(OptionsError::ZeroDepth));
    /// # Ok::<(), OptionsError>(())
    /// ```
    pub fn with_max_depth(mut self, max_depth: usize) -> Result<Self, OptionsError> {
        self.max_depth = max_depth;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), OptionsError> {
        if self.max_depth == 0 {
            return Err(OptionsError::ZeroDepth);
        }
        Ok(())
    }
}
