use crate::{format, ComparisonMode, Difference, Node};

/// Line terminator placed after every line of a rendered message.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator placed after every line of a rendered message.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Presentation settings for [`render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    reason: Option<String>,
    line_ending: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { reason: None, line_ending: LINE_ENDING.to_owned() }
    }
}

impl RenderConfig {
    /// Attaches the caller's reason, e.g. `"we want to test the failure message"`.
    #[must_use]
    pub fn with_reason<S>(mut self, reason: S) -> Self
    where
        S: Into<String>,
    {
        self.reason = Some(reason.into());
        self
    }

    /// Overrides the platform line terminator.
    #[must_use]
    pub fn with_line_ending<S>(mut self, line_ending: S) -> Self
    where
        S: Into<String>,
    {
        self.line_ending = line_ending.into();
        self
    }

    /// The configured reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// The configured line terminator.
    #[must_use]
    pub fn line_ending(&self) -> &str {
        &self.line_ending
    }
}

/// Builds the multi-line failure message for a difference.
///
/// ```
/// # use jsoneq_core::{compare_equivalence, format, render, ComparisonMode, Node, RenderConfig};
/// let actual = Node::from_json_str("{\"id\":1}")?;
/// let expected = Node::from_json_str("{\"id\":2}")?;
/// let diff = compare_equivalence(Some(&actual), Some(&expected))?.unwrap();
/// let config = RenderConfig::default().with_line_ending("\n").with_reason("ids matter");
/// let message = render(
///     &diff,
///     &format(Some(&actual), true),
///     &format(Some(&expected), true),
///     ComparisonMode::Equivalence,
///     &config,
/// );
/// assert_eq!(
///     message,
///     "JSON document has a different value at $.id.\nActual document\n{\n  \"id\": 1\n}\n\
///      was expected to be equivalent to\n{\n  \"id\": 2\n} because ids matter.\n"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn render(
    diff: &Difference,
    actual_text: &str,
    expected_text: &str,
    mode: ComparisonMode,
    config: &RenderConfig,
) -> String {
    let nl = config.line_ending();
    let reason = because(config.reason());
    let relation = mode.relation();
    format!(
        "JSON document {diff}.{nl}Actual document{nl}{actual_text}{nl}{relation}{nl}{expected_text}{reason}.{nl}"
    )
}

/// Formats both documents with line breaks and renders the message.
#[must_use]
pub fn render_documents(
    diff: &Difference,
    actual: Option<&Node>,
    expected: Option<&Node>,
    mode: ComparisonMode,
    config: &RenderConfig,
) -> String {
    render(diff, &format(actual, true), &format(expected, true), mode, config)
}

/// Turns a reason into the ` because ...` suffix; blank reasons vanish.
pub(crate) fn because(reason: Option<&str>) -> String {
    let Some(reason) = reason.map(str::trim).filter(|reason| !reason.is_empty()) else {
        return String::new();
    };
    let has_prefix = reason.get(..7).is_some_and(|head| head.eq_ignore_ascii_case("because"))
        && reason[7..].chars().next().is_none_or(|next| !next.is_alphanumeric());
    if has_prefix {
        format!(" {reason}")
    } else {
        format!(" because {reason}")
    }
}
