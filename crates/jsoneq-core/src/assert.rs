//! Test-assertion helpers built on the comparator.
//!
//! Every method returns `Ok` when the assertion holds and an
//! [`AssertionError::Failed`] carrying a report-ready message otherwise.
//!
//! ```
//! use jsoneq_core::{assert::JsonAssertions, JsonInput, Node};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let subject = Node::from_json_str(r#"{"id":42,"admin":true}"#)?;
//!     let json = JsonAssertions::new(&subject);
//!
//!     json.be_equivalent_to(r#"{"admin":true,"id":42}"#)?;
//!     json.contain_subtree(JsonInput::yaml("{ id: 42 }"))?;
//!     json.have_element("admin")?;
//!     json.have_count(2)?;
//!
//!     let err = json.because("names are required").have_element("name").unwrap_err();
//!     assert_eq!(
//!         err.failure_message(),
//!         Some(
//!             "Expected JSON document {\"id\":42,\"admin\":true} to have element \"name\" \
//!              because names are required, but no such element was found."
//!         )
//!     );
//!     Ok(())
//! }
//! ```

use tracing::debug;

use crate::render::because;
use crate::{
    compare, format, render_documents, AssertionError, CompareOptions, ComparisonMode,
    InputRole, JsonInput, Node, RenderConfig, NULL_TEXT,
};

/// Fluent assertions over an optional JSON subject.
#[derive(Clone, Debug)]
pub struct JsonAssertions<'a> {
    subject: Option<&'a Node>,
    options: CompareOptions,
    config: RenderConfig,
}

impl<'a> JsonAssertions<'a> {
    /// Wraps a subject; `None` stands for an absent document.
    #[must_use]
    pub fn new(subject: impl Into<Option<&'a Node>>) -> Self {
        Self { subject: subject.into(), options: CompareOptions::default(), config: RenderConfig::default() }
    }

    /// Sets the reason quoted in failure messages.
    #[must_use]
    pub fn because<S>(mut self, reason: S) -> Self
    where
        S: Into<String>,
    {
        self.config = self.config.with_reason(reason);
        self
    }

    /// Uses the given options for comparisons. The mode is chosen per assertion.
    #[must_use]
    pub fn with_options(mut self, options: CompareOptions) -> Self {
        self.options = options;
        self
    }

    /// Uses the given render settings for comparison failures.
    #[must_use]
    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Asserts that the subject is equivalent to `expected`.
    pub fn be_equivalent_to<'b>(&self, expected: impl Into<JsonInput<'b>>) -> Result<(), AssertionError> {
        self.compare_with(expected.into(), ComparisonMode::Equivalence)
    }

    /// Asserts that `expected` is contained in the subject.
    pub fn contain_subtree<'b>(&self, expected: impl Into<JsonInput<'b>>) -> Result<(), AssertionError> {
        self.compare_with(expected.into(), ComparisonMode::Subtree)
    }

    /// Asserts that the subject differs from `unexpected`.
    pub fn not_be_equivalent_to<'b>(
        &self,
        unexpected: impl Into<JsonInput<'b>>,
    ) -> Result<(), AssertionError> {
        let unexpected = unexpected.into().resolve(InputRole::Unexpected)?;
        let unexpected = unexpected.as_deref();
        let options = self.options.clone().with_mode(ComparisonMode::Equivalence);
        if compare(self.subject, unexpected, &options)?.is_some() {
            return Ok(());
        }
        Err(AssertionError::failed(format!(
            "Expected JSON document not to be equivalent to {}{}.",
            format(unexpected, false),
            self.reason(),
        )))
    }

    /// Asserts that the subject is an object with a member called `name`.
    pub fn have_element(&self, name: &str) -> Result<(), AssertionError> {
        if self.member(name).is_some() {
            return Ok(());
        }
        Err(AssertionError::failed(format!(
            "Expected JSON document {} to have element \"{name}\"{}, but no such element was found.",
            self.compact(),
            self.reason(),
        )))
    }

    /// Asserts that the subject has no member called `name`.
    pub fn not_have_element(&self, name: &str) -> Result<(), AssertionError> {
        if self.member(name).is_none() {
            return Ok(());
        }
        Err(AssertionError::failed(format!(
            "Did not expect JSON document {} to have element \"{name}\"{}.",
            self.compact(),
            self.reason(),
        )))
    }

    /// Asserts that the subject holds exactly `expected` items: object
    /// members, array elements, or the value of a property.
    pub fn have_count(&self, expected: usize) -> Result<(), AssertionError> {
        let found = match self.subject {
            None => NULL_TEXT.to_owned(),
            Some(node) => {
                let count = items(node).len();
                if count == expected {
                    return Ok(());
                }
                count.to_string()
            }
        };
        Err(AssertionError::failed(format!(
            "Expected JSON document {} to contain {expected} item(s){}, but found {found}.",
            self.compact(),
            self.reason(),
        )))
    }

    /// Asserts that the subject holds exactly one item and returns it. An
    /// object's only member comes back as a [`Node::Property`].
    pub fn contain_single_item(&self) -> Result<Node, AssertionError> {
        let outcome = match self.subject {
            None => format!("found {NULL_TEXT}"),
            Some(node) => {
                let mut items = items(node);
                match items.len() {
                    1 => return Ok(items.remove(0)),
                    0 => "the collection is empty".to_owned(),
                    _ => format!("found {}", self.compact()),
                }
            }
        };
        Err(AssertionError::failed(format!(
            "Expected JSON document {} to contain a single item{}, but {outcome}.",
            self.compact(),
            self.reason(),
        )))
    }

    fn compare_with(&self, expected: JsonInput<'_>, mode: ComparisonMode) -> Result<(), AssertionError> {
        let expected = expected.resolve(InputRole::Expected)?;
        let expected = expected.as_deref();
        let options = self.options.clone().with_mode(mode);
        let Some(diff) = compare(self.subject, expected, &options)? else {
            return Ok(());
        };
        debug!(%mode, %diff, "assertion failed");
        Err(AssertionError::failed(render_documents(&diff, self.subject, expected, mode, &self.config)))
    }

    fn member(&self, name: &str) -> Option<&Node> {
        match self.subject? {
            Node::Object(object) => object.get(name),
            _ => None,
        }
    }

    fn compact(&self) -> String {
        format(self.subject, false)
    }

    fn reason(&self) -> String {
        because(self.config.reason())
    }
}

fn items(node: &Node) -> Vec<Node> {
    match node {
        Node::Object(object) => {
            object.iter().map(|(name, value)| Node::property(name, value.clone())).collect()
        }
        Node::Array(elements) => elements.clone(),
        Node::Property(property) => vec![property.value().clone()],
        _ => Vec::new(),
    }
}
