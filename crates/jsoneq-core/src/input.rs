use std::borrow::Cow;

use crate::{InputRole, Node, ParseError};

/// A document handed to the comparison API: either an already built tree or
/// raw text parsed on demand.
///
/// ```
/// # use jsoneq_core::{InputRole, JsonInput, Node};
/// let node = JsonInput::from("{\"id\":1}").resolve(InputRole::Expected)?.unwrap();
/// assert_eq!(node.as_ref(), &Node::from_json_str("{\"id\":1.0}")?);
/// assert!(JsonInput::Absent.resolve(InputRole::Expected)?.is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub enum JsonInput<'a> {
    /// No document at all, as opposed to a JSON `null`.
    Absent,
    /// A borrowed tree.
    Node(&'a Node),
    /// Strict JSON text.
    Json(&'a str),
    /// YAML text, which also covers relaxed JSON such as `{ id: 2 }`.
    Yaml(&'a str),
}

impl<'a> JsonInput<'a> {
    /// Wraps relaxed text parsed through the YAML reader.
    #[must_use]
    pub fn yaml(text: &'a str) -> Self {
        Self::Yaml(text)
    }

    /// Produces the tree, parsing text inputs. Failures are tagged with `role`.
    pub fn resolve(self, role: InputRole) -> Result<Option<Cow<'a, Node>>, ParseError> {
        let parsed = match self {
            Self::Absent => return Ok(None),
            Self::Node(node) => return Ok(Some(Cow::Borrowed(node))),
            Self::Json(text) => Node::from_json_str(text).map_err(|err| ParseError::new(role, text, err))?,
            Self::Yaml(text) => Node::from_yaml_str(text).map_err(|err| ParseError::new(role, text, err))?,
        };
        Ok(Some(Cow::Owned(parsed)))
    }
}

impl<'a> From<&'a Node> for JsonInput<'a> {
    fn from(value: &'a Node) -> Self {
        Self::Node(value)
    }
}

impl<'a> From<Option<&'a Node>> for JsonInput<'a> {
    fn from(value: Option<&'a Node>) -> Self {
        value.map_or(Self::Absent, Self::Node)
    }
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Json(value)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CanonicalizeError;

    #[test]
    fn nodes_are_borrowed() {
        let node = Node::Bool(true);
        let resolved = JsonInput::from(&node).resolve(InputRole::Actual).unwrap().unwrap();
        assert!(matches!(resolved, Cow::Borrowed(_)));
    }

    #[test]
    fn invalid_text_reports_role_and_text() {
        let err = JsonInput::from("{ invalid JSON }").resolve(InputRole::Unexpected).unwrap_err();
        assert_eq!(err.role(), InputRole::Unexpected);
        assert_eq!(err.text(), "{ invalid JSON }");
        assert_eq!(err.to_string(), "Unable to parse unexpected JSON string: { invalid JSON }");
        assert!(matches!(err.cause(), CanonicalizeError::Json(_)));
    }

    #[test]
    fn yaml_input_accepts_relaxed_syntax() {
        let resolved = JsonInput::yaml("{ foo: 'foo', baz: 'baz' }")
            .resolve(InputRole::Expected)
            .unwrap()
            .unwrap();
        let strict = Node::from_json_str("{\"foo\":\"foo\",\"baz\":\"baz\"}").unwrap();
        assert_eq!(resolved.as_ref(), &strict);
    }

    #[test]
    fn missing_option_is_absent() {
        assert!(matches!(JsonInput::from(None::<&Node>), JsonInput::Absent));
    }
}
