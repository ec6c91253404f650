use crate::Node;

/// Text used for an absent document.
pub const NULL_TEXT: &str = "<null>";

/// Renders a document for failure messages.
///
/// With `use_line_breaks` the output is indented by two spaces per level;
/// otherwise it is compact. Members keep their document order.
///
/// ```
/// # use jsoneq_core::{format, Node};
/// let node = Node::from_json_str("{ \"id\": 1, \"tags\": [\"a\"] }")?;
/// assert_eq!(format(Some(&node), false), "{\"id\":1,\"tags\":[\"a\"]}");
/// assert_eq!(format(Some(&node), true), "{\n  \"id\": 1,\n  \"tags\": [\n    \"a\"\n  ]\n}");
/// assert_eq!(format(None, true), "<null>");
/// # Ok::<(), jsoneq_core::CanonicalizeError>(())
/// ```
#[must_use]
pub fn format(node: Option<&Node>, use_line_breaks: bool) -> String {
    match node {
        None => NULL_TEXT.to_owned(),
        Some(Node::Property(property)) => {
            let name = to_json(&Node::from(property.name()), false);
            format!("{name}: {}", to_json(property.value(), use_line_breaks))
        }
        Some(node) => to_json(node, use_line_breaks),
    }
}

fn to_json(node: &Node, pretty: bool) -> String {
    // Nodes only ever carry string keys and finite numbers, which serde_json
    // always accepts.
    let rendered = if pretty { serde_json::to_string_pretty(node) } else { serde_json::to_string(node) };
    rendered.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_renders_name_and_value() {
        let node = Node::property("eyes", Node::from("blue"));
        assert_eq!(format(Some(&node), false), "\"eyes\": \"blue\"");
    }

    #[test]
    fn nested_property_value_is_pretty_printed() {
        let value = Node::from_json_str("{\"b\":1}").unwrap();
        let node = Node::property("a", value);
        assert_eq!(format(Some(&node), true), "\"a\": {\n  \"b\": 1\n}");
    }

    #[test]
    fn null_node_is_not_the_absent_marker() {
        assert_eq!(format(Some(&Node::Null), true), "null");
    }

    #[test]
    fn integral_floats_print_without_fraction() {
        let node = Node::from_json_str("[1.0, 2.5]").unwrap();
        assert_eq!(format(Some(&node), false), "[1,2.5]");
    }
}
