//! Fuzzing harnesses for the `jsoneq` comparator.
//!
//! Each public function accepts raw bytes and is shared between the
//! `cargo fuzz` targets and the unit tests below. Parser failures are
//! swallowed; comparator invariants are asserted so that fuzzers report
//! them as crashes.
//!
//! ```
//! jsoneq_fuzz::fuzz_parse(b"{\"a\":[1,2]}");
//! jsoneq_fuzz::fuzz_compare(&[1, 2, 3, 4]);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use jsoneq_core::{
    compare, compare_equivalence, compare_subtree, render_documents, CompareOptions,
    ComparisonMode, Node, Number, Object, RenderConfig,
};

const MAX_DEPTH: usize = 4;
const MAX_ARRAY_LEN: u8 = 6;
const MAX_OBJECT_LEN: u8 = 6;
const MAX_STRING_LEN: u8 = 12;

/// Feeds arbitrary bytes through the JSON and YAML readers and checks that
/// every parsed document matches itself.
///
/// ```
/// jsoneq_fuzz::fuzz_parse(b"{ key: value }");
/// ```
pub fn fuzz_parse(data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    for node in [Node::from_json_str(text), Node::from_yaml_str(text)].into_iter().flatten() {
        assert_reflexive(&node);
    }
}

/// Compares randomly generated trees in both modes and renders any
/// difference found.
///
/// ```
/// jsoneq_fuzz::fuzz_compare(b"seed");
/// ```
pub fn fuzz_compare(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Some(actual) = random_node(&mut unstructured) else {
        return;
    };
    let Some(expected) = random_node(&mut unstructured) else {
        return;
    };

    let forward = compare_equivalence(Some(&actual), Some(&expected)).ok().flatten();
    let backward = compare_equivalence(Some(&expected), Some(&actual)).ok().flatten();
    assert_eq!(forward.is_none(), backward.is_none(), "equivalence must be symmetric");

    let subtree = compare_subtree(Some(&actual), Some(&expected)).ok().flatten();
    if forward.is_none() {
        assert!(subtree.is_none(), "equivalent documents must contain each other");
    }

    let config = RenderConfig::default();
    if let Some(diff) = &forward {
        let _ = render_documents(diff, Some(&actual), Some(&expected), ComparisonMode::Equivalence, &config);
    }
    if let Some(diff) = &subtree {
        let _ = render_documents(diff, Some(&actual), Some(&expected), ComparisonMode::Subtree, &config);
    }

    if let Ok(shallow) = CompareOptions::default().with_max_depth(2) {
        let _ = compare(Some(&actual), Some(&expected), &shallow);
    }
}

fn assert_reflexive(node: &Node) {
    for options in [CompareOptions::equivalence(), CompareOptions::subtree()] {
        if let Ok(outcome) = compare(Some(node), Some(node), &options) {
            assert!(outcome.is_none(), "document must match itself: {outcome:?}");
        }
    }
}

fn random_node(unstructured: &mut Unstructured<'_>) -> Option<Node> {
    node_from_unstructured(unstructured, 0).ok()
}

fn node_from_unstructured(
    unstructured: &mut Unstructured<'_>,
    depth: usize,
) -> Result<Node, arbitrary::Error> {
    if depth >= MAX_DEPTH {
        return leaf(unstructured);
    }

    let choice = unstructured.int_in_range::<u8>(0..=5)?;
    match choice {
        0 => Ok(Node::Null),
        1 => Ok(Node::Bool(unstructured.arbitrary()?)),
        2 => Ok(Node::Number(random_number(unstructured)?)),
        3 => Ok(Node::String(random_string(unstructured)?)),
        4 => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_ARRAY_LEN)?);
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(node_from_unstructured(unstructured, depth + 1)?);
            }
            Ok(Node::Array(items))
        }
        _ => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_OBJECT_LEN)?);
            let mut object = Object::new();
            for _ in 0..len {
                let key = random_string(unstructured)?;
                let value = node_from_unstructured(unstructured, depth + 1)?;
                object.insert(key, value);
            }
            Ok(Node::Object(object))
        }
    }
}

fn leaf(unstructured: &mut Unstructured<'_>) -> Result<Node, arbitrary::Error> {
    let choice = unstructured.int_in_range::<u8>(0..=3)?;
    match choice {
        0 => Ok(Node::Null),
        1 => Ok(Node::Bool(unstructured.arbitrary()?)),
        2 => Ok(Node::Number(random_number(unstructured)?)),
        _ => Ok(Node::String(random_string(unstructured)?)),
    }
}

fn random_number(unstructured: &mut Unstructured<'_>) -> Result<Number, arbitrary::Error> {
    match unstructured.int_in_range::<u8>(0..=2)? {
        0 => Ok(Number::from(unstructured.arbitrary::<i64>()?)),
        1 => Ok(Number::from(unstructured.arbitrary::<u64>()?)),
        _ => {
            let numerator = f64::from(unstructured.arbitrary::<i32>()?);
            let denominator = f64::from(unstructured.int_in_range::<u16>(1..=1024)?);
            Number::new(numerator / denominator).map_err(|_| arbitrary::Error::IncorrectFormat)
        }
    }
}

fn random_string(unstructured: &mut Unstructured<'_>) -> Result<String, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_STRING_LEN)?);
    let mut string = String::with_capacity(len);
    for _ in 0..len {
        let byte = unstructured.int_in_range::<u8>(0x20..=0x7e)?;
        string.push(char::from(byte));
    }
    Ok(string)
}
