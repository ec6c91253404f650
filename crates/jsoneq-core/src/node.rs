use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value as JsonValue;

use crate::{CanonicalizeError, Number};

/// The JSON data model walked by the comparator.
///
/// Objects keep their members in document order. Equality (`==`) is
/// structural and ignores member order, matching equivalence semantics.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number; integers stay exact.
    Number(Number),
    /// JSON string.
    String(String),
    /// JSON array.
    Array(Vec<Node>),
    /// JSON object with members in insertion order.
    Object(Object),
    /// A single object member compared in isolation.
    Property(Property),
}

/// Coarse classification of a [`Node`], used in difference messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Boolean,
    /// JSON number.
    Number,
    /// JSON string.
    String,
    /// JSON array.
    Array,
    /// JSON object.
    Object,
    /// Standalone object member.
    Property,
}

impl NodeKind {
    /// Returns the article-prefixed word used in messages such as
    /// `has an array instead of an integer`.
    ///
    /// Every number is described as "an integer".
    ///
    /// ```
    /// # use jsoneq_core::NodeKind;
    /// assert_eq!(NodeKind::Number.describe(), "an integer");
    /// assert_eq!(NodeKind::Object.describe(), "an object");
    /// ```
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "a boolean",
            Self::Number => "an integer",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
            Self::Property => "a property",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Insertion-ordered JSON object members with unique keys.
///
/// ```
/// # use jsoneq_core::{Node, Object};
/// let mut object = Object::new();
/// object.insert("b", Node::Bool(true));
/// object.insert("a", Node::Null);
/// let keys: Vec<_> = object.keys().collect();
/// assert_eq!(keys, ["b", "a"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Object {
    members: IndexMap<String, Node>,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a member. An existing key keeps its position and has its value
    /// replaced; the previous value is returned.
    pub fn insert<K>(&mut self, key: K, value: Node) -> Option<Node>
    where
        K: Into<String>,
    {
        self.members.insert(key.into(), value)
    }

    /// Looks up a member by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.members.get(key)
    }

    /// Indicates whether a member with this key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Indicates whether the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.members.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.keys().map(String::as_str)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key).is_some_and(|theirs| theirs == value))
    }
}

impl<K> FromIterator<(K, Node)> for Object
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut object = Self { members: IndexMap::with_capacity(iter.size_hint().0) };
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl IntoIterator for Object {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

/// A named value detached from its parent object.
///
/// ```
/// # use jsoneq_core::{Node, Property};
/// let property = Property::new("eyes", Node::String("blue".into()));
/// assert_eq!(property.name(), "eyes");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    name: String,
    value: Box<Node>,
}

impl Property {
    /// Creates a property from a name and value.
    #[must_use]
    pub fn new<S>(name: S, value: Node) -> Self
    where
        S: Into<String>,
    {
        Self { name: name.into(), value: Box::new(value) }
    }

    /// The member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member value.
    #[must_use]
    pub fn value(&self) -> &Node {
        &self.value
    }
}

impl Node {
    /// Parses a JSON string, preserving member order.
    ///
    /// ```
    /// # use jsoneq_core::Node;
    /// let node = Node::from_json_str("{\"hello\":\"world\"}")?;
    /// assert!(matches!(node, Node::Object(_)));
    /// assert!(Node::from_json_str("{ invalid JSON }").is_err());
    /// # Ok::<(), jsoneq_core::CanonicalizeError>(())
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self, CanonicalizeError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a YAML string. Flow syntax makes this the entry point for
    /// relaxed, unquoted-key documents such as `{ id: 2 }`.
    ///
    /// ```
    /// # use jsoneq_core::Node;
    /// let relaxed = Node::from_yaml_str("{ id: 2, name: 'eq' }")?;
    /// let strict = Node::from_json_str("{\"id\":2,\"name\":\"eq\"}")?;
    /// assert_eq!(relaxed, strict);
    /// # Ok::<(), jsoneq_core::CanonicalizeError>(())
    /// ```
    pub fn from_yaml_str(input: &str) -> Result<Self, CanonicalizeError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Converts a serde JSON value into a [`Node`].
    ///
    /// Member order follows the iteration order of `serde_json::Map`.
    pub fn from_json_value(value: JsonValue) -> Result<Self, CanonicalizeError> {
        match value {
            JsonValue::Null => Ok(Self::Null),
            JsonValue::Bool(v) => Ok(Self::Bool(v)),
            JsonValue::Number(num) => {
                if let Some(v) = num.as_i64() {
                    return Ok(Self::Number(Number::from(v)));
                }
                if let Some(v) = num.as_u64() {
                    return Ok(Self::Number(Number::from(v)));
                }
                // Without `arbitrary_precision` every remaining number is an f64.
                Ok(Self::Number(Number::new(num.as_f64().unwrap_or_default())?))
            }
            JsonValue::String(s) => Ok(Self::String(s)),
            JsonValue::Array(values) => {
                let mut items = Vec::with_capacity(values.len());
                for value in values {
                    items.push(Self::from_json_value(value)?);
                }
                Ok(Self::Array(items))
            }
            JsonValue::Object(map) => {
                let mut object = Object::new();
                for (key, value) in map {
                    object.insert(key, Self::from_json_value(value)?);
                }
                Ok(Self::Object(object))
            }
        }
    }

    /// Builds a standalone property node.
    #[must_use]
    pub fn property<S>(name: S, value: Node) -> Self
    where
        S: Into<String>,
    {
        Self::Property(Property::new(name, value))
    }

    /// Classifies the node.
    ///
    /// ```
    /// # use jsoneq_core::{Node, NodeKind};
    /// assert_eq!(Node::from_json_str("[1]")?.kind(), NodeKind::Array);
    /// # Ok::<(), jsoneq_core::CanonicalizeError>(())
    /// ```
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Null => NodeKind::Null,
            Self::Bool(_) => NodeKind::Boolean,
            Self::Number(_) => NodeKind::Number,
            Self::String(_) => NodeKind::String,
            Self::Array(_) => NodeKind::Array,
            Self::Object(_) => NodeKind::Object,
            Self::Property(_) => NodeKind::Property,
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Number> for Node {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Self::Array(value)
    }
}

impl From<Object> for Node {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Property> for Node {
    fn from(value: Property) -> Self {
        Self::Property(value)
    }
}

impl TryFrom<JsonValue> for Node {
    type Error = CanonicalizeError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Self::from_json_value(value)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Property(property) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(property.name(), property.value())?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = Node;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("any JSON value")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Node::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Node::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Node::deserialize(deserializer)
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Node::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Node::Number(Number::from(v)))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Node::Number(Number::from(v)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Number::new(v).map(Node::Number).map_err(E::custom)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Node::String(v.to_owned()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Node::String(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Node::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut object = Object::new();
                while let Some((key, value)) = map.next_entry::<String, Node>()? {
                    object.insert(key, value);
                }
                Ok(Node::Object(object))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{
        collection::{btree_map, vec},
        prelude::*,
        string::string_regex,
    };

    fn arb_json_value() -> impl Strategy<Value = JsonValue> {
        let leaf = prop_oneof![
            Just(JsonValue::Null),
            any::<bool>().prop_map(JsonValue::Bool),
            proptest::num::f64::ANY.prop_filter_map("finite", |f| {
                if f.is_finite() {
                    serde_json::Number::from_f64(f).map(JsonValue::Number)
                } else {
                    None
                }
            }),
            string_regex("[a-zA-Z0-9]{0,8}").unwrap().prop_map(JsonValue::String),
        ];
        leaf.prop_recursive(4, 8, 4, move |inner| {
            prop_oneof![
                vec(inner.clone(), 0..4).prop_map(JsonValue::Array),
                btree_map(string_regex("[a-zA-Z0-9]{1,8}").unwrap(), inner, 0..4).prop_map(|map| {
                    let mut object = serde_json::Map::new();
                    for (k, v) in map {
                        object.insert(k, v);
                    }
                    JsonValue::Object(object)
                }),
            ]
        })
    }

    #[test]
    fn json_parsing_preserves_member_order() {
        let node = Node::from_json_str("{\"zebra\":1,\"apple\":2,\"mango\":3}").unwrap();
        let Node::Object(object) = node else {
            panic!("expected object");
        };
        let keys: Vec<_> = object.keys().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn duplicate_keys_replace_in_place() {
        let node = Node::from_json_str("{\"a\":1,\"b\":2,\"a\":3}").unwrap();
        let Node::Object(object) = node else {
            panic!("expected object");
        };
        let keys: Vec<_> = object.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(object.get("a"), Some(&Node::Number(Number::from(3_u64))));
    }

    #[test]
    fn object_equality_ignores_member_order() {
        let lhs = Node::from_json_str("{\"id\":2,\"admin\":true}").unwrap();
        let rhs = Node::from_json_str("{\"admin\":true,\"id\":2}").unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn integer_and_float_literals_are_equal() {
        assert_eq!(Node::from_json_str("1").unwrap(), Node::from_json_str("1.0").unwrap());
    }

    #[test]
    fn large_integers_keep_their_exact_value() {
        assert_ne!(
            Node::from_json_str("{\"id\":9007199254740993}").unwrap(),
            Node::from_json_str("{\"id\":9007199254740992}").unwrap()
        );
        assert_ne!(
            Node::from_json_str("18446744073709551615").unwrap(),
            Node::from_json_str("18446744073709551614").unwrap()
        );
        let node = Node::from_json_str("[-9223372036854775808,18446744073709551615]").unwrap();
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            "[-9223372036854775808,18446744073709551615]"
        );
    }

    #[test]
    fn value_conversion_keeps_integers_exact() {
        let value: JsonValue = serde_json::from_str("[9007199254740993,-5,0.5]").unwrap();
        let node = Node::from_json_value(value).unwrap();
        let expected = Node::Array(vec![
            Node::Number(Number::from(9_007_199_254_740_993_u64)),
            Node::Number(Number::from(-5_i64)),
            Node::Number(Number::new(0.5).unwrap()),
        ]);
        assert_eq!(node, expected);
        assert_ne!(
            node,
            Node::from_json_str("[9007199254740992,-5,0.5]").unwrap()
        );
    }

    #[test]
    fn wide_objects_keep_order_and_lookups() {
        let object: Object = (0..20_000).map(|i| (format!("k{i}"), Node::from(i % 2 == 0))).collect();
        assert_eq!(object.len(), 20_000);
        assert_eq!(object.keys().next(), Some("k0"));
        assert_eq!(object.keys().last(), Some("k19999"));
        assert_eq!(object.get("k10001"), Some(&Node::Bool(false)));
        let reversed: Object = object.clone().into_iter().rev().collect();
        assert_eq!(reversed.keys().next(), Some("k19999"));
        assert_eq!(reversed, object);
    }

    #[test]
    fn yaml_accepts_unquoted_keys() {
        let node = Node::from_yaml_str("{ items: [ \"fork\", 'knife' ], count: 2 }").unwrap();
        let expected = Node::from_json_str("{\"items\":[\"fork\",\"knife\"],\"count\":2}").unwrap();
        assert_eq!(node, expected);
    }

    #[test]
    fn yaml_null_is_null_node() {
        let node = Node::from_yaml_str("{ id: ~ }").unwrap();
        assert_eq!(node, Node::from_json_str("{\"id\":null}").unwrap());
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = Node::from_json_str("{ invalid JSON }").unwrap_err();
        assert!(matches!(err, CanonicalizeError::Json(_)));
    }

    #[test]
    fn json_number_out_of_range_yields_error() {
        assert!(Node::from_json_str("1e400").is_err());
    }

    #[test]
    fn property_serializes_as_single_member_object() {
        let property = Node::property("eyes", Node::from("blue"));
        assert_eq!(serde_json::to_string(&property).unwrap(), "{\"eyes\":\"blue\"}");
        assert_eq!(property.kind(), NodeKind::Property);
    }

    #[test]
    fn serialization_keeps_document_order() {
        let text = "{\"b\":[1,2.5,null],\"a\":{\"y\":true,\"x\":\"s\"}}";
        let node = Node::from_json_str(text).unwrap();
        assert_eq!(serde_json::to_string(&node).unwrap(), text);
    }

    proptest! {
        #[test]
        fn json_value_roundtrips_through_node(value in arb_json_value()) {
            let node = Node::from_json_value(value).unwrap();
            let serialized = serde_json::to_value(&node).unwrap();
            let reconstructed = Node::from_json_value(serialized).unwrap();
            prop_assert_eq!(reconstructed, node);
        }
    }
}
