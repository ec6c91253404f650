use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents a single step within a [`Path`].
///
/// ```
/// # use jsoneq_core::PathSegment;
/// let key = PathSegment::key("name");
/// let index = PathSegment::index(2);
/// assert_eq!(key.to_string(), ".name");
/// assert_eq!(index.to_string(), "[2]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member access.
    Key(String),
    /// Zero-based array index access.
    Index(usize),
}

impl PathSegment {
    /// Creates a key segment.
    #[must_use]
    pub fn key<S>(value: S) -> Self
    where
        S: Into<String>,
    {
        Self::Key(value.into())
    }

    /// Creates an index segment.
    #[must_use]
    pub fn index(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Names are appended verbatim: no quoting, no escaping.
            Self::Key(key) => write!(f, ".{key}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl Serialize for PathSegment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Key(key) => serializer.serialize_str(key),
            Self::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

impl<'de> Deserialize<'de> for PathSegment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = PathSegment;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string key or non-negative integer index")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(PathSegment::Key(v.to_owned()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(PathSegment::Key(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let value = usize::try_from(v).map_err(|_| E::custom("index exceeds usize"))?;
                Ok(PathSegment::Index(value))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let value = usize::try_from(v).map_err(|_| E::custom("index must not be negative"))?;
                Ok(PathSegment::Index(value))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

/// JSONPath-like locator of a node within a document, rooted at `$`.
///
/// Paths are immutable: [`Path::key`] and [`Path::index`] return a new,
/// extended path and leave the receiver untouched.
///
/// ```
/// # use jsoneq_core::Path;
/// let items = Path::root().key("items");
/// let second = items.index(1).key("id");
/// assert_eq!(items.to_string(), "$.items");
/// assert_eq!(second.to_string(), "$.items[1].id");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// Creates the root path `$`.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path extended with a member access.
    #[must_use]
    pub fn key<S>(&self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.with_segment(PathSegment::key(name))
    }

    /// Returns a new path extended with an index access.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.with_segment(PathSegment::index(index))
    }

    /// Returns a new path extended with the given segment.
    #[must_use]
    pub fn with_segment(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment);
        Self(segments)
    }

    /// Returns the underlying segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns the number of segments below the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether this is the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the parent path, or `None` at the root.
    ///
    /// ```
    /// # use jsoneq_core::Path;
    /// let path = Path::root().key("tree").key("branches");
    /// assert_eq!(path.parent().unwrap().to_string(), "$.tree");
    /// assert!(Path::root().parent().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(value: Vec<PathSegment>) -> Self {
        Self(value)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_as_dollar() {
        assert_eq!(Path::root().to_string(), "$");
    }

    #[test]
    fn special_characters_are_not_escaped() {
        let path = Path::root().key("{a1}").key("b");
        assert_eq!(path.to_string(), "$.{a1}.b");
    }

    #[test]
    fn extending_leaves_the_original_untouched() {
        let base = Path::root().key("items");
        let first = base.index(0);
        let second = base.index(1);
        assert_eq!(base.to_string(), "$.items");
        assert_eq!(first.to_string(), "$.items[0]");
        assert_eq!(second.to_string(), "$.items[1]");
    }

    #[test]
    fn serde_round_trip_for_segments() {
        let path: Path = [PathSegment::key("foo"), PathSegment::index(3)].into_iter().collect();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[\"foo\",3]");
        let decoded: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, path);
    }
}
