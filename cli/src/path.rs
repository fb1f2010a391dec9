//! Dotted document paths such as `users.0.name`.
//!
//! Numeric segments index arrays. On objects they are used as plain keys.
//! The empty path (or `.`) designates the root.

use crate::error::CliError;
use json_doc::JsonValue;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    fn as_key(&self) -> String {
        match self {
            Segment::Key(key) => key.clone(),
            Segment::Index(index) => index.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocPath {
    segments: Vec<Segment>,
}

impl FromStr for DocPath {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "." {
            return Ok(DocPath::default());
        }

        let segments = s
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    Err(CliError::InvalidPath(format!("empty segment in '{}'", s)))
                } else if let Ok(index) = part.parse::<usize>() {
                    Ok(Segment::Index(index))
                } else {
                    Ok(Segment::Key(part.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DocPath { segments })
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str(".");
        }
        let parts: Vec<String> = self.segments.iter().map(Segment::as_key).collect();
        f.write_str(&parts.join("."))
    }
}

impl DocPath {
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parent path and last segment; None for the root.
    pub fn split_last(&self) -> Option<(DocPath, &Segment)> {
        let (last, parent) = self.segments.split_last()?;
        Some((
            DocPath {
                segments: parent.to_vec(),
            },
            last,
        ))
    }

    /// Follows the path without modifying anything.
    pub fn resolve<'a>(&self, root: &'a JsonValue) -> Option<&'a JsonValue> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| match (segment, node) {
                (Segment::Index(index), JsonValue::Array(_)) => node.get_index(*index),
                (segment, _) => node.get(&segment.as_key()),
            })
    }

    /// Follows the path, turning null nodes into objects or arrays and
    /// creating missing entries on the way.
    pub fn resolve_or_create<'a>(&self, root: &'a mut JsonValue) -> json_doc::Result<&'a mut JsonValue> {
        let mut node = root;
        for segment in &self.segments {
            node = match segment {
                Segment::Index(index) if !node.is_object() => node.slot(*index)?,
                segment => node.entry(&segment.as_key())?,
            };
        }
        Ok(node)
    }

    /// Removes the value at the path. None when nothing is stored there.
    pub fn remove(&self, root: &mut JsonValue) -> Option<JsonValue> {
        let (parent, last) = self.split_last()?;
        let mut node = root;
        for segment in &parent.segments {
            node = match segment {
                Segment::Index(index) if node.is_array() => node.get_index_mut(*index)?,
                segment => node.get_mut(&segment.as_key())?,
            };
        }
        match last {
            Segment::Index(index) if node.is_array() => node.remove_index(*index),
            segment => node.remove_key(&segment.as_key()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_doc::parse;

    fn path(text: &str) -> DocPath {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_segments() {
        assert!(path("").is_root());
        assert!(path(".").is_root());
        assert_eq!(path("users.0.name").to_string(), "users.0.name");
        assert!(matches!(
            "a..b".parse::<DocPath>(),
            Err(CliError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_resolve() {
        let doc = parse(r#"{"users":[{"name":"Ray"}],"7":"seven"}"#).unwrap();
        assert_eq!(path("users.0.name").resolve(&doc), Some(&JsonValue::from("Ray")));
        assert_eq!(path("7").resolve(&doc), Some(&JsonValue::from("seven")));
        assert_eq!(path(".").resolve(&doc), Some(&doc));
        assert!(path("users.1").resolve(&doc).is_none());
        assert!(path("users.name").resolve(&doc).is_none());
    }

    #[test]
    fn test_resolve_or_create_vivifies() {
        let mut doc = JsonValue::Null;
        *path("a.2.b").resolve_or_create(&mut doc).unwrap() = JsonValue::from(true);
        assert_eq!(json_doc::dump(&doc), r#"{"a":[null,null,{"b":true}]}"#);
    }

    #[test]
    fn test_resolve_or_create_numeric_key_on_object() {
        let mut doc = parse(r#"{"m":{}}"#).unwrap();
        *path("m.3").resolve_or_create(&mut doc).unwrap() = JsonValue::Int(1);
        assert_eq!(json_doc::dump(&doc), r#"{"m":{"3":1}}"#);
    }

    #[test]
    fn test_resolve_or_create_refuses_typed_nodes() {
        let mut doc = parse(r#"{"name":"Ray"}"#).unwrap();
        assert!(path("name.first").resolve_or_create(&mut doc).is_err());
        assert_eq!(doc["name"], "Ray");
    }

    #[test]
    fn test_remove() {
        let mut doc = parse(r#"{"a":[1,2,3],"b":{"c":true}}"#).unwrap();
        assert_eq!(path("a.1").remove(&mut doc), Some(JsonValue::Int(2)));
        assert_eq!(path("b.c").remove(&mut doc), Some(JsonValue::Bool(true)));
        assert_eq!(path("b.zz").remove(&mut doc), None);
        assert_eq!(path("x.y").remove(&mut doc), None);
        assert_eq!(path(".").remove(&mut doc), None);
        assert_eq!(json_doc::dump(&doc), r#"{"a":[1,3],"b":{}}"#);
    }
}
