//! Value iteration over arrays and objects.
//!
//! Both container kinds are walked through the same iterator type, which
//! yields the elements of an array or the values of an object in key order.
//! Scalars yield nothing.

use crate::value::JsonValue;
use std::collections::btree_map;
use std::slice;

/// Shared iterator over the children of a node.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

#[derive(Debug, Clone)]
enum IterInner<'a> {
    Array(slice::Iter<'a, JsonValue>),
    Object(btree_map::Values<'a, String, JsonValue>),
    Empty,
}

/// Mutable iterator over the children of a node.
#[derive(Debug)]
pub struct IterMut<'a> {
    inner: IterMutInner<'a>,
}

#[derive(Debug)]
enum IterMutInner<'a> {
    Array(slice::IterMut<'a, JsonValue>),
    Object(btree_map::ValuesMut<'a, String, JsonValue>),
    Empty,
}

impl JsonValue {
    pub fn iter(&self) -> Iter<'_> {
        let inner = match self {
            JsonValue::Array(arr) => IterInner::Array(arr.iter()),
            JsonValue::Object(map) => IterInner::Object(map.values()),
            _ => IterInner::Empty,
        };
        Iter { inner }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        let inner = match self {
            JsonValue::Array(arr) => IterMutInner::Array(arr.iter_mut()),
            JsonValue::Object(map) => IterMutInner::Object(map.values_mut()),
            _ => IterMutInner::Empty,
        };
        IterMut { inner }
    }

    /// Key/value pairs of an object node in key order; empty otherwise.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &JsonValue)> + '_ {
        self.as_object()
            .into_iter()
            .flat_map(|map| map.iter().map(|(key, value)| (key.as_str(), value)))
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a JsonValue;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Array(it) => it.next(),
            IterInner::Object(it) => it.next(),
            IterInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Array(it) => it.next_back(),
            IterInner::Object(it) => it.next_back(),
            IterInner::Empty => None,
        }
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        match &self.inner {
            IterInner::Array(it) => it.len(),
            IterInner::Object(it) => it.len(),
            IterInner::Empty => 0,
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut JsonValue;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterMutInner::Array(it) => it.next(),
            IterMutInner::Object(it) => it.next(),
            IterMutInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterMutInner::Array(it) => it.next_back(),
            IterMutInner::Object(it) => it.next_back(),
            IterMutInner::Empty => None,
        }
    }
}

impl ExactSizeIterator for IterMut<'_> {
    fn len(&self) -> usize {
        match &self.inner {
            IterMutInner::Array(it) => it.len(),
            IterMutInner::Object(it) => it.len(),
            IterMutInner::Empty => 0,
        }
    }
}

impl<'a> IntoIterator for &'a JsonValue {
    type Item = &'a JsonValue;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut JsonValue {
    type Item = &'a mut JsonValue;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use crate::value::JsonValue;

    #[test]
    fn test_array_iteration() {
        let doc = parse("[1,2,3]").unwrap();
        let sum: i64 = doc.iter().map(JsonValue::to_int).sum();
        assert_eq!(sum, 6);
        assert_eq!(doc.iter().len(), 3);
        assert_eq!(doc.iter().next_back(), Some(&JsonValue::Int(3)));
    }

    #[test]
    fn test_object_iteration_yields_values_in_key_order() {
        let doc = parse(r#"{"b":2,"a":1,"c":3}"#).unwrap();
        let values: Vec<i64> = doc.iter().map(JsonValue::to_int).collect();
        assert_eq!(values, vec![1, 2, 3]);

        let keys: Vec<&str> = doc.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scalar_iteration_is_empty() {
        assert_eq!(JsonValue::Int(5).iter().count(), 0);
        assert_eq!(JsonValue::from("abc").iter().len(), 0);
        assert_eq!(JsonValue::Int(5).entries().count(), 0);
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut doc = parse(r#"{"x":1,"y":2}"#).unwrap();
        for value in &mut doc {
            *value = JsonValue::from(value.to_int() * 10);
        }
        assert_eq!(doc["x"], 10i64);
        assert_eq!(doc["y"], 20i64);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let doc = parse(r#"["a","b"]"#).unwrap();
        let mut seen = Vec::new();
        for item in &doc {
            seen.push(item.to_text());
        }
        assert_eq!(seen, vec!["a", "b"]);
    }
}
