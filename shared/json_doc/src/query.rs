//! Lookup helpers and array transforms.

use crate::value::{Array, JsonValue};

impl JsonValue {
    /// Tests whether `key` is present.
    ///
    /// Objects check their keys, strings look for a substring and arrays look
    /// for a string element equal to `key`. Other kinds never contain anything.
    pub fn contains(&self, key: &str) -> bool {
        match self {
            JsonValue::Object(map) => map.contains_key(key),
            JsonValue::String(s) => s.contains(key),
            JsonValue::Array(arr) => arr.iter().any(|item| item == key),
            _ => false,
        }
    }

    /// Tests the keys one after another and stops at the first hit.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_doc::parse;
    ///
    /// let doc = parse(r#"{"nickname":"Ray"}"#).unwrap();
    /// assert!(doc.contains_any(["name", "nickname"]));
    /// assert!(!doc.contains_any(["age"]));
    /// ```
    pub fn contains_any<I, S>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().any(|key| self.contains(key.as_ref()))
    }

    /// Copy of the object entry stored under `key`, or `Null`.
    pub fn value(&self, key: &str) -> JsonValue {
        self.get(key).cloned().unwrap_or_default()
    }

    /// Copy of the entry for the first key present in the object, or `Null`.
    pub fn value_of_any<I, S>(&self, keys: I) -> JsonValue
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .find_map(|key| self.get(key.as_ref()).cloned())
            .unwrap_or_default()
    }

    /// Copy of the object entry stored under `key`, or `default`.
    pub fn value_or(&self, key: &str, default: impl Into<JsonValue>) -> JsonValue {
        match self.get(key) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Position of the first array element equal to `needle`, or `-1` when
    /// there is none or the node is not an array.
    pub fn index_of<T>(&self, needle: &T) -> i64
    where
        T: ?Sized,
        JsonValue: PartialEq<T>,
    {
        self.as_array()
            .and_then(|arr| arr.iter().position(|item| item == needle))
            .map_or(-1, |index| index as i64)
    }

    /// New array with `f` applied to each element. `Null` for non-arrays.
    pub fn map<F>(&self, f: F) -> JsonValue
    where
        F: FnMut(&JsonValue) -> JsonValue,
    {
        match self {
            JsonValue::Array(arr) => JsonValue::Array(arr.iter().map(f).collect()),
            _ => JsonValue::Null,
        }
    }

    /// Like [`JsonValue::map`], also passing the element index.
    pub fn map_indexed<F>(&self, mut f: F) -> JsonValue
    where
        F: FnMut(&JsonValue, usize) -> JsonValue,
    {
        match self {
            JsonValue::Array(arr) => {
                let mut result = Array::with_capacity(arr.len());
                for (index, item) in arr.iter().enumerate() {
                    result.push(f(item, index));
                }
                JsonValue::Array(result)
            }
            _ => JsonValue::Null,
        }
    }

    /// New array with the elements accepted by `predicate`. `Null` for
    /// non-arrays.
    pub fn filter<P>(&self, mut predicate: P) -> JsonValue
    where
        P: FnMut(&JsonValue) -> bool,
    {
        match self {
            JsonValue::Array(arr) => JsonValue::Array(
                arr.iter().filter(|item| predicate(item)).cloned().collect(),
            ),
            _ => JsonValue::Null,
        }
    }
}
