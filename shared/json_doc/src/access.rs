//! Mutation and subscript access.
//!
//! A `Null` node turns into an object or an array the first time it is
//! written through a key or an index. Nodes that already have another type
//! are never reinterpreted: the explicit accessors return
//! [`JsonError::TypeMismatch`] and the `IndexMut` operators panic.

use crate::error::{JsonError, Result};
use crate::value::JsonValue;
use std::ops::{Index, IndexMut};

static NULL: JsonValue = JsonValue::Null;

impl JsonValue {
    /// Returns the value stored under `key`, turning a `Null` node into an
    /// object and inserting `Null` for a missing key.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when the node is neither null nor an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_doc::JsonValue;
    ///
    /// let mut doc = JsonValue::Null;
    /// *doc.entry("name").unwrap() = "Ray".into();
    /// assert!(doc.is_object());
    /// assert_eq!(doc["name"], "Ray");
    /// ```
    pub fn entry(&mut self, key: &str) -> Result<&mut JsonValue> {
        if self.is_null() {
            *self = JsonValue::object();
        }
        match self {
            JsonValue::Object(map) => Ok(map.entry(key.to_string()).or_default()),
            other => Err(JsonError::TypeMismatch(format!(
                "cannot use key '{}' on a {} value",
                key,
                other.json_type()
            ))),
        }
    }

    /// Returns the element at `index`, turning a `Null` node into an array and
    /// growing the array with `Null` elements when needed.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when the node is neither null nor an array.
    pub fn slot(&mut self, index: usize) -> Result<&mut JsonValue> {
        if self.is_null() {
            *self = JsonValue::array();
        }
        match self {
            JsonValue::Array(arr) => {
                if index >= arr.len() {
                    arr.resize_with(index + 1, JsonValue::default);
                }
                Ok(&mut arr[index])
            }
            other => Err(JsonError::TypeMismatch(format!(
                "cannot use index {} on a {} value",
                index,
                other.json_type()
            ))),
        }
    }

    /// Appends an element, turning a `Null` node into an array.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when the node is neither null nor an array.
    pub fn push(&mut self, value: impl Into<JsonValue>) -> Result<()> {
        if self.is_null() {
            *self = JsonValue::array();
        }
        match self {
            JsonValue::Array(arr) => {
                arr.push(value.into());
                Ok(())
            }
            other => Err(JsonError::TypeMismatch(format!(
                "cannot push onto a {} value",
                other.json_type()
            ))),
        }
    }

    /// Stores `value` under `key`, turning a `Null` node into an object.
    /// Returns the value previously stored under that key.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when the node is neither null nor an object.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> Result<Option<JsonValue>> {
        if self.is_null() {
            *self = JsonValue::object();
        }
        match self {
            JsonValue::Object(map) => Ok(map.insert(key.into(), value.into())),
            other => Err(JsonError::TypeMismatch(format!(
                "cannot insert into a {} value",
                other.json_type()
            ))),
        }
    }

    /// Removes an object entry. None when the key is absent or the node is
    /// not an object.
    pub fn remove_key(&mut self, key: &str) -> Option<JsonValue> {
        self.as_object_mut()?.remove(key)
    }

    /// Removes an array element, shifting the following ones down. None when
    /// the index is out of range or the node is not an array.
    pub fn remove_index(&mut self, index: usize) -> Option<JsonValue> {
        let arr = self.as_array_mut()?;
        if index < arr.len() {
            Some(arr.remove(index))
        } else {
            None
        }
    }

    /// Drops the payload and resets the node to `Null`.
    pub fn clear(&mut self) {
        *self = JsonValue::Null;
    }

    /// Reserves capacity on an array node; no-op for other kinds.
    pub fn reserve(&mut self, additional: usize) {
        if let Some(arr) = self.as_array_mut() {
            arr.reserve(additional);
        }
    }

    /// Returns the value stored under `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        self.as_object_mut()?.get_mut(key)
    }

    /// Returns the element at `index` if this is an array.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array()?.get(index)
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
        self.as_array_mut()?.get_mut(index)
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// Returns `NotAnArray` or `IndexOutOfRange`.
    pub fn at(&self, index: usize) -> Result<&JsonValue> {
        let arr = self.as_array().ok_or(JsonError::NotAnArray)?;
        arr.get(index)
            .ok_or(JsonError::IndexOutOfRange(index, arr.len()))
    }

    /// Copy of the element at `index`, or `default` when there is none.
    pub fn at_or(&self, index: usize, default: impl Into<JsonValue>) -> JsonValue {
        match self.at(index) {
            Ok(value) => value.clone(),
            Err(_) => default.into(),
        }
    }

    /// Sorted keys of an object node; empty for every other kind.
    pub fn object_keys(&self) -> Vec<String> {
        self.as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Index<&str> for JsonValue {
    type Output = JsonValue;

    /// Missing keys and non-object nodes read as `Null`.
    fn index(&self, key: &str) -> &JsonValue {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for JsonValue {
    type Output = JsonValue;

    /// Missing elements and non-array nodes read as `Null`.
    fn index(&self, index: usize) -> &JsonValue {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for JsonValue {
    /// Panics when the node is neither null nor an object.
    fn index_mut(&mut self, key: &str) -> &mut JsonValue {
        match self.entry(key) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<usize> for JsonValue {
    /// Panics when the node is neither null nor an array.
    fn index_mut(&mut self, index: usize) -> &mut JsonValue {
        match self.slot(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}
