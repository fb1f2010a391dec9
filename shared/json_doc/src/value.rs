//! JSON document node representation.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::DivAssign;

/// Elements of an array node.
pub type Array = Vec<JsonValue>;

/// Entries of an object node, ordered by key.
pub type Object = BTreeMap<String, JsonValue>;

/// A node of a JSON document tree.
///
/// String payloads hold the text exactly as it appeared between the quotes of
/// the source document: escape sequences such as `\n` or `\u00e9` are kept
/// verbatim and only touched by [`JsonValue::to_text`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// JSON null: `null`
    #[default]
    Null,
    /// JSON boolean: `true` or `false`
    Bool(bool),
    /// Number without fraction or exponent: `42`
    Int(i64),
    /// Number with fraction or exponent: `4.2`, `42e1`
    Double(f64),
    /// JSON string: `"hello"`
    String(String),
    /// JSON array: `["item1", "item2"]`
    Array(Array),
    /// JSON object: `{"key": "value"}`
    Object(Object),
}

/// Discriminant of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Returns the lowercase name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Bool => "bool",
            JsonType::Int => "int",
            JsonType::Double => "double",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::dump(self))
    }
}

impl JsonValue {
    /// Creates the zero value of the given type.
    pub fn with_type(kind: JsonType) -> Self {
        match kind {
            JsonType::Null => JsonValue::Null,
            JsonType::Bool => JsonValue::Bool(false),
            JsonType::Int => JsonValue::Int(0),
            JsonType::Double => JsonValue::Double(0.0),
            JsonType::String => JsonValue::String(String::new()),
            JsonType::Array => JsonValue::Array(Array::new()),
            JsonType::Object => JsonValue::Object(Object::new()),
        }
    }

    /// Creates an empty array node.
    pub fn array() -> Self {
        JsonValue::Array(Array::new())
    }

    /// Creates an empty object node.
    pub fn object() -> Self {
        JsonValue::Object(Object::new())
    }

    /// Returns the discriminant of this node.
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Bool,
            JsonValue::Int(_) => JsonType::Int,
            JsonValue::Double(_) => JsonType::Double,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true for both integer and double nodes.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Int(_) | JsonValue::Double(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, JsonValue::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, JsonValue::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns the boolean payload if this is a JSON boolean, otherwise None.
    pub fn as_bool(&self) -> Option<bool> {
        if let JsonValue::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns the integer payload if this is an integer node, otherwise None.
    pub fn as_i64(&self) -> Option<i64> {
        if let JsonValue::Int(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Returns the double payload if this is a double node, otherwise None.
    pub fn as_f64(&self) -> Option<f64> {
        if let JsonValue::Double(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Returns the raw string payload if this is a JSON string, otherwise None.
    pub fn as_str(&self) -> Option<&str> {
        if let JsonValue::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Returns the array value if this is a JSON array, otherwise None.
    pub fn as_array(&self) -> Option<&Array> {
        if let JsonValue::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }

    /// Returns the mutable array value if this is a JSON array, otherwise None.
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        if let JsonValue::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }

    /// Returns the object value if this is a JSON object, otherwise None.
    pub fn as_object(&self) -> Option<&Object> {
        if let JsonValue::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Returns the mutable object value if this is a JSON object, otherwise None.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        if let JsonValue::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Number of bytes of a string, elements of an array or entries of an
    /// object. Zero for every other kind.
    pub fn len(&self) -> usize {
        match self {
            JsonValue::String(s) => s.len(),
            JsonValue::Array(arr) => arr.len(),
            JsonValue::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves the node out, leaving `Null` in its place.
    pub fn take(&mut self) -> JsonValue {
        std::mem::take(self)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Int(i64::from(value))
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Int(value)
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Int(i64::from(value))
    }
}

impl From<usize> for JsonValue {
    fn from(value: usize) -> Self {
        JsonValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::Double(f64::from(value))
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Double(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<&String> for JsonValue {
    fn from(value: &String) -> Self {
        JsonValue::String(value.clone())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Array> for JsonValue {
    fn from(value: Array) -> Self {
        JsonValue::Array(value)
    }
}

impl From<Object> for JsonValue {
    fn from(value: Object) -> Self {
        JsonValue::Object(value)
    }
}

/// Builds an array of strings.
impl From<Vec<String>> for JsonValue {
    fn from(value: Vec<String>) -> Self {
        JsonValue::Array(value.into_iter().map(JsonValue::String).collect())
    }
}

impl From<&[&str]> for JsonValue {
    fn from(value: &[&str]) -> Self {
        JsonValue::Array(value.iter().map(|s| JsonValue::from(*s)).collect())
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl FromIterator<JsonValue> for JsonValue {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, JsonValue)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        JsonValue::Object(iter.into_iter().collect())
    }
}

// Scalar comparisons only match numeric nodes; a string "5" is never 5.
impl PartialEq<i64> for JsonValue {
    fn eq(&self, other: &i64) -> bool {
        self.is_number() && self.to_int() == *other
    }
}

impl PartialEq<i32> for JsonValue {
    fn eq(&self, other: &i32) -> bool {
        self.is_number() && self.to_int() == i64::from(*other)
    }
}

impl PartialEq<f64> for JsonValue {
    fn eq(&self, other: &f64) -> bool {
        self.is_number() && (self.to_double() - other).abs() <= f64::EPSILON
    }
}

impl PartialEq<str> for JsonValue {
    fn eq(&self, other: &str) -> bool {
        self.is_string() && self.to_text() == other
    }
}

impl PartialEq<&str> for JsonValue {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for JsonValue {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

/// Divides a double node in place; other kinds are left untouched.
impl DivAssign<f64> for JsonValue {
    fn div_assign(&mut self, rhs: f64) {
        if let JsonValue::Double(d) = self {
            *d /= rhs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        let value = JsonValue::default();
        assert!(value.is_null());
        assert_eq!(value.json_type(), JsonType::Null);
    }

    #[test]
    fn test_with_type_zero_values() {
        assert_eq!(JsonValue::with_type(JsonType::Bool), JsonValue::Bool(false));
        assert_eq!(JsonValue::with_type(JsonType::Int), JsonValue::Int(0));
        assert_eq!(JsonValue::with_type(JsonType::Double), JsonValue::Double(0.0));
        assert!(JsonValue::with_type(JsonType::String).is_string());
        assert!(JsonValue::with_type(JsonType::Array).is_empty());
        assert!(JsonValue::with_type(JsonType::Object).is_object());
    }

    #[test]
    fn test_predicates() {
        assert!(JsonValue::from(3i64).is_number());
        assert!(JsonValue::from(3i64).is_int());
        assert!(!JsonValue::from(3i64).is_double());
        assert!(JsonValue::from(3.5).is_number());
        assert!(JsonValue::from(3.5).is_double());
        assert!(JsonValue::from("x").is_string());
        assert!(JsonValue::from(true).is_bool());
        assert!(JsonValue::array().is_array());
        assert!(JsonValue::object().is_object());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(JsonValue::from(7i32), JsonValue::Int(7));
        assert_eq!(JsonValue::from(7u32), JsonValue::Int(7));
        assert_eq!(JsonValue::from(7usize), JsonValue::Int(7));
        assert_eq!(JsonValue::from(None::<i64>), JsonValue::Null);
        assert_eq!(JsonValue::from(Some("a")), JsonValue::String("a".to_string()));

        let list = JsonValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], "b");
    }

    #[test]
    fn test_len_by_kind() {
        assert_eq!(JsonValue::from("hello").len(), 5);
        assert_eq!(JsonValue::from(vec![JsonValue::Null; 3]).len(), 3);
        assert_eq!(JsonValue::from(12i64).len(), 0);
        assert!(JsonValue::Null.is_empty());
    }

    #[test]
    fn test_numeric_equality() {
        assert!(JsonValue::Int(5) == 5i64);
        assert!(JsonValue::Double(5.9) == 5i64);
        assert!(JsonValue::Double(0.1 + 0.2) == 0.3);
        assert!(JsonValue::Int(2) == 2.0);
        assert!(JsonValue::from("5") != 5i64);
        assert!(JsonValue::Null != 0i32);
    }

    #[test]
    fn test_structural_equality_is_exact() {
        assert_ne!(JsonValue::Int(1), JsonValue::Double(1.0));
        assert_ne!(JsonValue::Double(0.1 + 0.2), JsonValue::Double(0.3));
        assert_eq!(
            JsonValue::from(vec![JsonValue::Int(1)]),
            JsonValue::from(vec![JsonValue::Int(1)])
        );
    }

    #[test]
    fn test_take_leaves_null() {
        let mut value = JsonValue::from(vec![JsonValue::Int(1), JsonValue::Int(2)]);
        let moved = value.take();
        assert!(value.is_null());
        assert_eq!(moved.len(), 2);
    }

    #[test]
    fn test_div_assign() {
        let mut value = JsonValue::Double(9.0);
        value /= 2.0;
        assert_eq!(value, JsonValue::Double(4.5));

        let mut int = JsonValue::Int(9);
        int /= 2.0;
        assert_eq!(int, JsonValue::Int(9));
    }

    #[test]
    fn test_collect_into_nodes() {
        let array: JsonValue = (1..=3).map(|n: i64| JsonValue::from(n)).collect();
        assert_eq!(array.len(), 3);

        let object: JsonValue = vec![("k".to_string(), JsonValue::Bool(true))]
            .into_iter()
            .collect();
        assert!(object.is_object());
    }
}
