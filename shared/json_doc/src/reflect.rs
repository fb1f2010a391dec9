//! Mapping between Rust types and documents.
//!
//! [`ToJson`] builds a node from a value and [`FromJson`] reads one back.
//! Reading is lenient the same way the coercing getters are: a string field
//! holding `"42"` fills an integer member. Only structural mismatches, such
//! as an array where an object is expected, are reported as errors.
//!
//! Rust strings hold decoded text while document strings hold raw escaped
//! text, so the `String` impls translate between the two with
//! [`encode_str`] and [`decode_str`].

use crate::error::{JsonError, Result};
use crate::parser::parse;
use crate::serializer::dump;
use crate::value::{JsonValue, Object};
use std::collections::{BTreeMap, HashMap};

/// Trait for types that can be written into a document.
pub trait ToJson {
    fn to_json(&self) -> JsonValue;
}

/// Trait for types that can be read back from a document.
pub trait FromJson: Sized {
    fn from_json(value: &JsonValue) -> Result<Self>;
}

/// Renders a value as compact JSON text.
pub fn to_string<T: ToJson + ?Sized>(value: &T) -> String {
    dump(&value.to_json())
}

/// Parses JSON text and maps it onto `T`.
///
/// # Examples
///
/// ```
/// let tags: Vec<String> = json_doc::from_str(r#"["a","b"]"#).unwrap();
/// assert_eq!(tags, vec!["a", "b"]);
/// ```
pub fn from_str<T: FromJson>(text: &str) -> Result<T> {
    T::from_json(&parse(text)?)
}

/// Escapes text so it can be stored as a raw string payload.
pub fn encode_str(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            c if (c as u32) < 0x20 => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result
}

/// Resolves the escape sequences of a raw string payload.
///
/// Malformed `\u` sequences and unpaired surrogates become U+FFFD; any other
/// unknown escape yields the escaped character itself.
pub fn decode_str(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('b') => result.push('\x08'),
            Some('f') => result.push('\x0C'),
            Some('u') => result.push(decode_unicode_escape(&mut chars)),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    result
}

fn read_hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}

fn decode_unicode_escape(chars: &mut std::str::Chars<'_>) -> char {
    let Some(first) = read_hex4(chars) else {
        return char::REPLACEMENT_CHARACTER;
    };

    if (0xD800..0xDC00).contains(&first) {
        // High surrogate, a low one must follow as another \u escape
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(second) = read_hex4(&mut lookahead) {
                if (0xDC00..0xE000).contains(&second) {
                    *chars = lookahead;
                    let combined = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
                    return char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER);
                }
            }
        }
        return char::REPLACEMENT_CHARACTER;
    }

    char::from_u32(first).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn mismatch(expected: &str, value: &JsonValue) -> JsonError {
    JsonError::TypeMismatch(format!("expected {}, found {}", expected, value.json_type()))
}

fn scalar<'a>(expected: &str, value: &'a JsonValue) -> Result<&'a JsonValue> {
    match value {
        JsonValue::Array(_) | JsonValue::Object(_) => Err(mismatch(expected, value)),
        _ => Ok(value),
    }
}

impl ToJson for JsonValue {
    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

impl FromJson for JsonValue {
    fn from_json(value: &JsonValue) -> Result<Self> {
        Ok(value.clone())
    }
}

impl ToJson for str {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(encode_str(self))
    }
}

impl ToJson for String {
    fn to_json(&self) -> JsonValue {
        self.as_str().to_json()
    }
}

impl FromJson for String {
    fn from_json(value: &JsonValue) -> Result<Self> {
        match scalar("string", value)? {
            JsonValue::String(raw) => Ok(decode_str(raw)),
            other => Ok(other.to_text()),
        }
    }
}

impl ToJson for bool {
    fn to_json(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

impl FromJson for bool {
    fn from_json(value: &JsonValue) -> Result<Self> {
        Ok(scalar("bool", value)?.to_bool())
    }
}

macro_rules! reflect_signed {
    ($($ty:ty),*) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> JsonValue {
                    JsonValue::Int(i64::from(*self))
                }
            }

            impl FromJson for $ty {
                fn from_json(value: &JsonValue) -> Result<Self> {
                    let wide = scalar("number", value)?.to_int();
                    Ok(wide.clamp(i64::from(<$ty>::MIN), i64::from(<$ty>::MAX)) as $ty)
                }
            }
        )*
    };
}

reflect_signed!(i8, i16, i32, i64);

macro_rules! reflect_unsigned {
    ($($ty:ty),*) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> JsonValue {
                    JsonValue::Int(i64::try_from(*self).unwrap_or(i64::MAX))
                }
            }

            impl FromJson for $ty {
                fn from_json(value: &JsonValue) -> Result<Self> {
                    let wide = scalar("number", value)?.to_int().max(0);
                    Ok(<$ty>::try_from(wide).unwrap_or(<$ty>::MAX))
                }
            }
        )*
    };
}

reflect_unsigned!(u8, u16, u32, u64, usize);

impl ToJson for f64 {
    fn to_json(&self) -> JsonValue {
        JsonValue::Double(*self)
    }
}

impl FromJson for f64 {
    fn from_json(value: &JsonValue) -> Result<Self> {
        Ok(scalar("number", value)?.to_double())
    }
}

impl ToJson for f32 {
    fn to_json(&self) -> JsonValue {
        JsonValue::Double(f64::from(*self))
    }
}

impl FromJson for f32 {
    fn from_json(value: &JsonValue) -> Result<Self> {
        Ok(scalar("number", value)?.to_double() as f32)
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> JsonValue {
        match self {
            Some(v) => v.to_json(),
            None => JsonValue::Null,
        }
    }
}

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &JsonValue) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_json(value).map(Some)
        }
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> JsonValue {
        self.as_slice().to_json()
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(Vec::new()),
            JsonValue::Array(arr) => arr.iter().map(T::from_json).collect(),
            other => Err(mismatch("array", other)),
        }
    }
}

fn object_to_json<'a, V, I>(entries: I) -> JsonValue
where
    V: ToJson + 'a,
    I: Iterator<Item = (&'a String, &'a V)>,
{
    let map: Object = entries.map(|(k, v)| (encode_str(k), v.to_json())).collect();
    JsonValue::Object(map)
}

fn object_entries<V: FromJson>(value: &JsonValue) -> Result<Vec<(String, V)>> {
    match value {
        JsonValue::Null => Ok(Vec::new()),
        JsonValue::Object(map) => map
            .iter()
            .map(|(k, v)| Ok((decode_str(k), V::from_json(v)?)))
            .collect(),
        other => Err(mismatch("object", other)),
    }
}

impl<V: ToJson> ToJson for BTreeMap<String, V> {
    fn to_json(&self) -> JsonValue {
        object_to_json(self.iter())
    }
}

impl<V: FromJson> FromJson for BTreeMap<String, V> {
    fn from_json(value: &JsonValue) -> Result<Self> {
        Ok(object_entries(value)?.into_iter().collect())
    }
}

impl<V: ToJson> ToJson for HashMap<String, V> {
    fn to_json(&self) -> JsonValue {
        object_to_json(self.iter())
    }
}

impl<V: FromJson> FromJson for HashMap<String, V> {
    fn from_json(value: &JsonValue) -> Result<Self> {
        Ok(object_entries(value)?.into_iter().collect())
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_escapes_specials() {
        assert_eq!(encode_str("a\"b\\c"), r#"a\"b\\c"#);
        assert_eq!(encode_str("line\nnext\ttab"), r"line\nnext\ttab");
        assert_eq!(encode_str("\x01"), r"\u0001");
        assert_eq!(encode_str("héllo"), "héllo");
    }

    #[test]
    fn test_decode_named_escapes() {
        assert_eq!(decode_str(r#"say \"hi\""#), "say \"hi\"");
        assert_eq!(decode_str(r"a\\b\/c"), "a\\b/c");
        assert_eq!(decode_str(r"\b\f\n\r\t"), "\x08\x0C\n\r\t");
        assert_eq!(decode_str(r"odd\q"), "oddq");
        assert_eq!(decode_str("end\\"), "end\\");
    }

    #[test]
    fn test_decode_unicode_escapes() {
        let esc = "\\u";
        assert_eq!(decode_str(&format!("caf{}00e9", esc)), "café");
        assert_eq!(decode_str(&format!("{}d83d{}de00", esc, esc)), "\u{1F600}");
        assert_eq!(decode_str(&format!("{}d83d!", esc)), "\u{FFFD}!");
        assert_eq!(decode_str(&format!("{}zz", esc)), "\u{FFFD}");
    }

    #[test]
    fn test_string_round_trip_through_text() {
        let original = "tab\there \"quoted\" back\\slash\nnewline".to_string();
        let text = to_string(&original);
        let back: String = from_str(&text).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_lenient_scalars() {
        let n: i32 = FromJson::from_json(&JsonValue::from("42")).unwrap();
        assert_eq!(n, 42);

        let s: String = FromJson::from_json(&JsonValue::Int(7)).unwrap();
        assert_eq!(s, "7");

        let b: bool = FromJson::from_json(&JsonValue::Int(1)).unwrap();
        assert!(b);

        let d: f64 = FromJson::from_json(&JsonValue::from("2.5")).unwrap();
        assert_eq!(d, 2.5);
    }

    #[test]
    fn test_numeric_saturation() {
        let small: u8 = FromJson::from_json(&JsonValue::Int(300)).unwrap();
        assert_eq!(small, u8::MAX);

        let unsigned: u32 = FromJson::from_json(&JsonValue::Int(-5)).unwrap();
        assert_eq!(unsigned, 0);

        let narrow: i16 = FromJson::from_json(&JsonValue::Int(-100_000)).unwrap();
        assert_eq!(narrow, i16::MIN);
    }

    #[test]
    fn test_structural_mismatch() {
        let result: Result<i32> = FromJson::from_json(&JsonValue::array());
        assert!(matches!(result, Err(JsonError::TypeMismatch(_))));

        let result: Result<Vec<i32>> = FromJson::from_json(&JsonValue::object());
        assert!(result.is_err());

        let result: Result<HashMap<String, i32>> = FromJson::from_json(&JsonValue::Int(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_option_and_collections() {
        let none: Option<i64> = FromJson::from_json(&JsonValue::Null).unwrap();
        assert_eq!(none, None);

        let list: Vec<Vec<i64>> = from_str("[[1,2],[3]]").unwrap();
        assert_eq!(list, vec![vec![1, 2], vec![3]]);

        let empty: Vec<String> = FromJson::from_json(&JsonValue::Null).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_maps_sorted_in_output() {
        let mut map = HashMap::new();
        map.insert("b".to_string(), 2i64);
        map.insert("a".to_string(), 1i64);
        assert_eq!(to_string(&map), r#"{"a":1,"b":2}"#);

        let back: BTreeMap<String, i64> = from_str(r#"{"x":1,"y":2}"#).unwrap();
        assert_eq!(back.get("y"), Some(&2));
    }

    #[test]
    fn test_map_keys_are_escaped() {
        let mut map = BTreeMap::new();
        map.insert("say \"hi\"".to_string(), true);
        let text = to_string(&map);
        assert_eq!(text, r#"{"say \"hi\"":true}"#);

        let back: BTreeMap<String, bool> = from_str(&text).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_from_str_malformed() {
        let result: Result<String> = from_str(r#"{ "incomplete": "#);
        assert!(result.is_err());
    }
}
