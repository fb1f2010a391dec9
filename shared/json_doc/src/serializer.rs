//! Compact JSON text output.

use crate::coerce::format_double;
use crate::value::JsonValue;

/// Renders a document as compact JSON text.
///
/// No whitespace is emitted, object entries come out in key order, and
/// doubles are written with six fractional digits. String payloads are
/// written back exactly as they were stored, so text that came from
/// [`crate::parse`] reproduces its original escapes.
///
/// # Examples
///
/// ```
/// use json_doc::{dump, parse};
///
/// let doc = parse(r#"{ "b": [1, 2.5], "a": null }"#).unwrap();
/// assert_eq!(dump(&doc), r#"{"a":null,"b":[1,2.500000]}"#);
/// ```
pub fn dump(value: &JsonValue) -> String {
    let mut out = String::new();
    dump_into(value, &mut out);
    out
}

/// Appends the compact rendering of `value` to `out`.
pub fn dump_into(value: &JsonValue, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        JsonValue::Int(n) => out.push_str(&n.to_string()),
        JsonValue::Double(d) => out.push_str(&format_double(*d)),
        JsonValue::String(s) => write_raw_string(s, out),
        JsonValue::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                dump_into(item, out);
            }
            out.push(']');
        }
        JsonValue::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_raw_string(key, out);
                out.push(':');
                dump_into(item, out);
            }
            out.push('}');
        }
    }
}

fn write_raw_string(raw: &str, out: &mut String) {
    out.push('"');
    out.push_str(raw);
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_dump_scalars() {
        assert_eq!(dump(&JsonValue::Null), "null");
        assert_eq!(dump(&JsonValue::Bool(true)), "true");
        assert_eq!(dump(&JsonValue::Bool(false)), "false");
        assert_eq!(dump(&JsonValue::Int(-42)), "-42");
        assert_eq!(dump(&JsonValue::Double(42.0)), "42.000000");
        assert_eq!(dump(&JsonValue::from("hi")), r#""hi""#);
    }

    #[test]
    fn test_dump_non_finite_double() {
        assert_eq!(dump(&JsonValue::Double(f64::NAN)), "0.000000");
        assert_eq!(dump(&JsonValue::Double(f64::INFINITY)), "0.000000");
    }

    #[test]
    fn test_dump_empty_containers() {
        assert_eq!(dump(&JsonValue::array()), "[]");
        assert_eq!(dump(&JsonValue::object()), "{}");
    }

    #[test]
    fn test_dump_orders_keys() {
        let doc = parse(r#"{"z":1,"a":{"y":[],"b":{}}}"#).unwrap();
        assert_eq!(dump(&doc), r#"{"a":{"b":{},"y":[]},"z":1}"#);
    }

    #[test]
    fn test_dump_keeps_raw_escapes() {
        let source = r#"["line\nbreak","q\"uote","A"]"#;
        let doc = parse(source).unwrap();
        assert_eq!(dump(&doc), source);
    }

    #[test]
    fn test_dump_does_not_escape_stored_text() {
        // Values built in code are written as stored
        let value = JsonValue::from("a\"b");
        assert_eq!(dump(&value), "\"a\"b\"");
    }

    #[test]
    fn test_dump_into_appends() {
        let mut out = String::from("doc=");
        dump_into(&JsonValue::from(vec![JsonValue::Int(1)]), &mut out);
        assert_eq!(out, "doc=[1]");
    }

    #[test]
    fn test_display_matches_dump() {
        let doc = parse(r#"{"k":[true,null]}"#).unwrap();
        assert_eq!(doc.to_string(), dump(&doc));
        assert_eq!(format!("{}", doc), r#"{"k":[true,null]}"#);
    }
}
