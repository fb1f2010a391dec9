//! Coercing getters.
//!
//! Every getter here succeeds: a node that cannot be converted to the
//! requested type yields the caller's default (or the type's zero value for
//! the short forms).

use crate::value::{Array, JsonValue, Object};

impl JsonValue {
    /// Truthiness of the node.
    ///
    /// Null is false, strings and containers are true when non-empty, numbers
    /// are true when they are further than `f64::EPSILON` from zero. The
    /// tolerance rule for doubles is provisional.
    pub fn to_bool(&self) -> bool {
        match self {
            JsonValue::Null => false,
            JsonValue::Bool(b) => *b,
            JsonValue::Int(n) => *n != 0,
            JsonValue::Double(_) => self.to_double().abs() > f64::EPSILON,
            JsonValue::String(_) | JsonValue::Array(_) | JsonValue::Object(_) => !self.is_empty(),
        }
    }

    /// Integer view of the node, or `0`.
    pub fn to_int(&self) -> i64 {
        self.to_int_or(0)
    }

    /// Integer view of the node.
    ///
    /// Doubles truncate toward zero, strings are read like `strtoll` (leading
    /// blanks, optional sign, digits, anything after is ignored).
    pub fn to_int_or(&self, default: i64) -> i64 {
        match self {
            JsonValue::Int(n) => *n,
            // `as` saturates, and to_double already maps NaN/inf to zero
            JsonValue::Double(_) => self.to_double() as i64,
            JsonValue::String(_) => parse_leading_int(&self.to_text()).unwrap_or(default),
            _ => default,
        }
    }

    /// Narrowing form of [`JsonValue::to_int`], saturating at the `i32` bounds.
    pub fn to_int32(&self) -> i32 {
        self.to_int32_or(0)
    }

    pub fn to_int32_or(&self, default: i32) -> i32 {
        let wide = self.to_int_or(i64::from(default));
        wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Floating point view of the node, or `0.0`.
    pub fn to_double(&self) -> f64 {
        self.to_double_or(0.0)
    }

    /// Floating point view of the node.
    ///
    /// A stored NaN or infinity reads as `0.0` so it can never leak into a
    /// serialized document.
    pub fn to_double_or(&self, default: f64) -> f64 {
        match self {
            JsonValue::Int(n) => *n as f64,
            JsonValue::Double(d) if d.is_finite() => *d,
            JsonValue::Double(_) => 0.0,
            JsonValue::String(_) => parse_leading_float(&self.to_text()).unwrap_or(default),
            _ => default,
        }
    }

    /// Text view of the node, or an empty string.
    pub fn to_text(&self) -> String {
        self.to_text_or("")
    }

    /// Text view of the node.
    ///
    /// Strings come back with quotes, backslashes, carriage returns,
    /// backspaces and form feeds escaped, and with raw tab characters
    /// removed. Numbers and booleans are formatted, containers and null give
    /// the default.
    pub fn to_text_or(&self, default: &str) -> String {
        match self {
            JsonValue::String(s) => escape_text(s),
            JsonValue::Bool(b) => b.to_string(),
            JsonValue::Int(n) => n.to_string(),
            JsonValue::Double(_) => format_double(self.to_double()),
            _ => default.to_string(),
        }
    }

    /// Copy of the elements, or an empty array.
    pub fn to_array(&self) -> Array {
        self.to_array_or(Array::new())
    }

    pub fn to_array_or(&self, default: Array) -> Array {
        match self {
            JsonValue::Array(arr) => arr.clone(),
            _ => default,
        }
    }

    /// Copy of the entries, or an empty object.
    pub fn to_object(&self) -> Object {
        self.to_object_or(Object::new())
    }

    pub fn to_object_or(&self, default: Object) -> Object {
        match self {
            JsonValue::Object(map) => map.clone(),
            _ => default,
        }
    }
}

/// Fixed six-decimal rendering shared by `to_text` and the serializer.
pub(crate) fn format_double(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{:.6}", value)
}

/// Escapes a raw string payload for display.
///
/// Newlines pass through untouched and tabs are dropped.
pub(crate) fn escape_text(raw: &str) -> String {
    if raw == "\"\"" {
        return String::new();
    }

    let mut result = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\r' => result.push_str("\\r"),
            '\t' => {}
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            ch => result.push(ch),
        }
    }
    result
}

fn skip_c_whitespace(text: &str) -> &str {
    text.trim_start_matches([' ', '\t', '\n', '\r', '\x0B', '\x0C'])
}

/// Reads the integer at the start of `text`, saturating on overflow.
pub(crate) fn parse_leading_int(text: &str) -> Option<i64> {
    let text = skip_c_whitespace(text);
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    let literal = &text[..end];
    match literal.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if literal.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Reads the decimal floating point number at the start of `text`.
///
/// Non-finite results are reported as `0.0`.
pub(crate) fn parse_leading_float(text: &str) -> Option<f64> {
    let text = skip_c_whitespace(text);
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let lowered = text[end..].to_ascii_lowercase();
    if lowered.starts_with("inf") || lowered.starts_with("nan") {
        return Some(0.0);
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // The exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    let literal = text[..end].trim_end_matches('.');
    let value = literal.parse::<f64>().ok()?;
    Some(if value.is_finite() { value } else { 0.0 })
}
