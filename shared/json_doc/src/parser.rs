//! JSON parsing implementation.

use crate::error::{JsonError, Result};
use crate::options::ParseOptions;
use crate::value::{Array, JsonValue, Object};
use std::str::FromStr;

/// Tokens accepted where a number is expected. They always read as `0`.
const NON_FINITE_TOKENS: [&str; 4] = ["infinity", "inf", "-nan(ind)", "nan"];

/// Parses JSON text into a document with the default options.
///
/// An empty input is not an error and yields `Null`. Any malformed token
/// fails the whole parse; no partially built tree is ever returned.
///
/// String payloads are kept exactly as written between the quotes, escape
/// sequences included.
///
/// # Errors
///
/// Returns a `JsonError` if the input is not valid JSON.
///
/// # Examples
///
/// ```
/// use json_doc::parse;
///
/// let doc = parse(r#"{"name":"Ray","age":20,"tags":["a","b"]}"#).unwrap();
/// assert_eq!(doc["age"].to_int(), 20);
/// assert_eq!(doc["tags"].len(), 2);
/// assert!(parse(r#"{"a":}"#).is_err());
/// ```
pub fn parse(input: &str) -> Result<JsonValue> {
    parse_with(input, &ParseOptions::default())
}

/// Parses with explicit options.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<JsonValue> {
    run(input, options, None)
}

/// Parses with explicit options, reporting progress in promille (0 to 1000)
/// each time the estimate changes.
pub fn parse_with_progress<F>(input: &str, options: &ParseOptions, mut progress: F) -> Result<JsonValue>
where
    F: FnMut(u32),
{
    let callback: &mut dyn FnMut(u32) = &mut progress;
    run(input, options, Some(callback))
}

fn run(
    input: &str,
    options: &ParseOptions,
    progress: Option<&mut dyn FnMut(u32)>,
) -> Result<JsonValue> {
    if input.is_empty() {
        return Ok(JsonValue::Null);
    }

    let mut parser = JsonParser::new(input, options, progress);
    let value = parser.parse_value()?;

    if !options.allow_trailing {
        parser.skip_whitespace();
        if !parser.is_at_end() {
            return Err(JsonError::TrailingCharacters(parser.position));
        }
    }

    parser.finish_progress();
    Ok(value)
}

impl JsonValue {
    /// Shorthand for [`parse`].
    pub fn parse(input: &str) -> Result<JsonValue> {
        parse(input)
    }
}

impl FromStr for JsonValue {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Internal recursive-descent parser
struct JsonParser<'a, 'p> {
    input: &'a str,
    bytes: &'a [u8],
    position: usize,
    depth: usize,
    max_depth: usize,
    progress: Option<&'p mut dyn FnMut(u32)>,
    last_progress: u32,
}

impl<'a, 'p> JsonParser<'a, 'p> {
    fn new(input: &'a str, options: &ParseOptions, progress: Option<&'p mut dyn FnMut(u32)>) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            position: 0,
            depth: 0,
            max_depth: options.effective_max_depth(),
            progress,
            last_progress: 0,
        }
    }

    fn parse_value(&mut self) -> Result<JsonValue> {
        self.report_progress();
        self.skip_whitespace();

        let Some(byte) = self.peek() else {
            return Err(JsonError::UnexpectedEndOfInput);
        };

        match byte {
            b'{' => self.nested(Self::parse_object),
            b'[' => self.nested(Self::parse_array),
            b'"' => self.parse_string().map(JsonValue::String),
            b't' | b'f' => self.parse_bool(),
            b'n' if self.starts_with("nan") => self.parse_number(),
            b'n' => self.parse_null(),
            b'-' | b'0'..=b'9' | b'i' => self.parse_number(),
            _ => Err(JsonError::UnexpectedCharacter(
                self.current_char(),
                self.position,
            )),
        }
    }

    /// Runs a container production one level deeper.
    fn nested(&mut self, production: fn(&mut Self) -> Result<JsonValue>) -> Result<JsonValue> {
        if self.depth >= self.max_depth {
            return Err(JsonError::NestingTooDeep(self.max_depth));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    fn parse_object(&mut self) -> Result<JsonValue> {
        self.expect_byte(b'{')?;
        let mut map = Object::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.position += 1;
            return Ok(JsonValue::Object(map));
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'"') => {}
                Some(_) => return Err(JsonError::ExpectedKey(self.position)),
                None => return Err(JsonError::UnexpectedEndOfInput),
            }
            let key = self.parse_string()?;

            if self.next_token()? != b':' {
                return Err(JsonError::ExpectedColon);
            }

            // Last occurrence of a duplicated key wins
            let value = self.parse_value()?;
            map.insert(key, value);

            match self.next_token()? {
                b',' => continue,
                b'}' => break,
                _ => return Err(JsonError::ExpectedCommaOrClosingBracket),
            }
        }

        Ok(JsonValue::Object(map))
    }

    fn parse_array(&mut self) -> Result<JsonValue> {
        self.expect_byte(b'[')?;
        let mut array = Array::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.position += 1;
            return Ok(JsonValue::Array(array));
        }

        loop {
            array.push(self.parse_value()?);

            match self.next_token()? {
                b',' => continue,
                b']' => break,
                _ => return Err(JsonError::ExpectedCommaOrClosingBracket),
            }
        }

        Ok(JsonValue::Array(array))
    }

    /// Returns the raw text between the quotes.
    ///
    /// The character after a backslash is skipped whatever it is, and `\u`
    /// skips four more without decoding them.
    fn parse_string(&mut self) -> Result<String> {
        self.expect_byte(b'"')?;
        let start = self.position;

        loop {
            let Some(byte) = self.peek() else {
                return Err(JsonError::UnterminatedString);
            };
            self.position += 1;

            match byte {
                b'"' => break,
                b'\\' => {
                    let Some(escaped) = self.peek() else {
                        return Err(JsonError::UnterminatedString);
                    };
                    self.position += 1;
                    if escaped == b'u' {
                        self.position += 4;
                    }
                }
                _ => {}
            }
        }

        // Both ends sit next to an ASCII quote, so they are char boundaries
        Ok(self.input[start..self.position - 1].to_string())
    }

    fn parse_number(&mut self) -> Result<JsonValue> {
        let start = self.position;

        for token in NON_FINITE_TOKENS {
            if self.starts_with(token) {
                self.position += token.len();
                return Ok(JsonValue::Int(0));
            }
        }

        if self.peek() == Some(b'-') {
            self.position += 1;
        }

        // Integer part
        match self.peek() {
            Some(b'0') => self.position += 1,
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => {
                return Err(JsonError::InvalidNumber(format!(
                    "expected digit at position {}",
                    self.position
                )));
            }
        }

        let mut is_double = false;

        // Fractional part
        if self.peek() == Some(b'.') {
            self.position += 1;
            if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
                return Err(JsonError::InvalidNumber(format!(
                    "expected digit after decimal point in '{}'",
                    &self.input[start..self.position]
                )));
            }
            self.skip_digits();
            is_double = true;
        }

        // Exponent part
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.position += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.position += 1;
            }
            if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
                return Err(JsonError::InvalidNumber(format!(
                    "expected digit in exponent of '{}'",
                    &self.input[start..self.position]
                )));
            }
            self.skip_digits();
            is_double = true;
        }

        let literal = &self.input[start..self.position];
        if is_double {
            let value = literal
                .parse::<f64>()
                .map_err(|_| JsonError::InvalidNumber(literal.to_string()))?;
            // Overflowing exponents must not smuggle infinity into the tree
            Ok(JsonValue::Double(if value.is_finite() { value } else { 0.0 }))
        } else {
            let value = match literal.parse::<i64>() {
                Ok(n) => n,
                Err(_) if literal.starts_with('-') => i64::MIN,
                Err(_) => i64::MAX,
            };
            Ok(JsonValue::Int(value))
        }
    }

    fn parse_bool(&mut self) -> Result<JsonValue> {
        if self.starts_with("true") {
            self.position += 4;
            Ok(JsonValue::Bool(true))
        } else if self.starts_with("false") {
            self.position += 5;
            Ok(JsonValue::Bool(false))
        } else {
            Err(self.invalid_literal())
        }
    }

    fn parse_null(&mut self) -> Result<JsonValue> {
        if self.starts_with("null") {
            self.position += 4;
            Ok(JsonValue::Null)
        } else {
            Err(self.invalid_literal())
        }
    }

    fn invalid_literal(&self) -> JsonError {
        let found: String = self.input[self.position..].chars().take(5).collect();
        JsonError::InvalidLiteral(format!("'{}' at position {}", found, self.position))
    }

    /// Skips whitespace and consumes the next byte.
    fn next_token(&mut self) -> Result<u8> {
        self.skip_whitespace();
        let byte = self.peek().ok_or(JsonError::UnexpectedEndOfInput)?;
        self.position += 1;
        Ok(byte)
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        match self.peek() {
            Some(byte) if byte == expected => {
                self.position += 1;
                Ok(())
            }
            Some(_) => Err(JsonError::UnexpectedCharacter(
                self.current_char(),
                self.position,
            )),
            None => Err(JsonError::UnexpectedEndOfInput),
        }
    }

    fn starts_with(&self, token: &str) -> bool {
        self.bytes
            .get(self.position..)
            .is_some_and(|rest| rest.starts_with(token.as_bytes()))
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.position += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\r' | b'\n' | b'\t')) {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn current_char(&self) -> char {
        self.input
            .get(self.position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    fn report_progress(&mut self) {
        let promille = ((self.position + 1) * 1000 / self.bytes.len()).min(1000) as u32;
        self.notify(promille);
    }

    fn finish_progress(&mut self) {
        self.notify(1000);
    }

    fn notify(&mut self, promille: u32) {
        if promille == self.last_progress {
            return;
        }
        if let Some(callback) = self.progress.as_deref_mut() {
            self.last_progress = promille;
            callback(promille);
        }
    }
}
