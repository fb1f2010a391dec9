//! Error types for document parsing, access and file operations.

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Error type for document failures.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonError {
    /// Unexpected character at given byte offset
    UnexpectedCharacter(char, usize),
    /// Input ended in the middle of a value
    UnexpectedEndOfInput,
    /// `null`, `true` or `false` misspelled
    InvalidLiteral(String),
    /// Invalid number format
    InvalidNumber(String),
    /// String without its closing quote
    UnterminatedString,
    /// Something other than `,` or the closing bracket after an element
    ExpectedCommaOrClosingBracket,
    /// Expected colon after object key
    ExpectedColon,
    /// Expected a quoted key at given byte offset
    ExpectedKey(usize),
    /// Non-whitespace content after the top-level value
    TrailingCharacters(usize),
    /// Arrays/objects nested deeper than the configured limit
    NestingTooDeep(usize),
    /// Operation not valid for the node's current type
    TypeMismatch(String),
    /// Indexed access on something that is not an array
    NotAnArray,
    /// Index past the end of an array (index, length)
    IndexOutOfRange(usize, usize),
    /// A document file is not valid UTF-8 (detail, byte offset of the
    /// first invalid sequence)
    InvalidEncoding(String, usize),
    /// Reading or writing a document file failed
    Io(String),
}

impl JsonError {
    /// Stable numeric code for the error kind.
    ///
    /// File failures keep `-1`, the code callers historically checked for
    /// "could not open".
    pub fn code(&self) -> i32 {
        match self {
            JsonError::Io(_) => -1,
            JsonError::UnexpectedCharacter(..) => -2,
            JsonError::UnexpectedEndOfInput => -3,
            JsonError::InvalidLiteral(_) => -4,
            JsonError::InvalidNumber(_) => -5,
            JsonError::UnterminatedString => -6,
            JsonError::ExpectedCommaOrClosingBracket => -7,
            JsonError::ExpectedColon => -8,
            JsonError::ExpectedKey(_) => -9,
            JsonError::TrailingCharacters(_) => -10,
            JsonError::NestingTooDeep(_) => -11,
            JsonError::InvalidEncoding(..) => -12,
            JsonError::TypeMismatch(_) => -20,
            JsonError::NotAnArray => -21,
            JsonError::IndexOutOfRange(..) => -22,
        }
    }

    /// Returns true for errors raised while reading JSON text.
    pub fn is_syntax(&self) -> bool {
        (-12..=-2).contains(&self.code())
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonError::UnexpectedCharacter(c, pos) => {
                write!(f, "Unexpected character '{}' at position {}", c, pos)
            }
            JsonError::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
            JsonError::InvalidLiteral(s) => write!(f, "Invalid literal: {}", s),
            JsonError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            JsonError::UnterminatedString => write!(f, "Unterminated string"),
            JsonError::ExpectedCommaOrClosingBracket => {
                write!(f, "Expected comma or closing bracket")
            }
            JsonError::ExpectedColon => write!(f, "Expected colon after object key"),
            JsonError::ExpectedKey(pos) => write!(f, "Expected object key at position {}", pos),
            JsonError::TrailingCharacters(pos) => {
                write!(f, "Trailing characters after JSON value at position {}", pos)
            }
            JsonError::NestingTooDeep(depth) => {
                write!(f, "Nesting deeper than {} levels", depth)
            }
            JsonError::TypeMismatch(s) => write!(f, "Type mismatch: {}", s),
            JsonError::NotAnArray => write!(f, "Value is not an array"),
            JsonError::IndexOutOfRange(index, len) => {
                write!(f, "Index {} out of range for array of length {}", index, len)
            }
            JsonError::InvalidEncoding(path, offset) => {
                write!(f, "Invalid UTF-8 in {} at byte {}", path, offset)
            }
            JsonError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for JsonError {}

impl From<config_loader::ConfigError> for JsonError {
    fn from(err: config_loader::ConfigError) -> Self {
        match err {
            config_loader::ConfigError::InvalidUtf8 { path, valid_up_to } => {
                JsonError::InvalidEncoding(path, valid_up_to)
            }
            other => JsonError::Io(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_display() {
        let err = JsonError::UnexpectedEndOfInput;
        assert_eq!(err.to_string(), "Unexpected end of input");

        let err = JsonError::UnexpectedCharacter('x', 5);
        assert_eq!(err.to_string(), "Unexpected character 'x' at position 5");

        let err = JsonError::IndexOutOfRange(4, 2);
        assert_eq!(
            err.to_string(),
            "Index 4 out of range for array of length 2"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(JsonError::Io("missing".to_string()).code(), -1);
        assert!(JsonError::ExpectedColon.is_syntax());
        assert!(JsonError::NestingTooDeep(3).is_syntax());
        assert!(!JsonError::NotAnArray.is_syntax());
        assert!(!JsonError::Io(String::new()).is_syntax());
    }

    #[test]
    fn test_config_error_conversion() {
        let err: JsonError =
            config_loader::ConfigError::FileNotFound("doc.json".to_string()).into();
        assert!(matches!(err, JsonError::Io(_)));
        assert_eq!(err.code(), -1);

        let err: JsonError = config_loader::ConfigError::InvalidUtf8 {
            path: "latin1.json".to_string(),
            valid_up_to: 12,
        }
        .into();
        assert_eq!(err, JsonError::InvalidEncoding("latin1.json".to_string(), 12));
        assert_eq!(err.code(), -12);
        assert!(err.is_syntax());
    }
}
