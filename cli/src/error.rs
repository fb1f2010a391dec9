//! Error types for CLI commands.

use json_doc::JsonError;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    /// Parse, access or document file failure
    Json(JsonError),
    /// Malformed document path
    InvalidPath(String),
    /// Nothing stored at the given path
    PathNotFound(String),
    /// The node at the path is not an object
    NotAnObject(String),
    /// Writing command output failed
    Output(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Json(err) => write!(f, "{}", err),
            CliError::InvalidPath(msg) => write!(f, "Invalid path: {}", msg),
            CliError::PathNotFound(path) => write!(f, "Nothing found at '{}'", path),
            CliError::NotAnObject(path) => write!(f, "Value at '{}' is not an object", path),
            CliError::Output(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<JsonError> for CliError {
    fn from(err: JsonError) -> Self {
        CliError::Json(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Output(err)
    }
}
