//! Whole-file wrappers around the parser and the serializer.

use crate::error::Result;
use crate::options::ParseOptions;
use crate::parser;
use crate::serializer::dump;
use crate::value::JsonValue;
use std::path::Path;

/// Reads and parses a document file with the default options.
///
/// A leading UTF-8 byte order mark is ignored.
///
/// # Errors
///
/// `JsonError::Io` when the file cannot be read, `JsonError::InvalidEncoding`
/// when its bytes are not UTF-8, otherwise any parse error.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<JsonValue> {
    parse_file_with(path, &ParseOptions::default())
}

pub fn parse_file_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<JsonValue> {
    let text = config_loader::load_text_file(path)?;
    parser::parse_with(&text, options)
}

/// Like [`parse_file_with`], reporting parse progress in promille.
pub fn parse_file_with_progress<P, F>(path: P, options: &ParseOptions, progress: F) -> Result<JsonValue>
where
    P: AsRef<Path>,
    F: FnMut(u32),
{
    let text = config_loader::load_text_file(path)?;
    parser::parse_with_progress(&text, options, progress)
}

/// Writes the compact rendering of `value` as the whole content of `path`.
///
/// The file is replaced atomically; on failure the previous content is left
/// untouched.
pub fn save_to_file<P: AsRef<Path>>(path: P, value: &JsonValue) -> Result<()> {
    config_loader::save_file(path, &dump(value))?;
    Ok(())
}
