//! In-memory JSON document engine.
//!
//! Parses JSON text into a [`JsonValue`] tree, lets callers read it through
//! coercing getters and write it through auto-vivifying subscripts, and
//! renders it back as compact text.
//!
//! String payloads are stored exactly as they appear between the quotes of
//! the source, escapes included, and written back unchanged. Use
//! [`JsonValue::to_text`] for a display form, or the [`reflect`] layer to
//! get decoded Rust strings.
//!
//! # Example
//!
//! ```
//! use json_doc::{dump, parse, JsonValue};
//!
//! let mut doc = parse(r#"{"name":"Ray","age":20,"tags":["a","b"]}"#).unwrap();
//! assert_eq!(doc["name"].to_text(), "Ray");
//! assert_eq!(doc["age"].to_int(), 20);
//! assert_eq!(doc["tags"].len(), 2);
//!
//! doc["address"]["city"] = JsonValue::from("Lyon");
//! doc["age"] = 21i64.into();
//! assert_eq!(
//!     dump(&doc),
//!     r#"{"address":{"city":"Lyon"},"age":21,"name":"Ray","tags":["a","b"]}"#
//! );
//! ```

mod access;
mod coerce;
pub mod error;
pub mod io;
mod iter;
pub mod macros;
pub mod options;
mod parser;
mod query;
pub mod reflect;
mod serializer;
mod value;

pub use error::{JsonError, Result};
pub use io::{parse_file, parse_file_with, parse_file_with_progress, save_to_file};
pub use iter::{Iter, IterMut};
pub use options::{DEFAULT_MAX_DEPTH, MAX_SAFE_DEPTH, ParseOptions};
pub use parser::{parse, parse_with, parse_with_progress};
pub use reflect::{FromJson, ToJson, from_str, to_string};
pub use serializer::{dump, dump_into};
pub use value::{Array, JsonType, JsonValue, Object};
