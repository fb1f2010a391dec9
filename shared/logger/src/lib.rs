//! Thread-safe asynchronous logging library.
//!
//! A [`Logger`] filters by [`LogLevel`], tags messages with a component
//! name and hands them to a writer thread that appends them to a file.
//! Console echo to stderr can be enabled on top of, or instead of, the file.

pub mod error;
mod log_level;
mod log_message;
mod log_writer;
mod logger;

pub use error::{LoggingError, Result};
pub use log_level::{LogLevel, UnknownLevel};
pub use logger::Logger;
