//! jsondoc command-line library
//!
//! Argument definitions, configuration and commands, exposed for the binary
//! and for integration testing.

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod path;

pub use args::{Cli, Cmd};
pub use commands::run;
pub use config::JsonDocConfig;
pub use error::{CliError, Result};
pub use path::DocPath;
