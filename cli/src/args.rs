//! Command-line arguments.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jsondoc",
    about = "Inspect and edit JSON documents",
    version
)]
pub struct Cli {
    /// Configuration file (defaults to a discovered jsondoc.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Parse a document and report its shape
    Check(FileArgs),
    /// Print a document as compact JSON
    Dump(FileArgs),
    /// Print the value at a dotted path, e.g. users.0.name
    Get(PathArgs),
    /// List the keys of the object at a dotted path
    Keys(KeysArgs),
    /// Set the value (raw JSON) at a dotted path, creating missing parents
    Set(SetArgs),
    /// Remove the key or array element at a dotted path
    Remove(EditArgs),
}

#[derive(ClapArgs, Debug)]
pub struct FileArgs {
    /// Document to read
    pub file: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct PathArgs {
    /// Document to read
    pub file: PathBuf,
    /// Dotted path; numeric segments index arrays
    pub path: String,
}

#[derive(ClapArgs, Debug)]
pub struct KeysArgs {
    /// Document to read
    pub file: PathBuf,
    /// Dotted path of an object (defaults to the root)
    pub path: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct SetArgs {
    /// Document to edit
    pub file: PathBuf,
    /// Dotted path; numeric segments index arrays
    pub path: String,
    /// New value as raw JSON (e.g., 123, true, "str", {"a":1})
    pub value: String,
    /// Write the result here instead of back to the input file
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct EditArgs {
    /// Document to edit
    pub file: PathBuf,
    /// Dotted path; numeric segments index arrays
    pub path: String,
    /// Write the result here instead of back to the input file
    #[arg(long)]
    pub out: Option<PathBuf>,
}
