//! Error types for logger setup.
//!
//! Writing a message never fails from the caller's point of view; only
//! opening the log file and starting the writer thread can.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for logger setup.
pub type Result<T> = std::result::Result<T, LoggingError>;

#[derive(Debug)]
pub enum LoggingError {
    /// The configured log file path was empty.
    EmptyPath,
    /// The log file or one of its parent directories could not be created.
    Open { path: PathBuf, source: io::Error },
    /// The writer thread could not be spawned.
    Spawn(io::Error),
}

impl LoggingError {
    pub(crate) fn open(path: &std::path::Path, source: io::Error) -> Self {
        LoggingError::Open {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::EmptyPath => write!(f, "log file path is empty"),
            LoggingError::Open { path, source } => {
                write!(f, "cannot open log file {}: {}", path.display(), source)
            }
            LoggingError::Spawn(err) => write!(f, "cannot start log writer: {}", err),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::EmptyPath => None,
            LoggingError::Open { source, .. } => Some(source),
            LoggingError::Spawn(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::ErrorKind;
    use std::path::Path;

    #[test]
    fn test_open_error_names_the_file() {
        let err = LoggingError::open(
            Path::new("logs/jsondoc.log"),
            io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "cannot open log file logs/jsondoc.log: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_empty_path_has_no_source() {
        assert!(LoggingError::EmptyPath.source().is_none());
    }
}
