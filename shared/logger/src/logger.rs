//! Thread-safe asynchronous logger implementation.
//!
//! This module provides the main [`Logger`] interface. Messages go to a log
//! file through a dedicated writer thread, to the terminal (stderr), or both.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::spawn_writer_thread;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Sender, channel};

/// Thread-safe, non-blocking logger.
///
/// Cloneable instances share the same channel to a dedicated writer thread.
/// Console echo goes to stderr so it never mixes with program output.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LogLevel};
///
/// let dir = std::env::temp_dir().join("logging-doc");
/// let logger = Logger::new(dir.join("app.log"), LogLevel::Info).unwrap();
/// logger.info("Document loaded");
/// logger.error("Document could not be saved");
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    sink: Option<Sender<LogMessage>>,
    level: LogLevel,
    component: Option<String>,
    log_path: Option<PathBuf>,
    console_output: bool,
}

impl Logger {
    /// Creates a new logger with dedicated writer thread.
    ///
    /// # Arguments
    ///
    /// * `log_path` - Path to log file (created, with its directories, if missing)
    /// * `level` - Minimum log level to record
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        Self::build(log_path, level, None, false)
    }

    /// Creates a new file logger with component identification.
    ///
    /// # Arguments
    ///
    /// * `log_path` - Path to log file (created if it doesn't exist)
    /// * `level` - Minimum log level to record
    /// * `component` - Component name (e.g., "Parser", "CLI", "Storage")
    /// * `console_output` - Also echo every recorded message to stderr
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn with_component(
        log_path: PathBuf,
        level: LogLevel,
        component: String,
        console_output: bool,
    ) -> Result<Self> {
        Self::build(log_path, level, Some(component), console_output)
    }

    /// Creates a logger without a file: messages only go to stderr.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{Logger, LogLevel};
    ///
    /// let logger = Logger::console(LogLevel::Warn, "CLI");
    /// assert!(!logger.is_enabled(LogLevel::Info));
    /// logger.warn("Config file not found, using defaults");
    /// ```
    pub fn console(level: LogLevel, component: &str) -> Self {
        Logger {
            sink: None,
            level,
            component: Some(component.to_string()),
            log_path: None,
            console_output: true,
        }
    }

    fn build(
        log_path: PathBuf,
        level: LogLevel,
        component: Option<String>,
        console_output: bool,
    ) -> Result<Self> {
        let (sender, receiver) = channel();
        spawn_writer_thread(log_path.clone(), receiver)?;
        Ok(Logger {
            sink: Some(sender),
            level,
            component,
            log_path: Some(log_path),
            console_output,
        })
    }

    /// Creates a logger for another component sharing this one's file,
    /// writer thread, level and console setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{Logger, LogLevel};
    ///
    /// let main_logger = Logger::console(LogLevel::Info, "CLI");
    /// let parser_logger = main_logger.for_component("Parser");
    /// parser_logger.info("Parsing started");
    /// ```
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            component: Some(component.to_string()),
            ..self.clone()
        }
    }

    /// Path of the log file, if this logger writes one.
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Minimum level this logger records.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a message at `level` would be recorded. Lets callers skip
    /// building expensive messages.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level && (self.sink.is_some() || self.console_output)
    }

    /// Logs a debug message (only if level is Debug or lower).
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs an info message (only if level is Info or lower).
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning message (only if level is Warn or lower).
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message (always recorded).
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Filters by level, echoes to the console and sends to the writer thread.
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        let msg = LogMessage::new(level, self.component.clone(), message.to_string());

        if self.console_output {
            eprint!("{}", msg.format_console());
        }

        if let Some(ref sink) = self.sink {
            let _ = sink.send(msg);
        }
    }
}
