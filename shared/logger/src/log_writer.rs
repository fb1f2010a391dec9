//! Asynchronous log file writer.

use crate::error::{LoggingError, Result};
use crate::log_message::LogMessage;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

/// Manages async log file writing in dedicated thread.
pub(crate) struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens or creates the file in append mode, creating missing parent
    /// directories.
    pub fn new(log_path: &Path) -> Result<Self> {
        if log_path.as_os_str().is_empty() {
            return Err(LoggingError::EmptyPath);
        }
        if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LoggingError::open(log_path, e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| LoggingError::open(log_path, e))?;
        Ok(Self { file })
    }

    /// Writes and flushes a message to the file.
    fn write_message(&mut self, message: &LogMessage) {
        if let Err(e) = self.file.write_all(message.format().as_bytes()) {
            eprintln!("Error writing log: {}", e);
            return;
        }
        if let Err(e) = self.file.flush() {
            eprintln!("Error flushing log: {}", e);
        }
    }

    /// Runs the writer loop until every sender is dropped.
    pub fn run(mut self, receiver: Receiver<LogMessage>) {
        for message in receiver {
            self.write_message(&message);
        }
    }
}

/// Spawns a dedicated log writer thread.
pub(crate) fn spawn_writer_thread(log_path: PathBuf, receiver: Receiver<LogMessage>) -> Result<()> {
    let writer = LogWriter::new(&log_path)?;
    std::thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || writer.run(receiver))
        .map_err(LoggingError::Spawn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_level::LogLevel;
    use std::sync::mpsc::channel;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_log_writer_creation() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let writer = LogWriter::new(&log_path);
        assert!(writer.is_ok());
        assert!(log_path.exists());
    }

    #[test]
    fn test_log_writer_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("logs").join("nested").join("jsondoc.log");

        LogWriter::new(&log_path).unwrap();
        assert!(log_path.exists());
    }

    #[test]
    fn test_log_writer_rejects_empty_path() {
        let result = LogWriter::new(Path::new(""));
        assert!(matches!(result, Err(LoggingError::EmptyPath)));
    }

    #[test]
    fn test_write_message() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let mut writer = LogWriter::new(&log_path).unwrap();
        let message = LogMessage::new(LogLevel::Info, None, "Test message".to_string());

        writer.write_message(&message);

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO"));
        assert!(content.contains("Test message"));
    }

    #[test]
    fn test_spawn_writer_thread() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");
        let (sender, receiver) = channel();

        spawn_writer_thread(log_path.clone(), receiver).unwrap();

        sender
            .send(LogMessage::new(LogLevel::Debug, None, "Thread test".to_string()))
            .unwrap();
        drop(sender);

        thread::sleep(Duration::from_millis(100));

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Thread test"));
    }
}
