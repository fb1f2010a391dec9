//! Internal log message structure.

use crate::log_level::LogLevel;
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Internal representation of a log message.
#[derive(Debug, Clone)]
pub(crate) struct LogMessage {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogMessage {
    /// Creates a new log message stamped with the local time.
    pub fn new(level: LogLevel, component: Option<String>, message: String) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component,
            message,
        }
    }

    /// Formats message for file output: `[timestamp] LEVEL [component]: message\n`
    pub fn format(&self) -> String {
        if let Some(ref component) = self.component {
            format!(
                "[{}] {} [component: {}]: {}\n",
                self.timestamp,
                self.level.as_str(),
                component,
                self.message
            )
        } else {
            format!(
                "[{}] {}: {}\n",
                self.timestamp,
                self.level.as_str(),
                self.message
            )
        }
    }

    /// Shorter form for the terminal: `LEVEL component: message\n`
    pub fn format_console(&self) -> String {
        match self.component {
            Some(ref component) => {
                format!("{:<5} {}: {}\n", self.level.as_str(), component, self.message)
            }
            None => format!("{:<5} {}\n", self.level.as_str(), self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_message_creation() {
        let msg = LogMessage::new(LogLevel::Info, None, "Test message".to_string());

        assert_eq!(msg.level, LogLevel::Info);
        assert_eq!(msg.message, "Test message");
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_log_message_format() {
        let msg = LogMessage::new(LogLevel::Error, None, "Parse failed".to_string());
        let formatted = msg.format();

        assert!(formatted.contains("ERROR"));
        assert!(formatted.contains("Parse failed"));
        assert!(formatted.ends_with('\n'));
    }

    #[test]
    fn test_log_message_format_with_component() {
        let msg = LogMessage::new(
            LogLevel::Warn,
            Some("Parser".to_string()),
            "Trailing content ignored".to_string(),
        );

        assert!(msg.format().contains("WARN [component: Parser]: Trailing content ignored"));
        assert_eq!(msg.format_console(), "WARN  Parser: Trailing content ignored\n");
    }

    #[test]
    fn test_timestamp_format() {
        let msg = LogMessage::new(LogLevel::Info, None, "Test".to_string());
        let ts = &msg.timestamp;

        // Should match YYYY-MM-DD HH:MM:SS.mmm format
        assert_eq!(ts.len(), 23);
        assert!(ts.contains('-'));
        assert!(ts.contains(':'));
        assert!(ts.contains('.'));
    }
}
