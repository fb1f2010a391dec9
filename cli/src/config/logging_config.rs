use json_doc::reflect_json;
use logging::{LogLevel, Logger};

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub log_file_path: String,
    pub log_level: String,
    pub enable_console: bool,
    pub enable_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_file_path: "jsondoc.log".to_string(),
            log_level: "warn".to_string(),
            enable_console: true,
            enable_file: false,
        }
    }
}

reflect_json! {
    LoggingConfig {
        log_file_path: String,
        log_level: String,
        enable_console: bool,
        enable_file: bool,
    }
}

impl LoggingConfig {
    /// Configured level; unknown names fall back to `Info`.
    pub fn level(&self) -> LogLevel {
        self.log_level.parse().unwrap_or_default()
    }

    /// Builds the main logger.
    ///
    /// With both sinks disabled the logger still reports errors on the
    /// console.
    pub fn build_logger(&self, component: &str) -> logging::Result<Logger> {
        match (self.enable_file, self.enable_console) {
            (true, console) => Logger::with_component(
                self.log_file_path.clone().into(),
                self.level(),
                component.to_string(),
                console,
            ),
            (false, true) => Ok(Logger::console(self.level(), component)),
            (false, false) => Ok(Logger::console(LogLevel::Error, component)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        let config = LoggingConfig {
            log_level: "DEBUG".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(config.level(), LogLevel::Debug);
        assert_eq!(LoggingConfig::default().level(), LogLevel::Warn);

        let unknown = LoggingConfig {
            log_level: "verbose".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(unknown.level(), LogLevel::Info);
    }

    #[test]
    fn test_console_only_logger() {
        let logger = LoggingConfig::default().build_logger("CLI").unwrap();
        assert!(logger.log_path().is_none());
        assert!(logger.is_enabled(LogLevel::Warn));
        assert!(!logger.is_enabled(LogLevel::Info));
    }

    #[test]
    fn test_silenced_logger_keeps_errors() {
        let config = LoggingConfig {
            enable_console: false,
            log_level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        let logger = config.build_logger("CLI").unwrap();
        assert!(!logger.is_enabled(LogLevel::Warn));
        assert!(logger.is_enabled(LogLevel::Error));
    }

    #[test]
    fn test_file_logger() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            log_file_path: dir.path().join("logs").join("cli.log").display().to_string(),
            enable_file: true,
            enable_console: false,
            ..LoggingConfig::default()
        };
        let logger = config.build_logger("CLI").unwrap();
        assert!(logger.log_path().is_some());
    }
}
