use json_doc::{from_str, reflect_json};
use std::error::Error;
use std::path::Path;

use crate::config::{LoggingConfig, ParserConfig};

/// jsondoc configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonDocConfig {
    pub logging: LoggingConfig,
    pub parser: ParserConfig,
}

reflect_json! {
    JsonDocConfig {
        logging: LoggingConfig,
        parser: ParserConfig,
    }
}

impl JsonDocConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = config_loader::load_text_file(path)?;
        Self::from_json_text(&content)
    }

    /// Load configuration from inline JSON text
    pub fn from_json_text(text: &str) -> Result<Self, Box<dyn Error>> {
        from_str(text).map_err(|e| e.into())
    }
}
