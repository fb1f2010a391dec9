//! CLI configuration

pub mod jsondoc_config;
pub mod logging_config;
pub mod parser_config;

pub use jsondoc_config::JsonDocConfig;
pub use logging_config::LoggingConfig;
pub use parser_config::ParserConfig;

/// File name looked up when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "jsondoc.json";

/// Environment variable holding a whole configuration as inline JSON
pub const CONFIG_JSON_ENV: &str = "JSONDOC_CONFIG_JSON";
