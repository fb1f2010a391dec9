use json_doc::{MAX_SAFE_DEPTH, ParseOptions, reflect_json};

/// Parser configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub allow_trailing: bool,
    pub max_depth: usize,
    pub report_progress: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        let options = ParseOptions::default();
        ParserConfig {
            allow_trailing: options.allow_trailing,
            max_depth: options.max_depth,
            report_progress: false,
        }
    }
}

reflect_json! {
    ParserConfig {
        allow_trailing: bool,
        max_depth: usize,
        report_progress: bool,
    }
}

impl ParserConfig {
    /// Parser options for this configuration. A `max_depth` above
    /// [`MAX_SAFE_DEPTH`] is lowered to it.
    pub fn options(&self) -> ParseOptions {
        ParseOptions {
            allow_trailing: self.allow_trailing,
            ..ParseOptions::default()
        }
        .with_max_depth(self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser_defaults() {
        assert_eq!(ParserConfig::default().options(), ParseOptions::default());
    }

    #[test]
    fn test_options_follow_config() {
        let config: ParserConfig =
            json_doc::from_str(r#"{"allow_trailing":false,"max_depth":8}"#).unwrap();
        let options = config.options();
        assert!(!options.allow_trailing);
        assert_eq!(options.max_depth, 8);
        assert!(!config.report_progress);
    }

    #[test]
    fn test_configured_depth_is_capped() {
        let config: ParserConfig = json_doc::from_str(r#"{"max_depth":1000000}"#).unwrap();
        assert_eq!(config.max_depth, 1_000_000);
        assert_eq!(config.options().max_depth, MAX_SAFE_DEPTH);
    }
}
