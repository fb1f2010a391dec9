use clap::Parser;
use jsondoc::config::{CONFIG_FILE_NAME, CONFIG_JSON_ENV};
use jsondoc::{Cli, JsonDocConfig};
use std::io;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors exit with code 2 from inside clap
    let cli = Cli::parse();

    // Load configuration
    let (config, source) = load_config(cli.config.as_deref());

    // Initialize logger
    let logger = initialize_logger(&config);
    logger.debug(&format!("Configuration loaded from {}", source));
    if let Err(e) = config.logging.log_level.parse::<logging::LogLevel>() {
        logger.warn(&format!("{}, using {}", e, config.logging.level()));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = jsondoc::run(&cli.cmd, &config, &logger, &mut out);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger.error(&e.to_string());
            // File-only logging would leave the terminal silent
            if config.logging.enable_file && !config.logging.enable_console {
                eprintln!("error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

/// Initializes the main logger from configuration
fn initialize_logger(config: &JsonDocConfig) -> logging::Logger {
    match config.logging.build_logger("CLI") {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to create logger: {}", e);
            eprintln!("Falling back to console logging.");
            logging::Logger::console(config.logging.level(), "CLI")
        }
    }
}

/// Loads configuration or returns default values, along with where it came
/// from
fn load_config(explicit: Option<&Path>) -> (JsonDocConfig, String) {
    // Determine the configuration in this order:
    // 1. JSONDOC_CONFIG_JSON environment variable (inline JSON)
    // 2. --config option
    // 3. Discovered jsondoc.json
    if let Ok(json_str) = std::env::var(CONFIG_JSON_ENV) {
        match JsonDocConfig::from_json_text(&json_str) {
            Ok(cfg) => return (cfg, format!("{} env", CONFIG_JSON_ENV)),
            Err(e) => eprintln!("{} env is not valid JSON: {}", CONFIG_JSON_ENV, e),
        }
    }

    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_loader::find_config_file(CONFIG_FILE_NAME) {
            Ok(path) => path,
            Err(_) => return (JsonDocConfig::default(), "defaults".to_string()),
        },
    };

    match JsonDocConfig::load_from_file(&config_path) {
        Ok(c) => (c, config_path.display().to_string()),
        Err(e) => {
            eprintln!(
                "Failed to load configuration from {}: {}",
                config_path.display(),
                e
            );
            eprintln!("Using default values...");
            (JsonDocConfig::default(), "defaults".to_string())
        }
    }
}
