use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{self, LoggingSettings};

/// Environment variable overriding `logging.level`.
const LOG_ENV: &str = "RHYTHMFLOW_LOG";

/// Start logging, returning a message instead of failing when the log file
/// cannot be set up. Logging is optional, like the config file.
pub fn start_logging(settings: &LoggingSettings) -> Option<String> {
    init_logging(settings)
        .err()
        .map(|e| format!("logging disabled: {e}"))
}

/// Install a file-backed `tracing` subscriber. The terminal belongs to the
/// TUI, so nothing is ever written to stdout/stderr.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), Box<dyn std::error::Error>> {
    if !settings.enabled {
        return Ok(());
    }

    let Some(path) = settings.file.clone().or_else(config::default_log_path) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    Ok(())
}
