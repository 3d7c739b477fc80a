use crate::error::{ProcessingError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Log level for a run: debug when verbose, info when logging to a file, warnings otherwise
pub fn log_level(verbose: bool, log_file: Option<&Path>) -> Level {
    match (verbose, log_file) {
        (true, _) => Level::DEBUG,
        (false, Some(_)) => Level::INFO,
        (false, None) => Level::WARN,
    }
}

/// Install the global fmt subscriber, writing to `log_file` or stderr
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level(verbose, log_file))
        .with_target(false);

    let installed = match log_file {
        Some(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| ProcessingError::Config(format!("Could not initialise logging: {}", e)))
}
