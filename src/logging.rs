//! Logger setup for the binary.

use std::fs::File;

use color_eyre::eyre::Result;
use env_logger::{Builder, Target};

use crate::Config;

/// Installs the global logger when a log file is configured.
///
/// The terminal belongs to the interface while the application runs, so logs only ever go to the
/// configured file. Module directives from `RUST_LOG` are honoured on top of the configured level.
///
/// # Errors
///
/// - [`std::io::Error`] if the log file cannot be created.
/// - [`log::SetLoggerError`] if a logger is already installed.
pub fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    Builder::from_default_env()
        .filter_level(config.log_level)
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    log::info!("logging to {}", path.display());

    Ok(())
}
