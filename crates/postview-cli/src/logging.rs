use anyhow::{Result, anyhow};
use is_terminal::IsTerminal;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Interactive sessions own the
/// terminal, so without a log file they log nowhere.
pub fn init(level: LogLevel, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None if interactive => return Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .try_init(),
    };

    installed.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
