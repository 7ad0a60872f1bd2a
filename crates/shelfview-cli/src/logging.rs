//! tracing subscriber setup.
//!
//! `RUST_LOG` wins over `--log-level`. Console commands log to stderr; the
//! interactive dashboard owns the terminal, so it logs to a file instead.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::args::LogLevel;

pub enum LogDestination {
    Stderr,
    File(PathBuf),
}

pub fn init(level: LogLevel, destination: LogDestination) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

    let installed = match destination {
        LogDestination::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogDestination::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    installed.map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}
