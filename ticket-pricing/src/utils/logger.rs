//! Logging Infrastructure
//!
//! Structured logging to stderr, or to a daily rolling file when a log
//! directory is configured. Stdout stays reserved for payment summaries.
//! Production environments log JSON lines.

use crate::core::Config;
use anyhow::Context;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "ticket-pricing";

/// Initialize the global subscriber from the configuration
///
/// `RUST_LOG` takes precedence over `config.log_level`.
///
/// # Errors
/// Fails when the log directory cannot be created or a global subscriber is
/// already installed.
pub fn init_logger(config: &Config) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&config.log_level));
    let json = config.is_production();

    let output: Box<dyn Layer<Registry> + Send + Sync> = match config.log_dir.as_deref() {
        Some(dir) => {
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(open_log_file(dir)?));
            if json {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
        None => {
            let layer = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            if json {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
    };

    tracing_subscriber::registry()
        .with(output)
        .with(env_filter)
        .try_init()
        .context("Failed to install tracing subscriber")
}

/// Filter for a configured level, falling back to `info` when it does not parse
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(dir: &str) -> anyhow::Result<RollingFileAppender> {
    let log_dir = Path::new(dir);
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    Ok(RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX))
}
