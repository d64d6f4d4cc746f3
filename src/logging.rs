//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs go to stderr or a file,
//! never stdout, so command output stays machine-readable.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch; `--quiet` turns it off
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. CLI arguments (already folded into `config` by the binary)
/// 2. Environment variables (TICKETWATCH_LOG, TICKETWATCH_LOG_FORMAT)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ClientError> {
    if let Some(config) = config {
        if !config.enabled {
            return Ok(());
        }
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let to_file = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);

    let get_file_writer = || -> Result<std::fs::File, ClientError> {
        let log_file = config.and_then(|c| c.file.clone()).ok_or_else(|| {
            ClientError::Config("Log output 'file' requires --log-file".to_string())
        })?;
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::Config(format!("Failed to create log directory: {}", e))
            })?;
        }
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .map_err(|e| {
                ClientError::Config(format!("Failed to open log file {:?}: {}", log_file, e))
            })
    };

    if format == "json" {
        if to_file {
            let file_writer = get_file_writer()?;
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(file_writer),
                )
                .init();
        } else {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    } else if to_file {
        let file_writer = get_file_writer()?;
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(file_writer),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ClientError> {
    if let Ok(filter) = EnvFilter::try_from_env("TICKETWATCH_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("warn");
    EnvFilter::try_new(level)
        .map_err(|e| ClientError::Config(format!("Invalid log level '{}': {}", level, e)))
}

/// Determine output format from environment or config
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ClientError> {
    if let Ok(format) = std::env::var("TICKETWATCH_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(ClientError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }
    Ok(format.to_string())
}

/// Returns true when logs go to a file, false for stderr
fn determine_output(config: Option<&LoggingConfig>) -> Result<bool, ClientError> {
    parse_output(config.map(|c| c.output.as_str()).unwrap_or("stderr"))
}

fn parse_output(output: &str) -> Result<bool, ClientError> {
    match output {
        "stderr" => Ok(false),
        "file" => Ok(true),
        _ => Err(ClientError::Config(format!(
            "Invalid log output: {} (must be 'stderr' or 'file')",
            output
        ))),
    }
}
