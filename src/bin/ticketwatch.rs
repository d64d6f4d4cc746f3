//! Ticketwatch CLI Binary
//!
//! Command-line interface for the bus ticket monitoring service.

use clap::Parser;
use std::process;
use ticketwatch::cli::{Cli, RunContext};
use ticketwatch::logging::{init_logging, LoggingConfig};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(e.exit_code());
    }

    info!("Ticketwatch CLI starting");

    let mut context = match RunContext::new(
        cli.config.clone(),
        cli.base_url.as_deref(),
        &cli.format,
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(kind = e.kind(), "Error initializing client: {}", e);
            eprintln!("{}", ticketwatch::cli::map_error(&e));
            process::exit(e.exit_code());
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!(kind = e.kind(), "Command failed: {}", e);
            eprintln!("{}", ticketwatch::cli::map_error(&e));
            process::exit(e.exit_code());
        }
    }
}

/// Build logging configuration from CLI args.
/// Precedence: explicit flags override --verbose/--quiet, which override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.output = "file".to_string();
        config.file = Some(file.clone());
    }

    config
}
