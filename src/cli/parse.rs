//! CLI parse: clap types for ticketwatch. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ticketwatch CLI - manage bus ticket monitoring pipelines
#[derive(Parser)]
#[command(name = "ticketwatch")]
#[command(about = "Client for the bus ticket monitoring service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (default: ~/.ticketwatch/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Server base URL for this invocation only (not saved)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Enable verbose logging to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account using a license code
    Signup {
        username: String,
        /// Token of the notification app that receives alerts
        notification_token: String,
        /// Account name on the ticket vendor
        service_username: String,
        /// Single-use license code
        license: String,
        /// Account password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Ticket vendor password (prompted when omitted)
        #[arg(long)]
        service_password: Option<String>,
    },
    /// Log in and store the access token
    Login {
        username: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored access token
    Logout,
    /// Show the current account
    Me,
    /// Manage license codes (admin)
    License {
        #[command(subcommand)]
        command: LicenseCommands,
    },
    /// Browse and register terminals
    Terminals {
        #[command(subcommand)]
        command: TerminalCommands,
    },
    /// Manage monitoring pipelines
    Pipelines {
        #[command(subcommand)]
        command: PipelineCommands,
    },
    /// Connectivity checks
    Test {
        #[command(subcommand)]
        command: TestCommands,
    },
    /// Inspect or change local client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum LicenseCommands {
    /// Register a new license code
    Create { value: String },
    /// List license codes
    List {
        #[arg(long, default_value = "0")]
        skip: u32,
        #[arg(long, default_value = "100")]
        limit: u32,
    },
}

#[derive(Subcommand)]
pub enum TerminalCommands {
    /// List known terminals
    List {
        #[arg(long, default_value = "0")]
        skip: u32,
        #[arg(long, default_value = "100")]
        limit: u32,
    },
    /// Register a terminal (admin)
    Create {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        name: String,
    },
}

#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Delete a pipeline
    Delete { id: u64 },
    /// Show one pipeline
    View { id: u64 },
    /// List your pipelines
    List,
    /// Create a pipeline watching a route on a date
    Create {
        desc: String,
        /// Travel date (YYYY-MM-DD)
        date: String,
        origin_terminal: String,
        dest_terminal: String,
        /// Earliest departure (HH:MM); adds a search filter
        #[arg(long, default_value = "")]
        start_time: String,
        /// Latest departure (HH:MM); adds a search filter
        #[arg(long, default_value = "")]
        end_time: String,
    },
}

#[derive(Subcommand)]
pub enum TestCommands {
    /// Send a test alert through your notification token
    Gotify,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration (token masked)
    Show,
    /// Change and save the server base URL
    SetBaseUrl { url: String },
}
