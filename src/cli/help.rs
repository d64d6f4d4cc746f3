//! CLI command-name contract for logging.

use crate::cli::parse::{
    Commands, ConfigCommands, LicenseCommands, PipelineCommands, TerminalCommands, TestCommands,
};

/// Command name string for log spans (e.g. "pipelines.create", "login").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Signup { .. } => "signup".to_string(),
        Commands::Login { .. } => "login".to_string(),
        Commands::Logout => "logout".to_string(),
        Commands::Me => "me".to_string(),
        Commands::License { command } => format!("license.{}", license_command_name(command)),
        Commands::Terminals { command } => {
            format!("terminals.{}", terminal_command_name(command))
        }
        Commands::Pipelines { command } => {
            format!("pipelines.{}", pipeline_command_name(command))
        }
        Commands::Test { command } => format!("test.{}", test_command_name(command)),
        Commands::Config { command } => format!("config.{}", config_command_name(command)),
    }
}

pub fn license_command_name(command: &LicenseCommands) -> &'static str {
    match command {
        LicenseCommands::Create { .. } => "create",
        LicenseCommands::List { .. } => "list",
    }
}

pub fn terminal_command_name(command: &TerminalCommands) -> &'static str {
    match command {
        TerminalCommands::List { .. } => "list",
        TerminalCommands::Create { .. } => "create",
    }
}

pub fn pipeline_command_name(command: &PipelineCommands) -> &'static str {
    match command {
        PipelineCommands::Delete { .. } => "delete",
        PipelineCommands::View { .. } => "view",
        PipelineCommands::List => "list",
        PipelineCommands::Create { .. } => "create",
    }
}

pub fn test_command_name(command: &TestCommands) -> &'static str {
    match command {
        TestCommands::Gotify => "gotify",
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Show => "show",
        ConfigCommands::SetBaseUrl { .. } => "set_base_url",
    }
}
