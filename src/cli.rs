//! CLI domain: parse, route, help, output, and presentation only.
//! No request logic; the route table dispatches to command services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{
    Cli, Commands, ConfigCommands, LicenseCommands, PipelineCommands, TerminalCommands,
    TestCommands,
};
pub use presentation::{
    format_config_json, format_config_text, format_license_list_text, format_license_text,
    format_login_text, format_logout_text, format_pipeline_deleted_text,
    format_pipeline_list_text, format_pipeline_text, format_signup_text,
    format_terminal_list_text, format_terminal_text, format_user_text, mask_token, to_json,
};
pub use route::RunContext;
