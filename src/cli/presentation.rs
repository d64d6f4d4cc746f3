//! CLI presentation: text and JSON renderings of command results.
//!
//! Text output uses tables for sequences; JSON output is the read schema as
//! received from the server.

mod account;
mod license;
mod pipeline;
mod settings;
mod shared;
mod terminal;

pub use account::{
    format_login_text, format_logout_text, format_signup_text, format_user_text,
};
pub use license::{format_license_list_text, format_license_text};
pub use pipeline::{
    format_pipeline_deleted_text, format_pipeline_list_text, format_pipeline_text,
};
pub use settings::{format_config_json, format_config_text, mask_token};
pub use shared::to_json;
pub use terminal::{format_terminal_list_text, format_terminal_text};
