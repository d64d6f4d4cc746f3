use super::pipeline::format_pipeline_list_text;
use super::shared::heading;
use crate::model::{Token, User};
use std::path::Path;

pub fn format_user_text(user: &User, color: bool) -> String {
    let mut output = heading(&format!("User {} (#{})", user.username, user.id), color);
    output.push('\n');
    output.push_str(&format!(
        "  Role:               {}\n",
        if user.is_admin { "admin" } else { "user" }
    ));
    output.push_str(&format!("  Vendor account:     {}\n", user.service_username));
    output.push_str(&format!("  Notification token: {}\n", user.notification_token));
    output.push_str(&format!("  Pipelines:          {}", user.pipelines.len()));
    if !user.pipelines.is_empty() {
        output.push_str("\n\n");
        output.push_str(&format_pipeline_list_text(&user.pipelines));
    }
    output
}

pub fn format_signup_text(user: &User) -> String {
    format!(
        "Account created for {} (#{}). Run 'ticketwatch login {}' to sign in.",
        user.username, user.id, user.username
    )
}

pub fn format_login_text(username: &str, token: &Token, config_path: &Path) -> String {
    format!(
        "Logged in as {} ({} token saved to {})",
        username,
        token.token_type,
        config_path.display()
    )
}

pub fn format_logout_text(config_path: &Path) -> String {
    format!("Logged out. Token removed from {}", config_path.display())
}
