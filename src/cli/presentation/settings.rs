use super::shared::to_json;
use crate::config::ClientConfig;
use crate::error::ClientError;
use serde_json::json;
use std::path::Path;

/// Show only the first few characters of a token.
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return "(not logged in)".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{}...", prefix)
}

pub fn format_config_text(config: &ClientConfig, path: &Path) -> String {
    format!(
        "Config file:     {}\nBase URL:        {}\nToken:           {}\nConnect timeout: {}s\nRequest timeout: {}s",
        path.display(),
        config.base_url,
        mask_token(&config.token),
        config.connect_timeout_secs,
        config.request_timeout_secs
    )
}

pub fn format_config_json(config: &ClientConfig, path: &Path) -> Result<String, ClientError> {
    to_json(&json!({
        "config_path": path.display().to_string(),
        "base_url": config.base_url,
        "token": mask_token(&config.token),
        "authenticated": config.is_authenticated(),
        "connect_timeout_secs": config.connect_timeout_secs,
        "request_timeout_secs": config.request_timeout_secs,
    }))
}
