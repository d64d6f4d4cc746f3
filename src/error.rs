//! Error types for the ticketwatch client.
//!
//! Every command returns a `ClientError` on failure; the binary maps the
//! variant to a process exit code.

use thiserror::Error;

/// Client-side failure kinds
#[derive(Debug, Error)]
pub enum ClientError {
    /// Arguments or a locally built payload failed schema rules. Raised before any network call.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Connection failure, timeout, or a non-2xx status from the server.
    #[error("{}", transport_message(.status, .message))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The server responded, but the body does not match the expected schema.
    #[error("Unexpected response from server: {0}")]
    Schema(String),

    /// Local configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

fn transport_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Request failed with status {}: {}", code, message),
        None => format!("Request failed: {}", message),
    }
}

impl ClientError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::Validation(_) => 2,
            ClientError::Transport { .. } => 3,
            ClientError::Schema(_) => 4,
            ClientError::Config(_) => 5,
        }
    }

    /// Short stable label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Validation(_) => "validation",
            ClientError::Transport { .. } => "transport",
            ClientError::Schema(_) => "schema",
            ClientError::Config(_) => "config",
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::Transport {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            ClientError::Validation(format!("Could not encode request: {}", error))
        } else if error.is_decode() {
            ClientError::Schema(format!("Failed to decode response body: {}", error))
        } else if error.is_timeout() {
            ClientError::transport(format!("Request timeout: {}", error))
        } else if error.is_connect() {
            ClientError::transport(format!("Connection error: {}", error))
        } else if let Some(status) = error.status() {
            ClientError::Transport {
                status: Some(status.as_u16()),
                message: error.to_string(),
            }
        } else {
            ClientError::transport(format!("HTTP error: {}", error))
        }
    }
}
