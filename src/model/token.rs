use super::require_non_blank;
use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// Access token issued by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Login credentials; sent form-encoded.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            username: require_non_blank("username", username.into())?,
            password: require_non_blank("password", password.into())?,
        })
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
