use super::{require_non_blank, Pipeline};
use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// Account as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Where alerts for this user are delivered
    #[serde(rename = "gotify_app_token")]
    pub notification_token: String,
    /// Account name on the ticket vendor
    #[serde(rename = "alibaba_username")]
    pub service_username: String,
    pub pipelines: Vec<Pipeline>,
    pub is_admin: bool,
}

/// Signup payload; consumes a license code.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    #[serde(rename = "gotify_app_token")]
    pub notification_token: String,
    #[serde(rename = "alibaba_username")]
    pub service_username: String,
    #[serde(rename = "alibaba_password")]
    pub service_password: String,
    pub license: String,
}

impl UserCreate {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        notification_token: impl Into<String>,
        service_username: impl Into<String>,
        service_password: impl Into<String>,
        license: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            username: require_non_blank("username", username.into())?,
            password: require_non_blank("password", password.into())?,
            notification_token: notification_token.into(),
            service_username: service_username.into(),
            service_password: service_password.into(),
            license: require_non_blank("license", license.into())?,
        })
    }
}

impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("notification_token", &self.notification_token)
            .field("service_username", &self.service_username)
            .field("service_password", &"<redacted>")
            .field("license", &self.license)
            .finish()
    }
}
