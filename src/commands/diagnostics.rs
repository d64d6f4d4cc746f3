use crate::client::{ApiClient, ApiRequest};
use crate::error::ClientError;
use serde_json::Value;

pub struct DiagnosticsCommandService;

impl DiagnosticsCommandService {
    /// Ask the server to push a test alert through the user's notification token.
    ///
    /// The reply is opaque; a JSON string is returned as-is, anything else as compact JSON.
    pub async fn test_notification(client: &ApiClient) -> Result<String, ClientError> {
        let reply: Value = client
            .execute_one(&ApiRequest::get("/test").authenticated())
            .await?;
        Ok(match reply {
            Value::String(message) => message,
            other => other.to_string(),
        })
    }
}
