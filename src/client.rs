//! Request Executor
//!
//! The single gateway to the monitoring service. Turns an [`ApiRequest`] into
//! one HTTP round trip, attaches the bearer token when asked to, and validates
//! the body into the read schema the call site expects: one instance via
//! [`ApiClient::execute_one`] or an ordered sequence via
//! [`ApiClient::execute_many`]. There are no retries.

use crate::config::ClientConfig;
use crate::error::ClientError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

mod request;
mod response;

pub use request::{ApiRequest, Encoding, HttpMethod};
pub use response::{decode_many, decode_one, error_message};

/// HTTP client bound to one base URL and token
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Build a client from the current configuration. Timeouts come from the config.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .no_proxy()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the outgoing request without sending it.
    pub fn build(&self, request: &ApiRequest) -> Result<reqwest::Request, ClientError> {
        let raw_url = self.url_for(request.path());
        let url = Url::parse(&raw_url)
            .map_err(|e| ClientError::Validation(format!("Invalid URL '{}': {}", raw_url, e)))?;

        let encoding = request.encoding();
        let mut builder = self.http.request(request.method().to_reqwest(), url);

        if request.is_authenticated() {
            if self.token.is_empty() {
                debug!(path = request.path(), "No stored token, sending unauthenticated");
            } else {
                builder = builder.bearer_auth(&self.token);
                if encoding != Encoding::Form {
                    builder = builder.header(CONTENT_TYPE, "application/json");
                }
            }
        }

        if let Some(payload) = request.payload_value() {
            builder = match encoding {
                Encoding::Query => builder.query(payload),
                Encoding::Json => builder.json(payload),
                Encoding::Form => builder.form(payload),
                Encoding::Empty => builder,
            };
        }

        builder.build().map_err(ClientError::from)
    }

    /// Send `request` and validate the body as a single `T`.
    pub async fn execute_one<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, ClientError> {
        let body = self.send(request).await?;
        decode_one(&body).inspect_err(|e| log_schema_failure(request, e))
    }

    /// Send `request` and validate the body as an ordered sequence of `T`.
    pub async fn execute_many<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<Vec<T>, ClientError> {
        let body = self.send(request).await?;
        decode_many(&body).inspect_err(|e| log_schema_failure(request, e))
    }

    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, ClientError> {
        let http_request = self.build(request)?;
        debug!(
            method = request.method().as_str(),
            url = %http_request.url(),
            authenticated = request.is_authenticated() && !self.token.is_empty(),
            encoding = ?request.encoding(),
            "Sending request"
        );

        let response = self.http.execute(http_request).await.map_err(|e| {
            warn!(path = request.path(), "Request failed: {}", e);
            ClientError::from(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::from)?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!(
                path = request.path(),
                status = status.as_u16(),
                "Server rejected request: {}",
                message
            );
            return Err(ClientError::Transport {
                status: Some(status.as_u16()),
                message,
            });
        }

        debug!(status = status.as_u16(), bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }
}

fn log_schema_failure(request: &ApiRequest, error: &ClientError) {
    warn!(path = request.path(), "Response failed validation: {}", error);
}
