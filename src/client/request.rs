//! Request description: verb, endpoint path, payload and how to encode it.

use crate::error::ClientError;
use serde::Serialize;
use serde_json::Value;

/// HTTP verbs the service uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Where the payload ends up on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// No payload is sent
    Empty,
    /// URL query string
    Query,
    /// JSON body
    Json,
    /// `application/x-www-form-urlencoded` body
    Form,
}

/// One call against the service
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: HttpMethod,
    path: String,
    payload: Option<Value>,
    authenticated: bool,
    form_encoded: bool,
}

impl ApiRequest {
    /// `path` is appended to the configured base URL and should start with `/`.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            payload: None,
            authenticated: false,
            form_encoded: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a payload. It must serialize to a JSON object.
    pub fn payload<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self, ClientError> {
        let value = serde_json::to_value(payload)
            .map_err(|e| ClientError::Validation(format!("Could not serialize payload: {}", e)))?;
        if !value.is_object() {
            return Err(ClientError::Validation(
                "Request payload must be a key/value object".to_string(),
            ));
        }
        self.payload = Some(value);
        Ok(self)
    }

    /// Send the stored bearer token, if there is one.
    pub fn authenticated(mut self) -> Self {
        self.authenticated = true;
        self
    }

    /// Encode a POST/PUT payload as form data instead of JSON.
    pub fn form_encoded(mut self) -> Self {
        self.form_encoded = true;
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn payload_value(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Placement of the payload: GET uses the query string, POST/PUT a JSON
    /// or form body, DELETE sends nothing.
    pub fn encoding(&self) -> Encoding {
        if self.payload.is_none() {
            return Encoding::Empty;
        }
        match self.method {
            HttpMethod::Get => Encoding::Query,
            HttpMethod::Delete => Encoding::Empty,
            HttpMethod::Post | HttpMethod::Put if self.form_encoded => Encoding::Form,
            HttpMethod::Post | HttpMethod::Put => Encoding::Json,
        }
    }
}
