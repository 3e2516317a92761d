//! HTTP response description embedded in the invocation envelope

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::HandlerError;

/// The response the function host relays to the original caller.
///
/// Serialized as `{"statusCode": .., "body": "..", "headers": {..}}`; the
/// camelCase names are fixed by the host.
///
/// # Example
/// ```
/// use transaction_api_sdk::HttpResponse;
///
/// let res = HttpResponse::new(202).with_header("Retry-After", "5");
/// assert_eq!(res.status_code, 202);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Response body, already encoded
    #[serde(default)]
    pub body: String,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    /// Create a response with the given status code and an empty body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            body: String::new(),
            headers: HashMap::new(),
        }
    }

    /// Create a 200 OK response with JSON body.
    pub fn ok<T: Serialize>(body: &T) -> Result<Self, HandlerError> {
        Self::json(200, body)
    }

    /// Create a JSON response with a custom status code.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Result<Self, HandlerError> {
        Ok(Self::new(status_code)
            .with_header("Content-Type", "application/json")
            .with_body(serde_json::to_string(body)?))
    }

    /// Add a header to the response (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}
