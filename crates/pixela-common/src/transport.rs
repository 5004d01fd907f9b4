//! Transport abstraction: one request in, one decoded response out.
//!
//! The client never talks to an HTTP library directly. It builds an
//! [`ApiRequest`] and hands it to a [`Transport`], which makes the client
//! testable with a fake transport and keeps reqwest at the edge.

use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Header carrying the user token on authenticated calls.
pub const USER_TOKEN_HEADER: &str = "X-USER-TOKEN";

/// HTTP verbs used against the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Upper-case verb.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled request.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    /// Verb
    pub method: HttpMethod,
    /// Absolute URL
    pub url: String,
    /// Extra headers, in insertion order
    pub headers: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a request with no headers and no body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Looks up a header, ignoring ASCII case.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case(USER_TOKEN_HEADER) {
                    (key.as_str(), "<redacted>")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();
        // account creation carries the token in its body
        let body = self.body.as_ref().map(|body| {
            let mut body = body.clone();
            if let Some(token) = body.get_mut("token") {
                *token = serde_json::Value::String("<redacted>".to_string());
            }
            body
        });
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &body)
            .finish()
    }
}

/// A response whose body has already been decoded as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded body (`Null` when the body was empty)
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Creates a response.
    pub const fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single request and decodes the response body.
///
/// Implementations must not retry. Connection failures map to
/// `PixelaError::Network`, undecodable bodies to `PixelaError::Serialization`.
/// Non-2xx statuses are returned as ordinary responses; the caller decides.
pub trait Transport: Send + Sync {
    /// Sends `request` and blocks until a response or an error arrives.
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder() {
        let url = "https://example.test/graphs/graph1/20250920";
        let request = ApiRequest::new(HttpMethod::Put, url)
            .header(USER_TOKEN_HEADER, "secret-token")
            .json(&json!({"quantity": "20"}))
            .unwrap();

        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.header_value("x-user-token"), Some("secret-token"));
        assert_eq!(request.body, Some(json!({"quantity": "20"})));
        assert_eq!(request.header_value("Content-Type"), None);
    }

    #[test]
    fn test_debug_redacts_token() {
        let request = ApiRequest::new(HttpMethod::Post, "https://example.test/users")
            .header(USER_TOKEN_HEADER, "secret-token")
            .json(&json!({"token": "secret-token", "username": "alice"}))
            .unwrap();

        let rendered = format!("{request:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("alice"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_response_success_range() {
        assert!(ApiResponse::new(200, json!({})).is_success());
        assert!(ApiResponse::new(204, serde_json::Value::Null).is_success());
        assert!(!ApiResponse::new(400, json!({})).is_success());
        assert!(!ApiResponse::new(503, json!({})).is_success());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Get.as_str(), "GET");
    }
}
