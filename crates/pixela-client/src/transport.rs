//! Blocking reqwest transport.

use pixela_common::{ApiRequest, ApiResponse, HttpMethod, PixelaError, Result, Transport};
use pixela_config::PixelaConfig;
use reqwest::blocking::Client;
use reqwest::Method;
use std::time::Duration;
use tracing::{debug, instrument};

/// [`Transport`] over a blocking `reqwest` client.
///
/// Sends exactly one request per call. Timeouts come from the config, falling
/// back to reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the HTTP client from the configured timeout and user agent.
    pub fn from_config(config: &PixelaConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| PixelaError::network_with_source("Failed to create HTTP client", e))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Decodes a raw body. An empty body decodes to `Null`.
///
/// Successful responses must be JSON. Error responses that are not JSON (a
/// proxy's HTML error page, say) are kept as a string so the caller still
/// sees the status.
pub(crate) fn decode_body(status: u16, text: &str) -> Result<serde_json::Value> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(_) if !(200..300).contains(&status) => Ok(serde_json::Value::String(text.to_string())),
        Err(e) => Err(e.into()),
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self.client.request(to_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| PixelaError::network_with_source("Failed to read response body", e))?;
        debug!(status, "Received response");

        Ok(ApiResponse::new(status, decode_body(status, &text)?))
    }
}
