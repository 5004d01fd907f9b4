//! Default values.

use crate::schema::{Credentials, PixelaConfig};

/// Public users endpoint of the service.
pub const DEFAULT_BASE_URL: &str = "https://pixe.la/v1/users";

/// Sent as `User-Agent` unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("pixela-client/", env!("CARGO_PKG_VERSION"));

impl Default for PixelaConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::new(String::new(), String::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
