//! Configuration schema for the Pixela client.

use crate::loader::ConfigError;
use std::fmt;
use validator::Validate;

/// The account a client acts for.
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct Credentials {
    /// Secret sent as `X-USER-TOKEN` (and once in the account-creation body).
    #[validate(length(min = 8, max = 128, message = "Token must be 8 to 128 characters"))]
    #[validate(custom(
        function = "crate::validation::validate_token_charset",
        message = "Token must be printable ASCII"
    ))]
    pub token: String,
    /// Account name, part of every authenticated URL.
    #[validate(regex(
        path = "crate::validation::USERNAME_REGEX",
        message = "Username must match [a-z][a-z0-9-]{1,32}"
    ))]
    pub username: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

/// Everything a `GraphTrackerClient` needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PixelaConfig {
    /// Credential pair.
    #[validate]
    pub credentials: Credentials,
    /// Users endpoint, without trailing slash handling guarantees.
    #[validate(url(message = "Base URL must be a valid URL"))]
    #[validate(custom(
        function = "crate::validation::validate_http_scheme",
        message = "Base URL must use http or https"
    ))]
    pub base_url: String,
    /// Request timeout; `None` keeps the HTTP library default.
    #[validate(range(min = 1, message = "Timeout must be at least 1 second"))]
    pub timeout_seconds: Option<u64>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl PixelaConfig {
    /// Config for `credentials` pointed at the public service.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Checks that credentials are present, then runs the field validators.
    pub fn validate_all(&self) -> Result<(), ConfigError> {
        if self.credentials.token.is_empty() {
            return Err(ConfigError::MissingConfig("TOKEN"));
        }
        if self.credentials.username.is_empty() {
            return Err(ConfigError::MissingConfig("USER_NAME"));
        }
        self.validate()?;
        Ok(())
    }

    /// `{base}` with any trailing slash removed.
    pub fn users_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// `{base}/{username}/graphs`
    pub fn graphs_url(&self) -> String {
        format!("{}/{}/graphs", self.users_url(), self.credentials.username)
    }
}
