//! Validation helpers and patterns used by the configuration schema

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Usernames start with a lowercase letter, followed by 1 to 32 of `[a-z0-9-]`.
pub static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9-]{1,32}$").expect("Invalid username regex pattern")
});

/// Tokens may only contain printable ASCII, space included.
pub fn validate_token_charset(token: &str) -> Result<(), ValidationError> {
    if token.bytes().all(|b| (b' '..=b'~').contains(&b)) {
        Ok(())
    } else {
        Err(ValidationError::new("non_printable_token"))
    }
}

/// The base URL must use http or https.
pub fn validate_http_scheme(base_url: &str) -> Result<(), ValidationError> {
    let parsed = url::Url::parse(base_url).map_err(|_| ValidationError::new("invalid_url"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::new("unsupported_url_scheme")),
    }
}
