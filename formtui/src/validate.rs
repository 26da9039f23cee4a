//! Homepage URL validation.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum HomepageError {
    #[error("invalid URL: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("unsupported scheme `{0}`, use http or https")]
    UnsupportedScheme(String),
}

/// Validate a homepage link. Empty input is fine, the link is optional.
pub fn validate_homepage(input: &str) -> Result<Option<Url>, HomepageError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let url = Url::parse(trimmed)?;
    match url.scheme() {
        "http" | "https" => Ok(Some(url)),
        other => Err(HomepageError::UnsupportedScheme(other.to_string())),
    }
}
