//! Pre-flight URL validation.
//!
//! Runs before any request is made. The rule: the trimmed input must parse as
//! an absolute URL, use `http` or `https`, and name a host. No scheme
//! guessing, so `example.com/page` is rejected rather than silently
//! rewritten.
//!
//! The WHATWG parser repairs a lot (`https:example.com`, backslashes,
//! embedded tabs). Input that only parses because of such a repair is
//! rejected, and what gets submitted is the parsed URL's serialization,
//! never the raw text.

use std::fmt;

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty,
    Malformed(String),
    UnsupportedScheme(String),
    MissingHost,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "invalid url: nothing to shorten"),
            ValidationError::Malformed(reason) => write!(f, "invalid url: {reason}"),
            ValidationError::UnsupportedScheme(scheme) => {
                write!(f, "invalid url: only http and https links can be shortened (got {scheme}:)")
            }
            ValidationError::MissingHost => write!(f, "invalid url: missing host"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate raw input and return the normalized URL that should be submitted.
pub fn validate_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::Malformed("contains whitespace".to_string()));
    }
    if trimmed.contains('\\') {
        return Err(ValidationError::Malformed("contains a backslash".to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| ValidationError::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ValidationError::UnsupportedScheme(other.to_string())),
    }

    // Scheme is ASCII, so its length is a char boundary in the raw input
    if !trimmed[url.scheme().len()..].starts_with("://") {
        return Err(ValidationError::Malformed(
            "expected \"//\" after the scheme".to_string(),
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::MissingHost);
    }

    Ok(url.to_string())
}
