use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while asking the backend for a short link.
/// Every variant maps to a user-facing message via `user_message()`.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortenError {
    /// Network-level failure (DNS, connection refused, reset mid-body).
    Transport(String),
    /// The backend did not answer within the configured request timeout.
    Timeout,
    /// Backend answered with a non-2xx status. `message` is whatever the
    /// error body carried, if anything usable.
    Api { status: u16, message: Option<String> },
    /// 2xx response whose body did not contain a short URL.
    Parse(String),
}

impl ShortenError {
    /// The text shown in the result panel for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ShortenError::Transport(_) => "could not reach the shortening service".to_string(),
            ShortenError::Timeout => "the shortening service did not respond in time".to_string(),
            ShortenError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            ShortenError::Api {
                status,
                message: None,
            } => format!("the shortening service returned an error (HTTP {status})"),
            ShortenError::Parse(_) => "unexpected response from the shortening service".to_string(),
        }
    }
}

impl fmt::Display for ShortenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortenError::Transport(msg) => write!(f, "transport error: {msg}"),
            ShortenError::Timeout => write!(f, "request timed out"),
            ShortenError::Api { status, message } => write!(
                f,
                "API error (HTTP {status}): {}",
                message.as_deref().unwrap_or("<no message>")
            ),
            ShortenError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ShortenError {}

/// A service that turns a long URL into a short one.
#[async_trait]
pub trait ShortenBackend: Send + Sync {
    /// Short name used in logs and the title bar.
    fn name(&self) -> &str;

    /// Submit `url` and return the short URL the backend assigned.
    async fn shorten(&self, url: &str) -> Result<String, ShortenError>;
}
