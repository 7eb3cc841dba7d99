//! Wire types for the shortening API.
//!
//! ```text
//! POST {base_url}/shorten      {"url": "https://example.com/very/long/path"}
//! 2xx                          {"shortUrl": "https://short.ly/abc123"}
//! 4xx/5xx                      {"message": "..."} | {"message": ["...", "..."]} | {"error": "..."}
//! ```

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct ShortenRequest<'a> {
    pub url: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct ShortenResponse {
    #[serde(rename = "shortUrl", alias = "short_url")]
    pub short_url: String,
}

/// Validation frameworks report either one message or a list of them.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    message: Option<ErrorMessage>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message in the body. `message` wins over `error`.
    pub fn into_message(self) -> Option<String> {
        let message = match self.message {
            Some(ErrorMessage::One(text)) => Some(text),
            Some(ErrorMessage::Many(items)) => Some(items.join("; ")),
            None => None,
        };
        message
            .or(self.error)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

/// Extract an error message from a raw error body, if it is JSON we understand.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}
