//! HTTP backend talking JSON to a shortening service.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::backend::types::{ShortenRequest, ShortenResponse, error_message};
use crate::backend::{ShortenBackend, ShortenError};

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/shorten", self.base_url)
    }
}

#[async_trait]
impl ShortenBackend for HttpBackend {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        let endpoint = self.endpoint();
        info!("Shorten request: POST {} (url_len={})", endpoint, url.len());

        let response = self
            .client
            .post(&endpoint)
            .json(&ShortenRequest { url })
            .send()
            .await
            .map_err(|e| ShortenError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Shorten response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| ShortenError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!("Shortening API error: {} - {}", status.as_u16(), body);
            return Err(ShortenError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: ShortenResponse =
            serde_json::from_str(&body).map_err(|e| ShortenError::Parse(e.to_string()))?;

        let short_url = parsed.short_url.trim().to_string();
        if short_url.is_empty() {
            return Err(ShortenError::Parse("empty shortUrl in response".to_string()));
        }

        info!("Shortened to {}", short_url);
        Ok(short_url)
    }
}
