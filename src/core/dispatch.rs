//! Runs one dispatch against the backend and folds every outcome into a
//! terminal `ShortenResult`. Never returns without one, even if the backend
//! hangs: the call is bounded by `timeout`.

use std::time::Duration;

use log::{info, warn};

use crate::backend::{ShortenBackend, ShortenError};
use crate::core::state::ShortenResult;

pub async fn dispatch(backend: &dyn ShortenBackend, url: &str, timeout: Duration) -> ShortenResult {
    let started = std::time::Instant::now();
    let outcome = match tokio::time::timeout(timeout, backend.shorten(url)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(ShortenError::Timeout),
    };

    match outcome {
        Ok(short_url) => {
            info!(
                "{} shortened {} in {}ms",
                backend.name(),
                url,
                started.elapsed().as_millis()
            );
            ShortenResult::Success { short_url }
        }
        Err(e) => {
            warn!("{} failed for {}: {}", backend.name(), url, e);
            ShortenResult::Failure {
                message: e.user_message(),
            }
        }
    }
}
