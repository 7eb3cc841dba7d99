//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::backend::{ShortenBackend, ShortenError};
use crate::capability::{ActionError, Clipboard, LinkOpener};

/// Answers every request with the same canned outcome and records the URLs it saw.
pub struct StubBackend {
    outcome: Result<String, ShortenError>,
    calls: Mutex<Vec<String>>,
}

impl StubBackend {
    pub fn ok(short_url: &str) -> Self {
        Self {
            outcome: Ok(short_url.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: ShortenError) -> Self {
        Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortenBackend for StubBackend {
    fn name(&self) -> &str {
        "stub"
    }

    async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.outcome.clone()
    }
}

/// Never answers.
pub struct HangingBackend;

#[async_trait]
impl ShortenBackend for HangingBackend {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn shorten(&self, _url: &str) -> Result<String, ShortenError> {
        std::future::pending().await
    }
}

/// Clipboard that remembers what was written, or refuses every write.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: RefCell<Vec<String>>,
    pub deny: bool,
}

impl Clipboard for RecordingClipboard {
    fn write(&self, text: &str) -> Result<(), ActionError> {
        if self.deny {
            return Err(ActionError::Clipboard("permission denied".to_string()));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
    pub blocked: bool,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), ActionError> {
        if self.blocked {
            return Err(ActionError::Open("popup blocked".to_string()));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Creates a test App backed by a stub that always succeeds.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubBackend::ok("https://short.ly/abc123")), 100)
}
