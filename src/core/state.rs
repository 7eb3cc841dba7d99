//! # Application State
//!
//! Everything the shortener page knows, in one owned struct. No TUI types.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ShortenBackend>  // where dispatches go
//! ├── input_value: String               // mirror of the input box
//! ├── result: ShortenResult             // Empty | Success | Failure
//! ├── qr: Option<QrArtifact>            // QR for the current Success, if requested
//! ├── alert: Option<Alert>              // transient notice (copied, saved, failed)
//! ├── issued_ticket / applied_ticket    // dispatch sequencing
//! ├── qr_size: u32                      // default QR edge in pixels
//! └── status_message: String            // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::backend::ShortenBackend;
use crate::core::config::ResolvedConfig;
use crate::core::qr::QrArtifact;

/// Outcome of the most recent dispatch. Replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShortenResult {
    #[default]
    Empty,
    Success {
        short_url: String,
    },
    Failure {
        message: String,
    },
}

impl ShortenResult {
    pub fn short_url(&self) -> Option<&str> {
        match self {
            ShortenResult::Success { short_url } => Some(short_url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub text: String,
}

pub struct App {
    pub backend: Arc<dyn ShortenBackend>,
    pub input_value: String,
    pub result: ShortenResult,
    pub qr: Option<QrArtifact>,
    pub alert: Option<Alert>,
    /// Ticket of the newest dispatch sent to the backend.
    pub issued_ticket: u64,
    /// Ticket of the dispatch whose result is currently shown.
    pub applied_ticket: u64,
    pub qr_size: u32,
    pub status_message: String,
    next_alert_id: u64,
}

impl App {
    pub fn new(backend: Arc<dyn ShortenBackend>, qr_size: u32) -> Self {
        Self {
            backend,
            input_value: String::new(),
            result: ShortenResult::Empty,
            qr: None,
            alert: None,
            issued_ticket: 0,
            applied_ticket: 0,
            qr_size,
            status_message: String::from("Paste a long URL and press Enter"),
            next_alert_id: 0,
        }
    }

    pub fn from_config(backend: Arc<dyn ShortenBackend>, config: &ResolvedConfig) -> Self {
        Self::new(backend, config.qr_size)
    }

    /// A dispatch newer than the displayed result is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.issued_ticket > self.applied_ticket
    }

    pub fn show_alert(&self) -> bool {
        self.alert.is_some()
    }

    /// Swap in a new result. Any QR belongs to the old result and goes with it.
    pub fn replace_result(&mut self, result: ShortenResult) {
        self.result = result;
        self.qr = None;
    }

    pub fn raise_alert(&mut self, kind: AlertKind, text: impl Into<String>) {
        self.next_alert_id += 1;
        self.alert = Some(Alert {
            id: self.next_alert_id,
            kind,
            text: text.into(),
        });
    }
}
