//! # Platform Capabilities
//!
//! Side effects the result actions need from the host: writing the system
//! clipboard and handing a link to the browser. Both are traits so the event
//! loop can be driven with recording fakes in tests.
//!
//! Handles are acquired per call and dropped straight after; nothing here
//! holds a lease on the clipboard or a browser window.

mod browser;
mod clipboard;

use std::fmt;

pub use browser::SystemBrowser;
pub use clipboard::SystemClipboard;

/// Failure of a one-shot result action. Never touches the shorten result.
#[derive(Debug)]
pub enum ActionError {
    Clipboard(String),
    Open(String),
    Qr(String),
    Io(std::io::Error),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Clipboard(msg) => write!(f, "clipboard unavailable: {msg}"),
            ActionError::Open(msg) => write!(f, "could not open link: {msg}"),
            ActionError::Qr(msg) => write!(f, "could not build QR code: {msg}"),
            ActionError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<std::io::Error> for ActionError {
    fn from(e: std::io::Error) -> Self {
        ActionError::Io(e)
    }
}

pub trait Clipboard {
    fn write(&self, text: &str) -> Result<(), ActionError>;
}

pub trait LinkOpener {
    /// Best effort. Callers treat an error as non-fatal.
    fn open(&self, url: &str) -> Result<(), ActionError>;
}
