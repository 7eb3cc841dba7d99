//! System clipboard via `arboard`.
//!
//! The clipboard is opened fresh on every write. Headless Linux sessions
//! (no X11/Wayland) fail here, which surfaces as an error alert.

use log::debug;

use super::{ActionError, Clipboard};

#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), ActionError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ActionError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ActionError::Clipboard(e.to_string()))?;
        debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
