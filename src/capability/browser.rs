use log::debug;

use super::{ActionError, LinkOpener};

/// Opens links with the platform's default handler (`xdg-open`, `open`, `start`).
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ActionError> {
        debug!("Opening {} in browser", url);
        open::that_detached(url).map_err(|e| ActionError::Open(e.to_string()))
    }
}
