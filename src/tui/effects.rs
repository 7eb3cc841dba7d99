//! # Effect Runner
//!
//! Performs the `Effect` values returned by `update()`. Dispatches run on the
//! tokio runtime and report back through the action channel; clipboard, browser
//! and file effects are quick and run inline, turning their outcome into a
//! follow-up action.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::capability::{Clipboard, LinkOpener};
use crate::core::action::{Action, Effect, update};
use crate::core::dispatch::dispatch;
use crate::core::qr::save_svg;
use crate::core::state::App;

pub struct EffectRunner {
    pub clipboard: Box<dyn Clipboard>,
    pub opener: Box<dyn LinkOpener>,
    pub qr_output_dir: PathBuf,
    pub request_timeout: Duration,
    pub tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    /// Feed `action` through `update()` and perform effects until nothing is
    /// left to do. Returns true when the app should quit.
    pub fn drive(&self, app: &mut App, action: Action) -> bool {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            match update(app, action) {
                Effect::Quit => return true,
                effect => next = self.perform(app, effect),
            }
        }
        false
    }

    pub fn perform(&self, app: &App, effect: Effect) -> Option<Action> {
        match effect {
            Effect::None | Effect::Quit => None,
            Effect::SpawnDispatch { ticket, url } => {
                spawn_dispatch(app, ticket, url, self.request_timeout, self.tx.clone());
                None
            }
            Effect::CopyToClipboard(text) => match self.clipboard.write(&text) {
                Ok(()) => {
                    debug!("Copied {} to clipboard", text);
                    Some(Action::ActionSucceeded("Copied to clipboard".to_string()))
                }
                Err(e) => {
                    warn!("Copy failed: {}", e);
                    Some(Action::ActionFailed(format!("Copy failed: {e}")))
                }
            },
            Effect::OpenLink(url) => {
                // Best effort; a blocked browser is not worth a notice
                if let Err(e) = self.opener.open(&url) {
                    warn!("Open failed for {}: {}", url, e);
                }
                None
            }
            Effect::SaveQr(artifact) => match save_svg(&artifact, &self.qr_output_dir) {
                Ok(path) => Some(Action::ActionSucceeded(format!(
                    "QR code saved to {}",
                    path.display()
                ))),
                Err(e) => {
                    warn!("Saving QR code failed: {}", e);
                    Some(Action::ActionFailed(format!("Save failed: {e}")))
                }
            },
        }
    }
}

fn spawn_dispatch(
    app: &App,
    ticket: u64,
    url: String,
    timeout: Duration,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning dispatch #{}", ticket);
    let backend = app.backend.clone();
    tokio::spawn(async move {
        let result = dispatch(backend.as_ref(), &url, timeout).await;
        if tx.send(Action::DispatchResolved { ticket, result }).is_err() {
            warn!("Failed to send result of dispatch #{}: receiver dropped", ticket);
        }
    });
}
