//! # Actions
//!
//! Every user gesture and every finished request becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Backend answers? That's `Action::DispatchResolved { ticket, result }`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! event loop should perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Dispatch ordering
//!
//! Each submit gets a ticket from a counter. A resolved dispatch is shown only
//! if its ticket is newer than the one on screen, so a slow early request can
//! never overwrite the answer to a later one.

use log::{debug, info, warn};

use crate::core::qr::QrArtifact;
use crate::core::state::{AlertKind, App, ShortenResult};
use crate::core::validate::validate_url;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Input box content changed; carries the full new text.
    InputChanged(String),
    Submit,
    DispatchResolved { ticket: u64, result: ShortenResult },
    Copy,
    Open,
    /// Build a QR code for the current link at the given pixel size.
    GenerateQr(u32),
    CloseQr,
    SaveQr,
    /// A side effect finished; show its notice.
    ActionSucceeded(String),
    /// A side effect failed; show why. The result is left alone.
    ActionFailed(String),
    DismissAlert(u64),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnDispatch { ticket: u64, url: String },
    CopyToClipboard(String),
    OpenLink(String),
    SaveQr(QrArtifact),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::InputChanged(text) => {
            app.input_value = text;
            Effect::None
        }
        Action::Submit => match validate_url(&app.input_value) {
            Ok(url) => {
                app.issued_ticket += 1;
                app.status_message = "Shortening...".to_string();
                info!("Dispatch #{} for {}", app.issued_ticket, url);
                Effect::SpawnDispatch {
                    ticket: app.issued_ticket,
                    url,
                }
            }
            Err(e) => {
                debug!("Rejected input before dispatch: {}", e);
                // Nothing in flight can overwrite this verdict
                app.applied_ticket = app.issued_ticket;
                app.replace_result(ShortenResult::Failure {
                    message: e.to_string(),
                });
                app.status_message = "Invalid URL".to_string();
                Effect::None
            }
        },
        Action::DispatchResolved { ticket, result } => {
            if ticket <= app.applied_ticket {
                warn!(
                    "Dropping stale dispatch #{} (showing #{})",
                    ticket, app.applied_ticket
                );
                return Effect::None;
            }
            app.applied_ticket = ticket;
            app.status_message = match &result {
                ShortenResult::Success { .. } => "Short link ready".to_string(),
                ShortenResult::Failure { .. } => "Request failed".to_string(),
                ShortenResult::Empty => String::new(),
            };
            if app.is_loading() {
                app.status_message = "Shortening...".to_string();
            }
            app.replace_result(result);
            Effect::None
        }
        Action::Copy => match app.result.short_url() {
            Some(url) => Effect::CopyToClipboard(url.to_string()),
            None => Effect::None,
        },
        Action::Open => match app.result.short_url() {
            Some(url) => Effect::OpenLink(url.to_string()),
            None => Effect::None,
        },
        Action::GenerateQr(size) => {
            let Some(url) = app.result.short_url() else {
                return Effect::None;
            };
            match QrArtifact::generate(url, size) {
                Ok(artifact) => {
                    debug!("QR generated: {}x{} modules", artifact.width, artifact.width);
                    app.qr = Some(artifact);
                }
                Err(e) => {
                    warn!("QR generation failed: {}", e);
                    app.raise_alert(AlertKind::Error, e.to_string());
                }
            }
            Effect::None
        }
        Action::CloseQr => {
            app.qr = None;
            Effect::None
        }
        Action::SaveQr => match &app.qr {
            Some(artifact) => Effect::SaveQr(artifact.clone()),
            None => Effect::None,
        },
        Action::ActionSucceeded(notice) => {
            app.raise_alert(AlertKind::Info, notice);
            Effect::None
        }
        Action::ActionFailed(message) => {
            app.raise_alert(AlertKind::Error, message);
            Effect::None
        }
        Action::DismissAlert(id) => {
            if app.alert.as_ref().is_some_and(|alert| alert.id == id) {
                app.alert = None;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
