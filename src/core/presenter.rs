//! # Result Presentation
//!
//! Derives what the result area shows from the current `ShortenResult`.
//! The renderer never decides visibility itself; it draws a `ResultView`.
//!
//! | Variant            | error | link | actions | QR  |
//! |--------------------|-------|------|---------|-----|
//! | Empty              | -     | -    | -       | -   |
//! | Failure            | yes   | -    | -       | -   |
//! | Success            | -     | yes  | yes     | -   |
//! | Success + QR       | -     | yes  | -       | yes |

use crate::core::qr::QrArtifact;
use crate::core::state::{App, ShortenResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultView<'a> {
    pub error_text: Option<&'a str>,
    pub link_text: Option<&'a str>,
    pub actions_visible: bool,
    pub qr: Option<&'a QrArtifact>,
}

impl ResultView<'_> {
    pub fn qr_visible(&self) -> bool {
        self.qr.is_some()
    }

    /// Nothing to show at all.
    pub fn is_hidden(&self) -> bool {
        self.error_text.is_none() && self.link_text.is_none()
    }
}

pub fn project(app: &App) -> ResultView<'_> {
    project_parts(&app.result, app.qr.as_ref())
}

pub fn project_parts<'a>(result: &'a ShortenResult, qr: Option<&'a QrArtifact>) -> ResultView<'a> {
    match result {
        ShortenResult::Empty => ResultView {
            error_text: None,
            link_text: None,
            actions_visible: false,
            qr: None,
        },
        ShortenResult::Failure { message } => ResultView {
            error_text: Some(message),
            link_text: None,
            actions_visible: false,
            qr: None,
        },
        ShortenResult::Success { short_url } => {
            // A QR built for some other link is never shown
            let qr = qr.filter(|artifact| artifact.text == *short_url);
            ResultView {
                error_text: None,
                link_text: Some(short_url),
                actions_visible: qr.is_none(),
                qr,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: &str = "https://short.ly/abc123";

    fn success() -> ShortenResult {
        ShortenResult::Success {
            short_url: SHORT.to_string(),
        }
    }

    #[test]
    fn test_empty_hides_everything() {
        let view = project_parts(&ShortenResult::Empty, None);
        assert!(view.is_hidden());
        assert!(!view.actions_visible);
        assert!(!view.qr_visible());
    }

    #[test]
    fn test_failure_shows_only_error() {
        let result = ShortenResult::Failure {
            message: "invalid url: nothing to shorten".to_string(),
        };
        let view = project_parts(&result, None);
        assert_eq!(view.error_text, Some("invalid url: nothing to shorten"));
        assert_eq!(view.link_text, None);
        assert!(!view.actions_visible);
        assert!(!view.qr_visible());
    }

    #[test]
    fn test_success_shows_link_and_actions() {
        let result = success();
        let view = project_parts(&result, None);
        assert_eq!(view.error_text, None);
        assert_eq!(view.link_text, Some(SHORT));
        assert!(view.actions_visible);
        assert!(!view.qr_visible());
    }

    #[test]
    fn test_qr_replaces_actions() {
        let result = success();
        let qr = QrArtifact::generate(SHORT, 100).unwrap();
        let view = project_parts(&result, Some(&qr));
        assert!(view.qr_visible());
        assert!(!view.actions_visible);
        assert_eq!(view.link_text, Some(SHORT));
    }

    #[test]
    fn test_qr_for_other_link_is_ignored() {
        let result = success();
        let stale = QrArtifact::generate("https://short.ly/old", 100).unwrap();
        let view = project_parts(&result, Some(&stale));
        assert!(!view.qr_visible());
        assert!(view.actions_visible);
    }

    #[test]
    fn test_failure_never_shows_qr() {
        let result = ShortenResult::Failure {
            message: "x".to_string(),
        };
        let qr = QrArtifact::generate(SHORT, 100).unwrap();
        assert!(!project_parts(&result, Some(&qr)).qr_visible());
    }
}
