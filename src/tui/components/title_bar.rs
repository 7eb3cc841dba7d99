//! # TitleBar Component
//!
//! Top status line: app name, backend, status text, and a spinner while a
//! dispatch is in flight.
//!
//! TitleBar is purely presentational. It receives everything as props and
//! keeps no state of its own.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Shorty (backend: host) | Shortening... | ⠹"`
//! 2. **Status message**: `"Shorty (backend: host) | Short link ready"`
//! 3. **Default**: `"Shorty (backend: host)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct TitleBar {
    /// Backend name (base URL)
    pub backend: String,
    /// Status message (e.g., "Shortening...", "Short link ready")
    pub status_message: String,
    /// A dispatch is outstanding
    pub loading: bool,
    /// Animation frame counter
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(backend: String, status_message: String, loading: bool, spinner_frame: usize) -> Self {
        Self {
            backend,
            status_message,
            loading,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        let base = format!("Shorty (backend: {})", self.backend);
        if self.loading {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            format!("{base} | {} | {glyph}", self.status_message)
        } else if self.status_message.is_empty() {
            base
        } else {
            format!("{base} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.loading {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(Line::from(Span::styled(self.text(), style)), area);
    }
}
