//! # ResultPanel Component
//!
//! Draws a `ResultView`: the error text, or the short link plus the action
//! hints. It never looks at `ShortenResult` directly, so anything visible
//! here is exactly what `presenter::project` allowed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::presenter::ResultView;
use crate::tui::component::Component;

/// Screen row of the short link inside the panel (0-based from the top).
pub const LINK_ROW: u16 = 0;

pub struct ResultPanel<'a> {
    pub view: ResultView<'a>,
}

impl<'a> ResultPanel<'a> {
    pub fn new(view: ResultView<'a>) -> Self {
        Self { view }
    }

    /// Area covered by the clickable link text, if the link is shown.
    ///
    /// A link wider than the panel wraps onto full-width rows, and every one
    /// of those rows is clickable.
    pub fn link_area(&self, area: Rect) -> Option<Rect> {
        let link = self.view.link_text?;
        if area.height == 0 || area.width == 0 {
            return None;
        }
        let link_width = link.width() as u16;
        if link_width <= area.width {
            return Some(Rect {
                x: area.x + (area.width - link_width) / 2,
                y: area.y + LINK_ROW,
                width: link_width,
                height: 1,
            });
        }
        let rows = link_width.div_ceil(area.width).min(area.height - LINK_ROW);
        Some(Rect {
            x: area.x,
            y: area.y + LINK_ROW,
            width: area.width,
            height: rows,
        })
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if let Some(message) = self.view.error_text {
            lines.push(Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        if let Some(link) = self.view.link_text {
            lines.push(Line::from(Span::styled(
                link,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
        }

        if self.view.actions_visible {
            let key = Style::default().fg(Color::Black).bg(Color::Gray);
            let label = Style::default().fg(Color::Gray);
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(" ^Y ", key),
                Span::styled(" Copy   ", label),
                Span::styled(" ^O ", key),
                Span::styled(" Open   ", label),
                Span::styled(" ^G ", key),
                Span::styled(" QR code", label),
            ]));
        }

        lines
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.view.is_hidden() {
            return;
        }
        let paragraph = Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::presenter::project_parts;
    use crate::core::state::ShortenResult;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(view: ResultView<'_>) -> String {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ResultPanel::new(view).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_renders_nothing() {
        let text = render_to_text(project_parts(&ShortenResult::Empty, None));
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_failure_shows_message_without_actions() {
        let result = ShortenResult::Failure {
            message: "invalid url: nothing to shorten".to_string(),
        };
        let text = render_to_text(project_parts(&result, None));
        assert!(text.contains("invalid url: nothing to shorten"));
        assert!(!text.contains("Copy"));
    }

    #[test]
    fn test_success_shows_link_and_actions() {
        let result = ShortenResult::Success {
            short_url: "https://short.ly/abc123".to_string(),
        };
        let text = render_to_text(project_parts(&result, None));
        assert!(text.contains("https://short.ly/abc123"));
        assert!(text.contains("Copy"));
        assert!(text.contains("Open"));
        assert!(text.contains("QR code"));
    }

    #[test]
    fn test_link_area_is_centered_on_first_row() {
        let result = ShortenResult::Success {
            short_url: "https://short.ly/abc123".to_string(), // 23 chars
        };
        let panel = ResultPanel::new(project_parts(&result, None));
        let area = Rect::new(0, 10, 61, 5);
        assert_eq!(panel.link_area(area), Some(Rect::new(19, 10, 23, 1)));

        let failed = ShortenResult::Failure {
            message: "x".to_string(),
        };
        let panel = ResultPanel::new(project_parts(&failed, None));
        assert_eq!(panel.link_area(area), None);
    }

    #[test]
    fn test_wrapped_link_area_covers_every_row() {
        let link = "https://short.ly/abc123"; // 23 columns
        let result = ShortenResult::Success {
            short_url: link.to_string(),
        };
        let mut panel = ResultPanel::new(project_parts(&result, None));
        let area = Rect::new(0, 0, 10, 6);
        let link_area = panel.link_area(area).unwrap();
        assert_eq!(link_area, Rect::new(0, 0, 10, 3));

        let mut terminal = Terminal::new(TestBackend::new(10, 6)).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        // The last character of the link lands on the third row
        let last_row: String = (0..10).map(|x| buffer[(x, 2)].symbol()).collect();
        assert!(last_row.contains('3'));
        assert!(link_area.contains(ratatui::layout::Position::new(1, 2)));
    }
}
