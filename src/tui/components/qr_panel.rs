//! # QrPanel Component
//!
//! Shows the QR code for the current short link in place of the action row.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::qr::QrArtifact;
use crate::tui::component::Component;

pub struct QrPanel<'a> {
    pub artifact: &'a QrArtifact,
}

impl<'a> QrPanel<'a> {
    pub fn new(artifact: &'a QrArtifact) -> Self {
        Self { artifact }
    }
}

impl Component for QrPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let code_lines = self.artifact.render_lines();
        let code_height = code_lines.len() as u16;

        let [code_area, hint_area] = Layout::vertical([
            Constraint::Length(code_height),
            Constraint::Length(1),
        ])
        .flex(Flex::Start)
        .areas(area);

        if area.height < code_height + 1 || area.width < self.artifact.padded_width() as u16 {
            let warning = Paragraph::new("Terminal too small for the QR code. Ctrl+S saves it as SVG.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(warning, area);
            return;
        }

        let code = Paragraph::new(code_lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::Black));
        frame.render_widget(code, code_area);

        let hint = Paragraph::new(format!(
            "^S save as SVG ({}px)   Esc back to actions",
            self.artifact.size
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }
}
