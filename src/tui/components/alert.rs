//! # AlertBanner Component
//!
//! One-line transient notice ("Copied to clipboard", save/copy failures).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::{Alert, AlertKind};
use crate::tui::component::Component;

pub struct AlertBanner<'a> {
    pub alert: &'a Alert,
}

impl Component for AlertBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (icon, style) = match self.alert.kind {
            AlertKind::Info => ("✔", Style::default().fg(Color::Black).bg(Color::Green)),
            AlertKind::Error => ("✘", Style::default().fg(Color::White).bg(Color::Red)),
        };
        let banner = Paragraph::new(format!(" {icon} {} ", self.alert.text))
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD));
        frame.render_widget(banner, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_alert_text() {
        let alert = Alert {
            id: 1,
            kind: AlertKind::Info,
            text: "Copied to clipboard".to_string(),
        };
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|f| AlertBanner { alert: &alert }.render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Copied to clipboard"));
    }
}
