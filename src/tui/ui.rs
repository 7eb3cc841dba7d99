//! Screen layout. Top to bottom:
//!
//! ```text
//! ┌ title bar ──────────────────────────────┐
//! │ header                                  │
//! │ ╭ Long URL ─────────────────────────╮   │
//! │ ╰───────────────────────────────────╯   │
//! │ alert banner                            │
//! │ result panel (link, actions or QR)      │
//! └─────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::presenter::project;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AlertBanner, QrPanel, ResultPanel, TitleBar};

const HEADER_HEIGHT: u16 = 2;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let input_height = tui.input_box.calculate_height(area.width);
    let [title_area, header_area, input_area, alert_area, result_area] = Layout::vertical([
        Length(1),
        Length(HEADER_HEIGHT),
        Length(input_height),
        Length(1),
        Min(0),
    ])
    .areas(area);

    TitleBar::new(
        app.backend.name().to_string(),
        app.status_message.clone(),
        app.is_loading(),
        spinner_frame,
    )
    .render(frame, title_area);

    draw_header(frame, header_area);
    tui.input_box.render(frame, input_area);

    if let Some(alert) = &app.alert {
        AlertBanner { alert }.render(frame, alert_area);
    }

    let view = project(app);
    let mut panel = ResultPanel::new(view);
    match view.qr {
        Some(artifact) => {
            let [link_area, qr_area] = Layout::vertical([Length(2), Min(0)]).areas(result_area);
            tui.link_area = panel.link_area(link_area);
            panel.render(frame, link_area);
            QrPanel::new(artifact).render(frame, qr_area);
        }
        None => {
            tui.link_area = panel.link_area(result_area);
            panel.render(frame, result_area);
        }
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "URL Shortener",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Paste a long URL below to get a short link you can copy, open or scan.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}
