//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, background
//!   actions, or an alert expiring.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.
//!
//! ## Key Bindings
//!
//! | Key        | Action                                   |
//! |------------|------------------------------------------|
//! | Enter      | Shorten (ignored while the field is empty) |
//! | F5         | Shorten, even with an empty field        |
//! | Ctrl+Y     | Copy the short link                      |
//! | Ctrl+O     | Open the short link in the browser       |
//! | Ctrl+G     | Show the QR code                         |
//! | Ctrl+S     | Save the QR code as SVG                  |
//! | Esc        | Close the QR code, or quit               |
//! | Ctrl+C     | Quit                                     |
//! | Click link | Copy the short link                      |

mod component;
mod components;
mod effects;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::backend::HttpBackend;
use crate::capability::{SystemBrowser, SystemClipboard};
use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::effects::EffectRunner;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long a notice stays on screen.
pub const ALERT_TTL: Duration = Duration::from_secs(3);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    /// Alert id on screen and when it goes away.
    pub alert_deadline: Option<(u64, Instant)>,
    /// Where the short link was last drawn, for click-to-copy.
    pub link_area: Option<Rect>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            alert_deadline: None,
            link_area: None,
        }
    }

    fn link_hit(&self, col: u16, row: u16) -> bool {
        self.link_area
            .is_some_and(|area| area.contains(Position::new(col, row)))
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is ignored by terminals that lack it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Map a terminal event to the action it triggers, updating TUI-local state
/// (the input buffer) along the way.
fn action_for(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Escape if app.qr.is_some() => Some(Action::CloseQr),
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::Copy => Some(Action::Copy),
        TuiEvent::Open => Some(Action::Open),
        TuiEvent::GenerateQr => Some(Action::GenerateQr(app.qr_size)),
        TuiEvent::SaveQr => Some(Action::SaveQr),
        TuiEvent::MouseClick(col, row) if tui.link_hit(*col, *row) => Some(Action::Copy),
        TuiEvent::MouseClick(..) | TuiEvent::Resize => None,
        _ => match tui.input_box.handle_event(event)? {
            InputEvent::Edited => Some(Action::InputChanged(tui.input_box.buffer.clone())),
            InputEvent::Submit => Some(Action::Submit),
            InputEvent::CursorMoved => None,
        },
    }
}

/// Start or clear the dismissal timer to match the alert on screen.
fn sync_alert_deadline(app: &App, tui: &mut TuiState) {
    tui.alert_deadline = match (&app.alert, tui.alert_deadline) {
        (None, _) => None,
        (Some(alert), Some((id, deadline))) if alert.id == id => Some((id, deadline)),
        (Some(alert), _) => Some((alert.id, Instant::now() + ALERT_TTL)),
    };
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = Arc::new(HttpBackend::new(config.backend_url.clone()));
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let runner = EffectRunner {
        clipboard: Box::new(SystemClipboard),
        opener: Box::new(SystemBrowser),
        qr_output_dir: config.qr_output_dir.clone(),
        request_timeout: config.request_timeout,
        tx,
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = action_for(&event, &app, &mut tui)
                && runner.drive(&mut app, action)
            {
                should_quit = true;
                break;
            }
        }

        // Finished dispatches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if runner.drive(&mut app, action) {
                should_quit = true;
            }
        }

        sync_alert_deadline(&app, &mut tui);
        if let Some((id, deadline)) = tui.alert_deadline
            && Instant::now() >= deadline
        {
            runner.drive(&mut app, Action::DismissAlert(id));
            tui.alert_deadline = None;
            needs_redraw = true;
        }
    }

    info!("Shorty shutting down");
    ratatui::restore();
    Ok(())
}
