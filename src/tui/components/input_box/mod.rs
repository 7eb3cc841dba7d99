//! # InputBox Component
//!
//! The long-URL field.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, bracketed paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on Enter when the buffer is non-empty, and always on F5
//!
//! ## State Management
//!
//! The buffer is internal state; the event loop mirrors it into
//! `App::input_value` on every `Edited` event. Submitting does not clear it.
//! Cursor position and scroll state are encapsulated in `CursorState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_ROWS, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    row_count, wrap_options,
};

const PLACEHOLDER: &str = "https://example.com/a/very/long/path";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User asked to shorten the current text
    Submit,
    /// Buffer content changed
    Edited,
    /// Only the cursor moved
    CursorMoved,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor and scroll tracking
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: CursorState::new(),
        }
    }

    /// Height needed for the current buffer, clamped to the visible row limit.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let rows = row_count(&self.buffer, inner_width(content_width));
        rows.min(MAX_VISIBLE_ROWS) + VERTICAL_OVERHEAD
    }

    fn insert(&mut self, text: &str) -> Option<InputEvent> {
        // The field holds a single URL: drop newlines and other control chars
        let clean: String = text.chars().filter(|c| !c.is_control()).collect();
        if clean.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, &clean);
        self.cursor.pos += clean.len();
        Some(InputEvent::Edited)
    }

    fn visible_lines(&self, content_width: u16) -> Vec<Line<'static>> {
        if self.buffer.is_empty() {
            return vec![Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))];
        }
        textwrap::wrap(&self.buffer, wrap_options(inner_width(content_width)))
            .into_iter()
            .skip(self.cursor.scroll_offset as usize)
            .take(MAX_VISIBLE_ROWS as usize)
            .map(|row| Line::from(row.into_owned()))
            .collect()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Long URL (Enter to shorten)");

        let input = Paragraph::new(self.visible_lines(area.width))
            .block(block)
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);

        let (cursor_x, cursor_y) = self.cursor.screen_pos(&self.buffer, area);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::Edited
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::Edited
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1)
                .then_some(InputEvent::CursorMoved),
            // Enter is gated on a non-empty field; F5 always submits
            TuiEvent::Submit => (!self.buffer.is_empty()).then_some(InputEvent::Submit),
            TuiEvent::ForceSubmit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::Edited));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::Edited));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::Edited));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_enter_on_empty_buffer_does_nothing() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_enter_submits_and_keeps_buffer() {
        let mut input = InputBox::new();
        type_text(&mut input, "https://example.com");
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(InputEvent::Submit));
        assert_eq!(input.buffer, "https://example.com");
    }

    #[test]
    fn test_whitespace_only_still_submits_on_enter() {
        // Length gate only; rejecting blanks is the dispatcher's job
        let mut input = InputBox::new();
        type_text(&mut input, "  ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), Some(InputEvent::Submit));
    }

    #[test]
    fn test_force_submit_ignores_gate() {
        let mut input = InputBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::ForceSubmit),
            Some(InputEvent::Submit)
        );
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut input = InputBox::new();
        let res = input.handle_event(&TuiEvent::Paste("https://example.com/\npath\r\n".into()));
        assert_eq!(res, Some(InputEvent::Edited));
        assert_eq!(input.buffer, "https://example.com/path");
        assert_eq!(input.handle_event(&TuiEvent::Paste("\n".into())), None);
    }

    #[test]
    fn test_cursor_editing_in_the_middle() {
        let mut input = InputBox::new();
        type_text(&mut input, "http://x.io");
        input.handle_event(&TuiEvent::CursorHome);
        for _ in 0..4 {
            input.handle_event(&TuiEvent::CursorRight);
        }
        input.handle_event(&TuiEvent::InputChar('s'));
        assert_eq!(input.buffer, "https://x.io");

        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
        input.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(input.handle_event(&TuiEvent::Delete), Some(InputEvent::Edited));
        assert_eq!(input.buffer, "https://x.i");
    }

    #[test]
    fn test_cursor_moves_at_edges_are_none() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorHome), None);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_height_grows_with_long_urls() {
        let mut input = InputBox::new();
        assert_eq!(input.calculate_height(22), 1 + VERTICAL_OVERHEAD);
        type_text(&mut input, &"a".repeat(30)); // 20 columns inside
        assert_eq!(input.calculate_height(22), 2 + VERTICAL_OVERHEAD);
        type_text(&mut input, &"a".repeat(100));
        assert_eq!(input.calculate_height(22), MAX_VISIBLE_ROWS + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_render_shows_placeholder_then_text() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new();

        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Long URL"));
        assert!(text.contains(PLACEHOLDER));

        type_text(&mut input, "https://rust-lang.org");
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("https://rust-lang.org"));
        assert!(!text.contains(PLACEHOLDER));
    }
}
