//! Cursor position tracking and navigation for the InputBox.
//!
//! `CursorState` owns the cursor byte offset, scroll offset, and cached width.
//! All navigation methods take `buffer: &str` explicitly; the text itself is
//! owned by `InputBox`.

use super::text_wrap::{
    BORDER_OFFSET, MAX_VISIBLE_ROWS, byte_at, cursor_row_col, inner_width, row_count,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible row when the URL is taller than the field
    pub scroll_offset: u16,
    /// Content width from the last render (used for vertical movement)
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Move one wrapped row up (`-1`) or down (`1`), keeping the column if possible.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16) -> bool {
        let width = inner_width(self.last_content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let (row, col) = cursor_row_col(buffer, self.pos, width);
        let last_row = row_count(buffer, width) - 1;
        let target_row = match direction {
            d if d < 0 && row > 0 => row - 1,
            d if d > 0 && row < last_row => row + 1,
            _ => return false,
        };

        self.pos = byte_at(buffer, width, target_row, col);
        true
    }

    /// Keep the cursor row inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        if row_count(buffer, width) <= MAX_VISIBLE_ROWS {
            self.scroll_offset = 0;
            return;
        }

        let (cursor_row, _) = cursor_row_col(buffer, self.pos, width);
        if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        } else if cursor_row >= self.scroll_offset + MAX_VISIBLE_ROWS {
            self.scroll_offset = cursor_row + 1 - MAX_VISIBLE_ROWS;
        }
    }

    /// Screen (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let (row, col) = cursor_row_col(buffer, self.pos, width);
        let visible_row = row.saturating_sub(self.scroll_offset);
        (
            area.x + BORDER_OFFSET + col,
            area.y + BORDER_OFFSET + visible_row,
        )
    }
}
