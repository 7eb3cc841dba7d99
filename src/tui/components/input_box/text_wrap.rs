//! Text wrapping utilities and dimensional constants for the InputBox.
//!
//! Rows come from `textwrap` with word breaking on, so a URL without spaces
//! breaks on display width. Rendering, height and cursor placement all go
//! through `rows()` so they agree on where each row starts.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Left + right borders consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible rows before the field scrolls internally
pub(super) const MAX_VISIBLE_ROWS: u16 = 3;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// Build textwrap options configured for the input box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting the borders.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// One wrapped row and the byte offset in the buffer where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Row<'a> {
    pub start: usize,
    pub text: std::borrow::Cow<'a, str>,
}

impl Row<'_> {
    fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Wrapped rows of `text`. Spaces dropped at a break belong to no row.
pub(super) fn rows(text: &str, width: u16) -> Vec<Row<'_>> {
    let mut offset = 0;
    textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| {
            let start = text[offset..].find(line.as_ref()).map_or(offset, |i| offset + i);
            offset = start + line.len();
            Row { start, text: line }
        })
        .collect()
}

/// Row and display column of the cursor at byte `pos`.
///
/// A cursor at the end of a full last row sits at the start of the next row.
pub(super) fn cursor_row_col(text: &str, pos: usize, width: u16) -> (u16, u16) {
    let width = width.max(1);
    let rows = rows(text, width);
    let (index, row) = match rows.iter().enumerate().rev().find(|(_, r)| r.start <= pos) {
        Some(found) => found,
        None => return (0, 0),
    };
    let col = text[row.start..pos].width() as u16;
    let is_last = index + 1 == rows.len();

    if is_last && pos == text.len() && col >= width {
        (index as u16 + 1, 0)
    } else {
        (index as u16, col.min(width - 1))
    }
}

/// Visual rows the text occupies, counting the cursor row at the end.
pub(super) fn row_count(text: &str, width: u16) -> u16 {
    let wrapped = rows(text, width).len().max(1) as u16;
    let (cursor_row, _) = cursor_row_col(text, text.len(), width);
    wrapped.max(cursor_row + 1)
}

/// Byte offset on `row` closest to display column `col` without passing it.
pub(super) fn byte_at(text: &str, width: u16, row: u16, col: u16) -> usize {
    let rows = rows(text, width);
    let Some(target) = rows.get(row as usize) else {
        return text.len();
    };

    let mut used = 0u16;
    for (i, c) in text[target.start..target.end()].char_indices() {
        let w = c.width().unwrap_or(0) as u16;
        if used + w > col {
            return target.start + i;
        }
        used += w;
    }
    target.end()
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_texts(text: &str, width: u16) -> Vec<String> {
        rows(text, width).into_iter().map(|r| r.text.into_owned()).collect()
    }

    #[test]
    fn test_short_text_is_one_row() {
        assert_eq!(row_texts("https://a.io", 20), vec!["https://a.io"]);
        assert_eq!(row_count("https://a.io", 20), 1);
        assert_eq!(row_count("", 20), 1);
    }

    #[test]
    fn test_url_without_spaces_breaks_on_width() {
        assert_eq!(row_texts("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(row_count("abcdefghij", 4), 3);
        let starts: Vec<usize> = rows("abcdefghij", 4).iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![0, 4, 8]);
    }

    #[test]
    fn test_space_at_break_is_skipped() {
        let rows = rows("aaaa bbbb", 4);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].start, 5);
        assert_eq!(rows[1].text, "bbbb");
    }

    #[test]
    fn test_full_last_row_adds_cursor_row() {
        assert_eq!(row_texts("abcd", 4), vec!["abcd"]);
        assert_eq!(row_count("abcd", 4), 2);
        assert_eq!(cursor_row_col("abcd", 4, 4), (1, 0));
    }

    #[test]
    fn test_wide_chars_wrap_early() {
        // Each CJK char is two columns wide
        assert_eq!(row_texts("a日本", 4), vec!["a日", "本"]);
        assert_eq!(cursor_row_col("a日本", "a日".len(), 4), (1, 0));
    }

    #[test]
    fn test_cursor_positions() {
        let text = "abcdefghij";
        assert_eq!(cursor_row_col(text, 0, 4), (0, 0));
        assert_eq!(cursor_row_col(text, 5, 4), (1, 1));
        assert_eq!(cursor_row_col(text, 10, 4), (2, 2));
    }

    #[test]
    fn test_byte_at_clamps_to_row_end() {
        let text = "abcdefghij";
        assert_eq!(byte_at(text, 4, 1, 2), 6);
        // Row 2 only has two chars
        assert_eq!(byte_at(text, 4, 2, 3), 10);
        assert_eq!(byte_at(text, 4, 0, 0), 0);
        assert_eq!(byte_at(text, 4, 7, 0), text.len());
    }

    #[test]
    fn test_char_boundaries_respect_utf8() {
        let text = "aé日";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(prev_char_boundary(text, 3), 1);
        assert_eq!(prev_char_boundary(text, text.len()), 3);
        assert_eq!(next_char_boundary(text, text.len()), text.len());
    }

    #[test]
    fn test_inner_width() {
        assert_eq!(inner_width(40), 38);
        assert_eq!(inner_width(1), 0);
    }
}
