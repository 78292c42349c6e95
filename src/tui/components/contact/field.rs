//! Editable text field used by the contact form.
//!
//! A trimmed-down line editor: byte-offset cursor, char-boundary safe
//! editing, paste support, and wrapped display for the multiline message
//! field. Validation is not its concern; the core sees snapshots of the
//! buffer on blur and submit.

use textwrap::WordSeparator;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::event::TuiEvent;

/// Visible content rows for the message field before it starts windowing.
pub const MAX_MESSAGE_LINES: u16 = 5;

pub struct TextField {
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    multiline: bool,
}

impl TextField {
    pub fn single_line() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            multiline: false,
        }
    }

    pub fn multi_line() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            multiline: true,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Apply an editing event. Returns `true` if the buffer or cursor
    /// changed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                if *c == '\n' && !self.multiline {
                    return false;
                }
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            TuiEvent::Paste(text) => {
                let text = if self.multiline {
                    text.clone()
                } else {
                    // Single-line fields flatten pasted newlines
                    text.replace(['\r', '\n'], " ")
                };
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                true
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    true
                } else {
                    false
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    true
                } else {
                    false
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    true
                } else {
                    false
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    true
                } else {
                    false
                }
            }
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                let moved = self.cursor != line_start;
                self.cursor = line_start;
                moved
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                let moved = self.cursor != line_end;
                self.cursor = line_end;
                moved
            }
            _ => false,
        }
    }

    /// Content rows this field occupies at the given inner width.
    pub fn visible_height(&self, inner_width: u16) -> u16 {
        if !self.multiline {
            return 1;
        }
        wrap_line_count(&self.buffer, inner_width).min(MAX_MESSAGE_LINES)
    }

    /// Single-line display window: the visible slice of the buffer and the
    /// cursor's column within it. Scrolls horizontally so the cursor always
    /// stays in view.
    pub fn single_line_view(&self, inner_width: u16) -> (String, u16) {
        debug_assert!(!self.multiline);
        let inner = inner_width.max(1) as usize;

        // Walk back from the cursor until the window is full
        let before = &self.buffer[..self.cursor];
        let mut start = self.cursor;
        let mut used = 0usize;
        for (i, c) in before.char_indices().rev() {
            let w = c.width().unwrap_or(0);
            if used + w >= inner {
                break;
            }
            used += w;
            start = i;
        }

        // Extend forward from the cursor while there's room
        let mut text: String = self.buffer[start..self.cursor].to_string();
        let mut width = used;
        for c in self.buffer[self.cursor..].chars() {
            let w = c.width().unwrap_or(0);
            if width + w >= inner {
                break;
            }
            width += w;
            text.push(c);
        }

        (text, used as u16)
    }

    /// Multiline display window: visible wrapped lines plus the cursor's
    /// row (within the window) and column.
    pub fn multi_line_view(&self, inner_width: u16) -> (Vec<String>, u16, u16) {
        debug_assert!(self.multiline);
        let lines = wrapped(&self.buffer, inner_width);
        let total = lines.len().max(1) as u16;

        let (cursor_line, cursor_col) = self.cursor_line_col(inner_width);

        // Window the lines so the cursor row is always visible
        let window = MAX_MESSAGE_LINES;
        let max_start = total.saturating_sub(window);
        let start = cursor_line
            .saturating_sub(window.saturating_sub(1))
            .min(max_start);

        let visible: Vec<String> = lines
            .into_iter()
            .skip(start as usize)
            .take(window as usize)
            .collect();

        (visible, cursor_line - start, cursor_col)
    }

    /// Which wrapped line (0-based) the cursor is on, and its display
    /// column.
    fn cursor_line_col(&self, inner_width: u16) -> (u16, u16) {
        let before = &self.buffer[..self.cursor];
        let lines = wrapped(before, inner_width);
        let mut row = lines.len().saturating_sub(1) as u16;
        let mut col = lines.last().map(|l| l.width() as u16).unwrap_or(0);

        // A trailing newline puts the cursor at the start of the next row
        if before.ends_with('\n') {
            row += 1;
            col = 0;
        }
        (row, col)
    }
}

/// Build textwrap options configured for a field's inner width.
fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width.max(1) as usize)
        .break_words(true)
        .word_separator(WordSeparator::AsciiSpace)
}

fn wrapped(text: &str, inner_width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(text, wrap_options(inner_width))
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

/// Count wrapped lines, accounting for trailing newlines that textwrap
/// doesn't represent as empty lines.
fn wrap_line_count(text: &str, inner_width: u16) -> u16 {
    if text.is_empty() {
        return 1;
    }
    let lines = textwrap::wrap(text, wrap_options(inner_width));
    let mut count = (lines.len() as u16).max(1);
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        count += 1;
    }
    count
}

/// Find the byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
