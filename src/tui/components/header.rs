//! # Header Component
//!
//! Top nav bar listing the page sections with their jump digits.
//!
//! Mirrors the page's scroll-aware nav chrome:
//! - past a small scroll offset the bar picks up a "shadow" (a filled
//!   background) so it reads as floating over content;
//! - scrolling *down* past a deeper offset hides the bar entirely, and any
//!   upward scroll brings it back.
//!
//! `HeaderState` owns the scroll bookkeeping and persists in `TuiState`;
//! `Header` is the transient render wrapper built each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::SectionId;
use crate::tui::component::Component;

/// Scroll offset (in page rows) past which the bar renders its shadow.
pub const SHADOW_SCROLL_OFFSET: u16 = 5;
/// Scroll offset past which downward scrolling hides the bar.
pub const HIDE_SCROLL_OFFSET: u16 = 10;

/// Persistent scroll bookkeeping for the header.
#[derive(Default)]
pub struct HeaderState {
    last_offset: u16,
    hidden: bool,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current page offset; tracks direction to decide visibility.
    pub fn observe_scroll(&mut self, offset: u16) {
        if offset > self.last_offset && offset > HIDE_SCROLL_OFFSET {
            self.hidden = true;
        } else if offset < self.last_offset || offset <= HIDE_SCROLL_OFFSET {
            self.hidden = false;
        }
        self.last_offset = offset;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn has_shadow(&self) -> bool {
        self.last_offset > SHADOW_SCROLL_OFFSET
    }
}

/// Transient render wrapper for the nav bar.
pub struct Header<'a> {
    pub name: &'a str,
    pub active: SectionId,
    pub shadow: bool,
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let base = if self.shadow {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.name),
                base.add_modifier(Modifier::BOLD),
            ),
            Span::styled("│", base.fg(Color::DarkGray)),
        ];
        for (i, section) in SectionId::ALL.iter().enumerate() {
            let style = if *section == self.active {
                base.fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                base.fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, section.label()), style));
        }

        let line = Line::from(spans).style(base);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_shadow_after_threshold() {
        let mut state = HeaderState::new();
        state.observe_scroll(2);
        assert!(!state.has_shadow());
        state.observe_scroll(SHADOW_SCROLL_OFFSET + 1);
        assert!(state.has_shadow());
    }

    #[test]
    fn test_hides_on_deep_downward_scroll() {
        let mut state = HeaderState::new();
        state.observe_scroll(8);
        assert!(!state.is_hidden());
        state.observe_scroll(15);
        assert!(state.is_hidden());
    }

    #[test]
    fn test_reappears_on_scroll_up() {
        let mut state = HeaderState::new();
        state.observe_scroll(20);
        assert!(state.is_hidden());
        state.observe_scroll(18);
        assert!(!state.is_hidden());
    }

    #[test]
    fn test_shallow_scrolling_never_hides() {
        let mut state = HeaderState::new();
        state.observe_scroll(3);
        state.observe_scroll(6);
        state.observe_scroll(9);
        assert!(!state.is_hidden());
    }

    #[test]
    fn test_render_lists_sections() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut header = Header {
            name: "Your Name",
            active: SectionId::Skills,
            shadow: false,
        };
        terminal.draw(|f| header.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Your Name"));
        assert!(text.contains("Skills"));
        assert!(text.contains("Contact"));
    }
}
