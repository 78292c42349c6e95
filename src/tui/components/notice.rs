//! # Notice Component
//!
//! Modal raised when a project button finishes its simulated "open": the
//! terminal stand-in for the page's `alert()`. Any key dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct Notice<'a> {
    pub text: &'a str,
}

impl Component for Notice<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = (area.width * 6 / 10).clamp(20, 60);
        // Content height at the chosen width, plus borders and padding
        let inner = width.saturating_sub(4);
        let height = Paragraph::new(self.text)
            .wrap(Wrap { trim: true })
            .line_count(inner) as u16
            + 2;

        let [overlay_v] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [overlay] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(overlay_v);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Notice ")
            .title_bottom(Line::from(" any key to dismiss ").centered())
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(self.text)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left)
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}
