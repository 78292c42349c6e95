//! # About Section
//!
//! The bio, rendered from markdown so config authors get emphasis, lists,
//! and links without any extra machinery.

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::ScrollView;

use crate::tui::markdown;

use super::section_block;

pub struct About<'a> {
    pub bio: &'a str,
    pub fade: f32,
}

impl About<'_> {
    fn paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(markdown::render(self.bio, Color::Gray))
            .wrap(Wrap { trim: true })
            .block(section_block("About Me".to_string(), self.fade, false))
    }

    pub fn height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width) as u16
    }

    pub fn render(&self, sv: &mut ScrollView, area: Rect) {
        sv.render_widget(self.paragraph(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_scrollview;

    #[test]
    fn test_render_shows_bio_text() {
        let about = About {
            bio: "I build **things** for the terminal.",
            fade: 1.0,
        };
        let height = about.height(60);
        let text = render_scrollview(60, height, |sv| {
            about.render(sv, Rect::new(0, 0, 60, height));
        });
        assert!(text.contains("About Me"));
        assert!(text.contains("things"));
    }

    #[test]
    fn test_height_grows_with_content() {
        let short = About {
            bio: "One line.",
            fade: 1.0,
        };
        let long = About {
            bio: "para one\n\npara two\n\npara three",
            fade: 1.0,
        };
        assert!(long.height(60) > short.height(60));
    }
}
