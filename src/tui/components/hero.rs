//! # Hero Section
//!
//! The landing view: name, headline, the typewriter line, and contact
//! pointers. The typewriter text is a prop; the animation itself runs on
//! its own task and arrives through the action channel.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::ScrollView;

use crate::core::content::Profile;

use super::section_block;

pub struct Hero<'a> {
    pub profile: &'a Profile,
    pub typed: &'a str,
    pub fade: f32,
}

impl Hero<'_> {
    fn paragraph(&self) -> Paragraph<'static> {
        let accent = Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);

        let mut contact = format!("{}  ·  {}", self.profile.email, self.profile.github);
        if let Some(location) = &self.profile.location {
            contact.push_str("  ·  ");
            contact.push_str(location);
        }

        let lines = vec![
            Line::default(),
            Line::styled("Hi, I'm".to_string(), dim),
            Line::styled(self.profile.name.clone(), accent),
            Line::default(),
            Line::from(vec![
                Span::styled(self.typed.to_string(), Style::default().fg(Color::Cyan)),
                Span::styled("▌", Style::default().fg(Color::Cyan)),
            ]),
            Line::default(),
            Line::styled(contact, dim),
            Line::default(),
            Line::styled("Tab next section · 1-5 jump · m menu".to_string(), dim),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(section_block(
                self.profile.headline.clone(),
                self.fade,
                false,
            ))
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
    use crate::test_support::{render_scrollview, test_config};

    #[test]
    fn test_height_is_stable_while_typing() {
        let config = test_config();
        let empty = Hero {
            profile: &config.profile,
            typed: "",
            fade: 1.0,
        };
        let typing = Hero {
            profile: &config.profile,
            typed: "Full Stack Developer",
            fade: 1.0,
        };
        // The typed line always exists, so the section never reflows
        assert_eq!(empty.height(80), typing.height(80));
    }

    #[test]
    fn test_render_contains_typed_text() {
        let config = test_config();
        let hero = Hero {
            profile: &config.profile,
            typed: "Problem Sol",
            fade: 1.0,
        };
        let height = hero.height(80);
        let text = render_scrollview(80, height, |sv| {
            hero.render(sv, Rect::new(0, 0, 80, height));
        });
        assert!(text.contains("Problem Sol"));
        assert!(text.contains(&config.profile.name));
    }
}
