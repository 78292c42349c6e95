//! # Projects Section
//!
//! One card per project: name, markdown description, tech tags, and the
//! two action buttons. Buttons don't open anything real; activating one
//! shows a loading state for a moment and then raises a notice, the same
//! theater the page performs.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::ScrollView;

use crate::core::content::{Project, ProjectLink};
use crate::core::state::PendingProject;
use crate::tui::markdown;

use super::section_block;

pub struct ProjectsSection<'a> {
    pub projects: &'a [Project],
    pub selected: usize,
    pub pending: Option<PendingProject>,
    pub fade: f32,
}

impl ProjectsSection<'_> {
    fn card_block(&self, index: usize, project: &Project) -> Block<'static> {
        let border = if index == self.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if index == self.selected { "▸ " } else { "" };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(format!(" {}{} ", marker, project.name))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
    }

    fn card_body(&self, index: usize, project: &Project) -> Paragraph<'static> {
        let mut text = markdown::render(&project.description, Color::Gray);

        if !project.tech.is_empty() {
            text.lines.push(Line::styled(
                project.tech.join(" · "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        text.lines.push(Line::default());
        text.lines.push(self.buttons_line(index));

        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(self.card_block(index, project))
    }

    fn buttons_line(&self, index: usize) -> Line<'static> {
        let button = |link: ProjectLink| -> Span<'static> {
            let loading = self
                .pending
                .is_some_and(|p| p.index == index && p.link == link);
            let label = if loading {
                "[ Loading... ]".to_string()
            } else {
                format!("[ {} ]", link.button_label())
            };
            let style = if loading {
                Style::default().fg(Color::Yellow)
            } else if index == self.selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(label, style)
        };

        Line::from(vec![
            button(ProjectLink::Demo),
            Span::raw("  "),
            button(ProjectLink::Repo),
        ])
    }

    fn card_height(&self, index: usize, project: &Project, width: u16) -> u16 {
        self.card_body(index, project).line_count(width) as u16
    }

    pub fn height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2);
        let cards: u16 = self
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| self.card_height(i, p, inner_width))
            .sum();
        cards + 2
    }

    pub fn render(&self, sv: &mut ScrollView, area: Rect) {
        let outer = section_block("Projects".to_string(), self.fade, false).title_bottom(
            Line::styled(
                " ←/→ select · Enter demo · g repo ",
                Style::default().fg(Color::DarkGray),
            )
            .centered(),
        );
        let inner = outer.inner(area);
        sv.render_widget(outer, area);

        let mut y = inner.y;
        for (i, project) in self.projects.iter().enumerate() {
            let height = self.card_height(i, project, inner.width);
            let rect = Rect::new(inner.x, y, inner.width, height);
            sv.render_widget(self.card_body(i, project), rect);
            y += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{render_scrollview, test_config};

    #[test]
    fn test_render_shows_cards_and_buttons() {
        let config = test_config();
        let section = ProjectsSection {
            projects: &config.projects,
            selected: 0,
            pending: None,
            fade: 1.0,
        };
        let height = section.height(70);
        let text = render_scrollview(70, height, |sv| {
            section.render(sv, Rect::new(0, 0, 70, height));
        });
        assert!(text.contains("Weather Dashboard"));
        assert!(text.contains("[ Demo ]"));
        assert!(text.contains("[ GitHub ]"));
    }

    #[test]
    fn test_pending_button_shows_loading() {
        let config = test_config();
        let section = ProjectsSection {
            projects: &config.projects,
            selected: 0,
            pending: Some(PendingProject {
                index: 0,
                link: ProjectLink::Demo,
            }),
            fade: 1.0,
        };
        let height = section.height(70);
        let text = render_scrollview(70, height, |sv| {
            section.render(sv, Rect::new(0, 0, 70, height));
        });
        assert!(text.contains("[ Loading... ]"));
        // The other card's buttons are untouched
        assert!(text.contains("[ GitHub ]"));
    }

    #[test]
    fn test_selected_card_is_marked() {
        let config = test_config();
        let section = ProjectsSection {
            projects: &config.projects,
            selected: 1,
            pending: None,
            fade: 1.0,
        };
        let height = section.height(70);
        let text = render_scrollview(70, height, |sv| {
            section.render(sv, Rect::new(0, 0, 70, height));
        });
        assert!(text.contains("▸ Task Tracker"));
    }

    #[test]
    fn test_height_covers_all_cards() {
        let config = test_config();
        let section = ProjectsSection {
            projects: &config.projects,
            selected: 0,
            pending: None,
            fade: 1.0,
        };
        // Two cards of at least 4 rows each inside the outer borders
        assert!(section.height(70) >= 2 + 2 * 4);
    }
}
