//! # Skills Section
//!
//! One bar per skill. Bars start empty and fill to their configured level
//! the first time the section scrolls into view, each bar starting a beat
//! after the previous one. Fill progress comes from `core::reveal`; this
//! component only draws the given fractions.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::ScrollView;
use unicode_width::UnicodeWidthStr;

use crate::core::content::Skill;

use super::section_block;

/// Columns reserved for the trailing percentage label.
const PCT_COL: usize = 5;

pub struct SkillsSection<'a> {
    pub skills: &'a [Skill],
    /// Fill progress per skill, `0.0..=1.0`, indexed like `skills`.
    pub progress: &'a [f32],
    pub fade: f32,
}

impl SkillsSection<'_> {
    fn name_column(&self) -> usize {
        self.skills
            .iter()
            .map(|s| s.name.width())
            .max()
            .unwrap_or(0)
            + 2
    }

    fn paragraph(&self, width: u16) -> Paragraph<'static> {
        let name_col = self.name_column();
        // Borders (2) plus a space of padding each side
        let inner = (width.saturating_sub(4)) as usize;
        let bar_width = inner.saturating_sub(name_col + PCT_COL).max(8);

        let lines: Vec<Line> = self
            .skills
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                let progress = self.progress.get(i).copied().unwrap_or(0.0);
                let shown = skill.level as f32 * progress;
                let filled = (shown / 100.0 * bar_width as f32).round() as usize;

                let mut spans = vec![Span::styled(
                    format!(" {:<name_col$}", skill.name),
                    Style::default().fg(Color::Gray),
                )];
                spans.push(Span::styled(
                    "█".repeat(filled.min(bar_width)),
                    Style::default().fg(Color::Cyan),
                ));
                spans.push(Span::styled(
                    "░".repeat(bar_width.saturating_sub(filled)),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                ));
                spans.push(Span::styled(
                    format!(" {:>3}%", shown.round() as u8),
                    Style::default().fg(Color::Gray),
                ));
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(section_block("Skills".to_string(), self.fade, false))
    }

    pub fn height(&self, _width: u16) -> u16 {
        self.skills.len() as u16 + 2
    }

    pub fn render(&self, sv: &mut ScrollView, area: Rect) {
        sv.render_widget(self.paragraph(area.width), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_scrollview;

    fn skills() -> Vec<Skill> {
        vec![
            Skill {
                name: "Rust".to_string(),
                level: 80,
            },
            Skill {
                name: "SQL".to_string(),
                level: 60,
            },
        ]
    }

    #[test]
    fn test_height_is_one_row_per_skill_plus_borders() {
        let skills = skills();
        let section = SkillsSection {
            skills: &skills,
            progress: &[1.0, 1.0],
            fade: 1.0,
        };
        assert_eq!(section.height(80), 4);
    }

    #[test]
    fn test_unstarted_bars_show_zero() {
        let skills = skills();
        let section = SkillsSection {
            skills: &skills,
            progress: &[0.0, 0.0],
            fade: 1.0,
        };
        let text = render_scrollview(80, 4, |sv| {
            section.render(sv, Rect::new(0, 0, 80, 4));
        });
        assert!(text.contains("0%"));
        assert!(!text.contains('█'));
    }

    #[test]
    fn test_finished_bars_show_configured_level() {
        let skills = skills();
        let section = SkillsSection {
            skills: &skills,
            progress: &[1.0, 1.0],
            fade: 1.0,
        };
        let text = render_scrollview(80, 4, |sv| {
            section.render(sv, Rect::new(0, 0, 80, 4));
        });
        assert!(text.contains("80%"));
        assert!(text.contains("60%"));
        assert!(text.contains('█'));
    }

    #[test]
    fn test_partial_fill_is_between() {
        let skills = skills();
        let section = SkillsSection {
            skills: &skills,
            progress: &[0.5, 0.0],
            fade: 1.0,
        };
        let text = render_scrollview(80, 4, |sv| {
            section.render(sv, Rect::new(0, 0, 80, 4));
        });
        // Half of level 80 rounds to 40%
        assert!(text.contains("40%"));
    }
}
