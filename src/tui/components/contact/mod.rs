//! # Contact Section
//!
//! The contact form: three fields with blur validation, a submit button
//! with a sending state, and the success banner. Field buffers and focus
//! are presentation state (`FormState`, persisted in `TuiState`);
//! validation results and submission state are core state, received here
//! as props.

mod field;

pub use field::TextField;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::ScrollView;

use crate::core::state::ContactForm;
use crate::core::validate::{FieldStatus, FormField};

use super::section_block;

/// Persistent form presentation state: what the user has typed and where
/// the caret is.
pub struct FormState {
    pub name: TextField,
    pub email: TextField,
    pub message: TextField,
    pub focus: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: TextField::single_line(),
            email: TextField::single_line(),
            message: TextField::multi_line(),
            focus: FormField::Name,
        }
    }

    pub fn field(&self, field: FormField) -> &TextField {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut TextField {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        self.field_mut(self.focus)
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.field(field).buffer
    }

    /// Copies of all three field values, for submit.
    pub fn snapshot(&self) -> (String, String, String) {
        (
            self.name.buffer.clone(),
            self.email.buffer.clone(),
            self.message.buffer.clone(),
        )
    }

    /// Move focus forward. Returns the field that lost focus so the caller
    /// can run its blur validation.
    pub fn focus_next(&mut self) -> FormField {
        let blurred = self.focus;
        self.focus = self.focus.next();
        blurred
    }

    /// Move focus backward. Returns the field that lost focus.
    pub fn focus_prev(&mut self) -> FormField {
        let blurred = self.focus;
        self.focus = self.focus.prev();
        blurred
    }

    /// Wipe all fields, as after a successful send.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = FormField::Name;
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Piece {
    Intro,
    Field(FormField),
    Error(FormField),
    Buttons,
    Success,
}

/// Transient render wrapper for the contact section.
pub struct ContactCard<'a> {
    pub form: &'a FormState,
    pub status: &'a ContactForm,
    pub email_to: &'a str,
    /// True while the user is in Form input mode (shows the caret and
    /// highlights the focused field).
    pub editing: bool,
    pub fade: f32,
}

impl ContactCard<'_> {
    fn intro_paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(format!(
            "Have a question or want to work together? Send a message here \
             or write to {}.",
            self.email_to
        ))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
    }

    fn success_paragraph(text: &str) -> Paragraph<'static> {
        Paragraph::new(text.to_string())
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: true })
    }

    /// Rows of the form body, as `(piece, y, height)` with `y` relative to
    /// the section's top border. Layout and rendering share this so
    /// heights, hit positions, and the caret always agree.
    fn layout(&self, width: u16) -> Vec<(Piece, u16, u16)> {
        let inner_w = width.saturating_sub(2);
        let content_w = inner_w.saturating_sub(2);
        let mut rows = Vec::new();
        let mut y = 1u16;

        let intro_h = self.intro_paragraph().line_count(inner_w) as u16;
        rows.push((Piece::Intro, y, intro_h));
        y += intro_h + 1;

        for field in FormField::ALL {
            let h = self.form.field(field).visible_height(content_w) + 2;
            rows.push((Piece::Field(field), y, h));
            y += h;
            if self.status.status(field).error().is_some() {
                rows.push((Piece::Error(field), y, 1));
                y += 1;
            }
        }

        y += 1;
        rows.push((Piece::Buttons, y, 1));
        y += 1;

        if let Some(success) = &self.status.success {
            y += 1;
            let h = Self::success_paragraph(&success.text).line_count(inner_w) as u16;
            rows.push((Piece::Success, y, h));
        }

        rows
    }

    fn body_end(&self, width: u16) -> u16 {
        self.layout(width)
            .last()
            .map(|(_, y, h)| y + h)
            .unwrap_or(1)
    }

    pub fn height(&self, width: u16) -> u16 {
        self.body_end(width) + 1
    }

    fn field_block(&self, field: FormField) -> Block<'static> {
        let focused = self.editing && self.form.focus == field;
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            match self.status.status(field) {
                FieldStatus::Valid => Style::default().fg(Color::Green),
                FieldStatus::Invalid(_) => Style::default().fg(Color::Red),
                FieldStatus::Pristine => Style::default().fg(Color::DarkGray),
            }
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(format!(" {} ", field.label()))
    }

    fn field_paragraph(&self, field: FormField, content_w: u16) -> Paragraph<'static> {
        let text_field = self.form.field(field);
        let lines: Vec<Line> = match field {
            FormField::Message => {
                let (lines, _, _) = text_field.multi_line_view(content_w);
                lines.into_iter().map(Line::from).collect()
            }
            _ => {
                let (text, _) = text_field.single_line_view(content_w);
                vec![Line::from(text)]
            }
        };
        Paragraph::new(lines)
            .style(Style::default().fg(Color::White))
            .block(self.field_block(field))
    }

    fn buttons_line(&self) -> Line<'static> {
        let (label, style) = if self.status.is_sending {
            (
                "[ Sending... ]".to_string(),
                Style::default().fg(Color::Yellow),
            )
        } else {
            (
                "[ Send Message ]".to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        };
        Line::from(vec![
            Span::styled(label, style),
            Span::styled("  Ctrl+S", Style::default().fg(Color::DarkGray)),
        ])
    }

    pub fn render(&self, sv: &mut ScrollView, area: Rect) {
        let highlight = self.editing;
        sv.render_widget(
            section_block("Contact".to_string(), self.fade, highlight),
            area,
        );

        let inner_w = area.width.saturating_sub(2);
        let content_w = inner_w.saturating_sub(2);

        for (piece, y, h) in self.layout(area.width) {
            let rect = Rect::new(area.x + 1, area.y + y, inner_w, h);
            match piece {
                Piece::Intro => sv.render_widget(self.intro_paragraph(), rect),
                Piece::Field(field) => {
                    sv.render_widget(self.field_paragraph(field, content_w), rect)
                }
                Piece::Error(field) => {
                    if let Some(msg) = self.status.status(field).error() {
                        sv.render_widget(
                            Line::styled(
                                format!("✗ {msg}"),
                                Style::default().fg(Color::Red),
                            ),
                            rect,
                        );
                    }
                }
                Piece::Buttons => sv.render_widget(self.buttons_line(), rect),
                Piece::Success => {
                    if let Some(success) = &self.status.success {
                        sv.render_widget(Self::success_paragraph(&success.text), rect);
                    }
                }
            }
        }
    }

    /// Caret position relative to the section's top-left corner, when the
    /// form is being edited.
    pub fn cursor_position(&self, width: u16) -> Option<(u16, u16)> {
        if !self.editing {
            return None;
        }
        let content_w = width.saturating_sub(4);
        let focus = self.form.focus;
        let (_, field_y, _) = self
            .layout(width)
            .into_iter()
            .find(|(piece, _, _)| *piece == Piece::Field(focus))?;

        let (row, col) = match focus {
            FormField::Message => {
                let (_, row, col) = self.form.field(focus).multi_line_view(content_w);
                (row, col)
            }
            _ => {
                let (_, col) = self.form.field(focus).single_line_view(content_w);
                (0, col)
            }
        };
        Some((2 + col, field_y + 1 + row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::SuccessNotice;
    use crate::test_support::render_scrollview;
    use crate::tui::event::TuiEvent;

    fn card<'a>(form: &'a FormState, status: &'a ContactForm) -> ContactCard<'a> {
        ContactCard {
            form,
            status,
            email_to: "your.email@example.com",
            editing: false,
            fade: 1.0,
        }
    }

    #[test]
    fn test_render_shows_fields_and_button() {
        let form = FormState::new();
        let status = ContactForm::default();
        let c = card(&form, &status);
        let height = c.height(70);
        let text = render_scrollview(70, height, |sv| {
            c.render(sv, Rect::new(0, 0, 70, height));
        });
        assert!(text.contains("Contact"));
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("Message"));
        assert!(text.contains("[ Send Message ]"));
    }

    #[test]
    fn test_error_row_adds_height_and_text() {
        let form = FormState::new();
        let mut status = ContactForm::default();
        let plain_height = card(&form, &status).height(70);

        status.set_status(
            FormField::Email,
            FieldStatus::Invalid("Please enter a valid email address"),
        );
        let c = card(&form, &status);
        let height = c.height(70);
        assert_eq!(height, plain_height + 1);

        let text = render_scrollview(70, height, |sv| {
            c.render(sv, Rect::new(0, 0, 70, height));
        });
        assert!(text.contains("✗ Please enter a valid email address"));
    }

    #[test]
    fn test_sending_state_swaps_button_label() {
        let form = FormState::new();
        let status = ContactForm {
            is_sending: true,
            ..Default::default()
        };
        let c = card(&form, &status);
        let height = c.height(70);
        let text = render_scrollview(70, height, |sv| {
            c.render(sv, Rect::new(0, 0, 70, height));
        });
        assert!(text.contains("[ Sending... ]"));
        assert!(!text.contains("[ Send Message ]"));
    }

    #[test]
    fn test_success_banner_renders() {
        let form = FormState::new();
        let status = ContactForm {
            success: Some(SuccessNotice::new(
                "Thank you Sam! Your message has been received.".to_string(),
            )),
            ..Default::default()
        };
        let c = card(&form, &status);
        let height = c.height(70);
        let text = render_scrollview(70, height, |sv| {
            c.render(sv, Rect::new(0, 0, 70, height));
        });
        assert!(text.contains("Thank you Sam!"));
    }

    #[test]
    fn test_cursor_only_while_editing() {
        let form = FormState::new();
        let status = ContactForm::default();
        assert!(card(&form, &status).cursor_position(70).is_none());

        let c = ContactCard {
            editing: true,
            ..card(&form, &status)
        };
        let (x, y) = c.cursor_position(70).unwrap();
        assert_eq!(x, 2); // empty name field, caret at the left edge
        assert!(y > 0);
    }

    #[test]
    fn test_cursor_moves_down_with_focus() {
        let mut form = FormState::new();
        let status = ContactForm::default();

        let name_y = ContactCard {
            editing: true,
            ..card(&form, &status)
        }
        .cursor_position(70)
        .unwrap()
        .1;

        form.focus_next();
        let email_y = ContactCard {
            editing: true,
            ..card(&form, &status)
        }
        .cursor_position(70)
        .unwrap()
        .1;
        assert!(email_y > name_y);
    }

    #[test]
    fn test_focus_cycle_reports_blurred_field() {
        let mut form = FormState::new();
        assert_eq!(form.focus_next(), FormField::Name);
        assert_eq!(form.focus, FormField::Email);
        assert_eq!(form.focus_prev(), FormField::Email);
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn test_snapshot_and_clear() {
        let mut form = FormState::new();
        form.field_mut(FormField::Name)
            .handle_event(&TuiEvent::Paste("Sam".to_string()));
        form.field_mut(FormField::Email)
            .handle_event(&TuiEvent::Paste("sam@example.com".to_string()));

        let (name, email, message) = form.snapshot();
        assert_eq!(name, "Sam");
        assert_eq!(email, "sam@example.com");
        assert!(message.is_empty());

        form.clear();
        assert!(form.value(FormField::Name).is_empty());
        assert_eq!(form.focus, FormField::Name);
    }
}
