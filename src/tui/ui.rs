//! Page layout and rendering.
//!
//! The page is a vertical stack of section components inside a ScrollView.
//! Each frame we measure every section at the current width, cache the
//! offsets (navigation and visibility tracking both need them), render,
//! and then feed each section's visible fraction to the reveal tracker.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::core::content::SectionId;
use crate::core::reveal::visible_fraction;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::about::About;
use crate::tui::components::hero::Hero;
use crate::tui::components::projects::ProjectsSection;
use crate::tui::components::skills::SkillsSection;
use crate::tui::components::{ContactCard, Header, MenuOverlay, Notice};
use crate::tui::{InputMode, TuiState};

/// Blank rows between stacked sections.
const SECTION_GAP: u16 = 1;

/// Cached page geometry from the last render, in content coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageLayout {
    pub tops: [u16; SectionId::ALL.len()],
    pub heights: [u16; SectionId::ALL.len()],
    pub total: u16,
}

impl PageLayout {
    pub fn top_of(&self, section: SectionId) -> u16 {
        self.tops[section.index()]
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};

    let header_height = if tui.header.is_hidden() { 0 } else { 1 };
    let layout = Layout::vertical([Length(header_height), Min(0), Length(1)]);
    let [header_area, page_area, status_area] = layout.areas(frame.area());

    if header_height > 0 {
        let mut header = Header {
            name: &app.profile.name,
            active: app.active_section,
            shadow: tui.header.has_shadow(),
        };
        header.render(frame, header_area);
    }

    draw_page(frame, page_area, app, tui, now);
    draw_status(frame, status_area, app, tui);

    // Overlays sit on top of everything
    if let Some(menu) = &mut tui.menu {
        MenuOverlay::new(menu).render(frame, frame.area());
    }
    if let Some(text) = &app.notice {
        Notice { text }.render(frame, frame.area());
    }
}

fn draw_page(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, now: Instant) {
    let content_width = area.width.saturating_sub(1);

    // Build every section at the current width
    let hero = Hero {
        profile: &app.profile,
        typed: &app.typed_text,
        fade: tui.reveal.fade_progress(SectionId::Home, now),
    };
    let about = About {
        bio: &app.profile.bio,
        fade: tui.reveal.fade_progress(SectionId::About, now),
    };
    let bar_progress: Vec<f32> = (0..app.skills.len())
        .map(|i| tui.reveal.bar_progress(i, now))
        .collect();
    let skills = SkillsSection {
        skills: &app.skills,
        progress: &bar_progress,
        fade: tui.reveal.fade_progress(SectionId::Skills, now),
    };
    let projects = ProjectsSection {
        projects: &app.projects,
        selected: tui.selected_project,
        pending: app.pending_project,
        fade: tui.reveal.fade_progress(SectionId::Projects, now),
    };
    let contact = ContactCard {
        form: &tui.form,
        status: &app.form,
        email_to: &app.profile.email,
        editing: tui.input_mode == InputMode::Form,
        fade: tui.reveal.fade_progress(SectionId::Contact, now),
    };

    // Measure and stack
    let heights = [
        hero.height(content_width),
        about.height(content_width),
        skills.height(content_width),
        projects.height(content_width),
        contact.height(content_width),
    ];
    let mut tops = [0u16; SectionId::ALL.len()];
    let mut y = 0u16;
    for (i, h) in heights.iter().enumerate() {
        tops[i] = y;
        y += h + SECTION_GAP;
    }
    let total = y.saturating_sub(SECTION_GAP);
    let layout = PageLayout {
        tops,
        heights,
        total,
    };

    // Caret position (content coords) before the card borrows end
    let caret = contact
        .cursor_position(content_width)
        .map(|(x, y)| (x, layout.top_of(SectionId::Contact) + y));

    let mut scroll_view = ScrollView::new(Size::new(content_width, total))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    let rect = |s: SectionId| Rect::new(0, layout.top_of(s), content_width, layout.heights[s.index()]);
    hero.render(&mut scroll_view, rect(SectionId::Home));
    about.render(&mut scroll_view, rect(SectionId::About));
    skills.render(&mut scroll_view, rect(SectionId::Skills));
    projects.render(&mut scroll_view, rect(SectionId::Projects));
    contact.render(&mut scroll_view, rect(SectionId::Contact));

    tui.layout = layout;
    tui.viewport_height = area.height;

    // Clamp scroll so the page never overscrolls past the last section
    let max_scroll = total.saturating_sub(area.height);
    let offset = tui.scroll_state.offset();
    if offset.y > max_scroll {
        tui.scroll_state.set_offset(Position {
            x: offset.x,
            y: max_scroll,
        });
    }

    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll_state);

    // Feed visibility to the reveal tracker and the header
    let offset_y = tui.scroll_state.offset().y;
    for section in SectionId::ALL {
        let fraction = visible_fraction(
            layout.top_of(section),
            layout.heights[section.index()],
            offset_y,
            area.height,
        );
        tui.reveal.observe(section, fraction, now);
    }
    tui.header.observe_scroll(offset_y);

    // Place the caret if the focused form field is on screen
    if let Some((x, content_y)) = caret {
        if content_y >= offset_y && content_y < offset_y + area.height {
            frame.set_cursor_position((area.x + x, area.y + content_y - offset_y));
        }
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let hints = match tui.input_mode {
        InputMode::Browse => "↑↓ scroll · Tab sections · m menu · q quit",
        InputMode::Form => "Esc done · Enter/Tab next field · Ctrl+S send",
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.status_message),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_config};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui_smoke() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(&test_config());
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        // Header and hero are on screen at offset zero
        assert!(text.contains("Home"));
        assert!(text.contains(&app.profile.name));
    }

    #[test]
    fn test_layout_caches_all_sections() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(&test_config());
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        // Sections are stacked in order with gaps
        let layout = tui.layout;
        assert_eq!(layout.top_of(SectionId::Home), 0);
        for pair in SectionId::ALL.windows(2) {
            assert!(layout.top_of(pair[1]) > layout.top_of(pair[0]));
        }
        assert!(layout.total > layout.top_of(SectionId::Contact));
    }

    #[test]
    fn test_home_reveals_on_first_frame() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(&test_config());
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        assert!(tui.reveal.is_revealed(SectionId::Home));
        // Far-away sections have not revealed yet
        assert!(!tui.reveal.is_revealed(SectionId::Contact));
    }

    #[test]
    fn test_menu_overlay_draws_on_top() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.menu_open = true;
        let mut tui = TuiState::new(&test_config());
        tui.menu = Some(crate::tui::components::MenuState::new(SectionId::Home));
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Menu"));
    }
}
